//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod convert;
mod history;
mod selection;

use crate::commands::Cmd;
use crate::messages::{AppMsg, ConvertMsg, Msg};
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::SessionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use convert::update_convert;
pub use history::update_history;
pub use selection::update_selection;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    if model.is_in_flight() && !runs_while_in_flight(&msg) {
        tracing::debug!(target: "session", ?msg, "Ignoring message while conversion is in flight");
        return None;
    }

    match msg {
        Msg::Convert(m) => convert::update_convert(model, m),
        Msg::Selection(m) => selection::update_selection(model, m),
        Msg::History(m) => history::update_history(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Messages that may run while a conversion waits for its acknowledgement:
/// the acknowledgement itself, config changes and shutdown.
fn runs_while_in_flight(msg: &Msg) -> bool {
    matches!(
        msg,
        Msg::Convert(ConvertMsg::EditsApplied(_))
            | Msg::App(AppMsg::ConfigChanged(_))
            | Msg::App(AppMsg::Shutdown)
    )
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = SessionSnapshot::from_session(&model.session);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = SessionSnapshot::from_session(&model.session);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "session", %diff, "state changed");
    }

    let history = model.session.history.entries();
    debug_assert!(
        history.first() == Some(&crate::case::CaseVariant::Original),
        "[{}] history root must be Original, got {:?}",
        msg_name,
        history
    );

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Convert::Cycle { direction: Forward, selections: ["foo"] }`
/// - `History::Undo`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Convert(m) => format!("Convert::{:?}", m),
        Msg::Selection(m) => format!("Selection::{:?}", m),
        Msg::History(m) => format!("History::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
