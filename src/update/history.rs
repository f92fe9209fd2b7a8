//! Buffer undo/redo handlers
//!
//! The host reverts or re-applies the text itself; here only the style
//! cursor follows along.

use crate::commands::Cmd;
use crate::messages::HistoryMsg;
use crate::model::AppModel;

pub fn update_history(model: &mut AppModel, msg: HistoryMsg) -> Option<Cmd> {
    let history = &mut model.session.history;
    let moved = match msg {
        HistoryMsg::Undo => history.undo(),
        HistoryMsg::Redo => history.redo(),
    };

    if moved {
        tracing::debug!(?msg, variant = %history.current(), "Style history moved");
    }
    None
}
