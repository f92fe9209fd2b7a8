//! Selection message handlers

use crate::commands::Cmd;
use crate::messages::SelectionMsg;
use crate::model::{is_selection_empty, AppModel};

/// Handle selection changes from the host
///
/// The session lives only while something is selected; once the selection
/// collapses it is reset.
pub fn update_selection(model: &mut AppModel, msg: SelectionMsg) -> Option<Cmd> {
    match msg {
        SelectionMsg::Changed { spans } => {
            if is_selection_empty(&spans) {
                model.session.reset();
            }
            None
        }
    }
}
