//! App message handlers (configuration, notification actions, shutdown)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages. These also run while a conversion is in flight.
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::ConfigChanged(config) => {
            model.set_config(config);
            tracing::info!(order = ?model.order.as_slice(), "Case cycle reconfigured");
            None
        }

        // Revert the text; the host reports the revert back as a buffer undo
        AppMsg::NotificationUndo => Some(Cmd::UndoBufferEdit),

        AppMsg::Shutdown => {
            if model.in_flight.take().is_some() {
                tracing::debug!("Shutdown with a conversion in flight, dropping it");
            }
            model.session.reset();
            None
        }
    }
}
