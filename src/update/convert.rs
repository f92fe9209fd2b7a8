//! Conversion message handlers (cycle invocation and edit acknowledgement)

use crate::commands::Cmd;
use crate::messages::ConvertMsg;
use crate::model::AppModel;
use crate::orchestrator;

/// Handle conversion messages
///
/// A cycle invocation resolves the next style and parks the result in
/// `model.in_flight` until the host acknowledges the edit. History only moves
/// once the edit has been applied.
pub fn update_convert(model: &mut AppModel, msg: ConvertMsg) -> Option<Cmd> {
    match msg {
        ConvertMsg::Cycle {
            direction,
            selections,
        } => {
            if model.is_in_flight() {
                tracing::debug!("Conversion already in flight, ignoring invocation");
                return None;
            }

            let conversion =
                orchestrator::resolve(&mut model.session, &model.order, direction, &selections)?;
            let edits = conversion.edit_result();
            model.in_flight = Some(conversion);
            Some(Cmd::ApplyEdits(edits))
        }

        ConvertMsg::EditsApplied(result) => {
            let Some(conversion) = model.in_flight.take() else {
                tracing::debug!("Edit acknowledgement with no conversion in flight");
                return None;
            };

            match result {
                Ok(()) => {
                    let applied = model.session.commit(conversion);
                    model.config.show_notifications.then_some(Cmd::Notify {
                        variant: applied.variant,
                        offer_undo: true,
                    })
                }
                Err(e) => {
                    tracing::warn!(
                        variant = %conversion.variant,
                        "Edit was not applied, keeping previous style: {}",
                        e
                    );
                    None
                }
            }
        }
    }
}
