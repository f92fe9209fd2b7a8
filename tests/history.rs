//! Style history tests
//!
//! Undo/redo as seen through the host, notification undo, and the
//! in-flight protocol that keeps history behind the buffer.

mod common;

use case_cycle::case::CaseVariant;
use case_cycle::config::CycleConfig;
use case_cycle::messages::{AppMsg, ConvertMsg, Direction, HistoryMsg, Msg, SelectionMsg};
use case_cycle::model::AppModel;
use case_cycle::runtime::{BufferHost, Notification, Runtime};
use case_cycle::update::update;
use case_cycle::Cmd;
use common::{config_with_cycle, selected, test_runtime};

// ========================================================================
// Undo / redo
// ========================================================================

#[test]
fn test_undo_restores_text_and_style() {
    let mut runtime = test_runtime(&["foo_bar"]);
    runtime.cycle(Direction::Forward);
    runtime.cycle(Direction::Forward);
    assert_eq!(selected(&runtime), vec!["fooBar"]);

    runtime.undo();

    assert_eq!(selected(&runtime), vec!["FOO_BAR"]);
    assert_eq!(runtime.model.current_variant(), CaseVariant::Const);
    assert_eq!(
        runtime.model.session.history.redo_entries(),
        &[CaseVariant::Camel]
    );
}

#[test]
fn test_redo_reapplies() {
    let mut runtime = test_runtime(&["foo_bar"]);
    runtime.cycle(Direction::Forward);
    runtime.undo();
    assert_eq!(runtime.model.current_variant(), CaseVariant::Original);

    runtime.redo();

    assert_eq!(selected(&runtime), vec!["FOO_BAR"]);
    assert_eq!(runtime.model.current_variant(), CaseVariant::Const);
    assert!(!runtime.model.session.history.can_redo());
}

#[test]
fn test_cycle_after_undo_clears_redo() {
    let mut runtime = test_runtime(&["foo_bar"]);
    runtime.cycle(Direction::Forward);
    runtime.cycle(Direction::Forward);
    runtime.undo();

    runtime.cycle(Direction::Backward);

    assert_eq!(runtime.model.current_variant(), CaseVariant::Original);
    assert_eq!(selected(&runtime), vec!["foo_bar"]);
    assert!(runtime.model.session.history.redo_entries().is_empty());
    assert_eq!(
        runtime.model.session.history.entries(),
        &[CaseVariant::Original, CaseVariant::Const, CaseVariant::Original]
    );
}

#[test]
fn test_undo_at_root_is_noop() {
    let mut model = AppModel::default();

    let cmd = update(&mut model, Msg::History(HistoryMsg::Undo));

    assert!(cmd.is_none());
    assert_eq!(model.session.history.entries(), &[CaseVariant::Original]);
    assert!(!model.session.history.can_redo());
}

#[test]
fn test_undo_all_the_way_back() {
    let mut runtime = test_runtime(&["userId"]);
    for _ in 0..3 {
        runtime.cycle(Direction::Forward);
    }

    for _ in 0..5 {
        runtime.undo();
    }

    assert_eq!(selected(&runtime), vec!["userId"]);
    assert_eq!(runtime.model.session.history.entries(), &[CaseVariant::Original]);
    assert_eq!(runtime.model.session.history.redo_entries().len(), 3);
}

#[test]
fn test_buffer_and_style_undo_stay_paired_past_depth_limit() {
    let mut runtime = test_runtime(&["foo_bar"]);
    let limit = case_cycle::model::history::DEFAULT_MAX_DEPTH;

    // Every fifth commit is back at the original text
    for _ in 0..limit + 5 {
        runtime.cycle(Direction::Forward);
    }
    for _ in 0..limit + 5 {
        runtime.undo();
    }

    assert!(!runtime.model.session.history.can_undo());
    assert_eq!(runtime.model.current_variant(), CaseVariant::Original);
    assert_eq!(selected(&runtime), vec!["foo_bar"]);
}

// ========================================================================
// Notifications
// ========================================================================

#[test]
fn test_conversion_posts_notification() {
    let mut runtime = test_runtime(&["foo_bar"]);

    runtime.cycle(Direction::Forward);

    assert_eq!(
        runtime.host.notifications(),
        &[Notification {
            message: "Converted to CONST_CASE".to_string(),
            offer_undo: true,
        }]
    );
}

#[test]
fn test_notifications_can_be_disabled() {
    let config = CycleConfig {
        show_notifications: false,
        ..CycleConfig::default()
    };
    let mut runtime = Runtime::new(
        AppModel::new(config),
        BufferHost::from_selected_texts(&["foo_bar"]),
    );

    runtime.cycle(Direction::Forward);

    assert_eq!(selected(&runtime), vec!["FOO_BAR"]);
    assert!(runtime.host.notifications().is_empty());
}

#[test]
fn test_notification_undo_reverts_buffer_and_style() {
    let mut runtime = test_runtime(&["foo_bar"]);
    runtime.cycle(Direction::Forward);

    runtime.accept_notification_undo();

    assert_eq!(selected(&runtime), vec!["foo_bar"]);
    assert_eq!(runtime.model.current_variant(), CaseVariant::Original);
    assert!(runtime.model.session.history.can_redo());
}

// ========================================================================
// In-flight protocol
// ========================================================================

#[test]
fn test_history_moves_only_after_acknowledgement() {
    let mut model = AppModel::default();

    let cmd = update(&mut model, Msg::cycle(Direction::Forward, ["foo_bar"]));

    assert!(matches!(cmd, Some(Cmd::ApplyEdits(_))));
    assert!(model.is_in_flight());
    assert_eq!(model.current_variant(), CaseVariant::Original);

    let cmd = update(&mut model, Msg::Convert(ConvertMsg::EditsApplied(Ok(()))));

    assert_eq!(
        cmd,
        Some(Cmd::Notify {
            variant: CaseVariant::Const,
            offer_undo: true,
        })
    );
    assert!(!model.is_in_flight());
    assert_eq!(model.current_variant(), CaseVariant::Const);
}

#[test]
fn test_messages_ignored_while_in_flight() {
    let mut model = AppModel::default();
    update(&mut model, Msg::cycle(Direction::Forward, ["foo_bar"]));

    assert!(update(&mut model, Msg::cycle(Direction::Forward, ["foo_bar"])).is_none());
    assert!(update(&mut model, Msg::History(HistoryMsg::Undo)).is_none());
    assert!(update(
        &mut model,
        Msg::Selection(SelectionMsg::Changed { spans: vec![] })
    )
    .is_none());
    assert!(update(&mut model, Msg::App(AppMsg::NotificationUndo)).is_none());

    // Nothing above reset the session or moved the pending conversion
    assert_eq!(model.session.tracker.len(), 1);
    update(&mut model, Msg::Convert(ConvertMsg::EditsApplied(Ok(()))));
    assert_eq!(
        model.session.history.entries(),
        &[CaseVariant::Original, CaseVariant::Const]
    );
}

#[test]
fn test_config_change_applies_while_in_flight() {
    let mut model = AppModel::default();
    update(&mut model, Msg::cycle(Direction::Forward, ["foo_bar"]));

    update(
        &mut model,
        Msg::App(AppMsg::ConfigChanged(config_with_cycle(&["original", "pascal"]))),
    );
    update(&mut model, Msg::Convert(ConvertMsg::EditsApplied(Ok(()))));

    assert_eq!(
        model.order.as_slice(),
        &[CaseVariant::Original, CaseVariant::Pascal]
    );
    // The pending conversion was resolved against the old order and still lands
    assert_eq!(model.current_variant(), CaseVariant::Const);

    let cmd = update(&mut model, Msg::cycle(Direction::Forward, ["FOO_BAR"]));
    match cmd {
        Some(Cmd::ApplyEdits(edits)) => {
            assert_eq!(edits.variant, CaseVariant::Original);
            assert_eq!(edits.texts, vec!["foo_bar"]);
        }
        other => panic!("expected ApplyEdits, got {:?}", other),
    }
}

#[test]
fn test_shutdown_while_in_flight_drops_pending_conversion() {
    let mut model = AppModel::default();
    update(&mut model, Msg::cycle(Direction::Forward, ["foo_bar"]));

    update(&mut model, Msg::App(AppMsg::Shutdown));

    assert!(!model.is_in_flight());
    assert!(model.session.tracker.is_empty());

    // A late acknowledgement has nothing to commit
    update(&mut model, Msg::Convert(ConvertMsg::EditsApplied(Ok(()))));
    assert_eq!(model.session.history.entries(), &[CaseVariant::Original]);
}

#[test]
fn test_stray_acknowledgement_is_ignored() {
    let mut model = AppModel::default();

    let cmd = update(&mut model, Msg::Convert(ConvertMsg::EditsApplied(Ok(()))));

    assert!(cmd.is_none());
    assert_eq!(model.session.history.entries(), &[CaseVariant::Original]);
}

#[test]
fn test_failed_edit_keeps_previous_style() {
    let mut runtime = test_runtime(&["foo_bar"]);
    runtime.cycle(Direction::Forward);
    runtime.host.set_read_only(true);

    runtime.cycle(Direction::Forward);

    assert_eq!(selected(&runtime), vec!["FOO_BAR"]);
    assert_eq!(runtime.model.current_variant(), CaseVariant::Const);
    assert!(!runtime.model.is_in_flight());
    assert_eq!(runtime.host.notifications().len(), 1);

    // Writable again: the next invocation retries the same step
    runtime.host.set_read_only(false);
    runtime.cycle(Direction::Forward);
    assert_eq!(selected(&runtime), vec!["fooBar"]);
}

#[test]
fn test_shutdown_resets_session() {
    let mut runtime = test_runtime(&["foo_bar"]);
    runtime.cycle(Direction::Forward);

    runtime.dispatch(Msg::App(AppMsg::Shutdown));

    assert_eq!(runtime.model.current_variant(), CaseVariant::Original);
    assert!(runtime.model.session.tracker.is_empty());
}
