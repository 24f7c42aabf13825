// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Components working together the way a page would wire them up.

use std::time::Duration;

use component_kit::{ConfirmDialog, DelayedMount, DialogRole, FieldSignal,
                    NotificationContainer, NotificationMessage, NotificationType,
                    SelectField, SelectFieldConfig, SelectInterface, SelectOption};
use pretty_assertions::assert_eq;

fn make_provinces() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Bologna", "BO").with_keys(["emilia romagna"]),
        SelectOption::new("Firenze", "FI").with_keys(["toscana"]),
        SelectOption::new("Siena", "SI").with_keys(["toscana"]),
    ]
}

#[tokio::test]
async fn test_reset_selection_after_confirmation() {
    let (dialog, mut presenter) = ConfirmDialog::new();
    let presenter_task = tokio::spawn(async move {
        let mut roles = [DialogRole::Backdrop, DialogRole::Confirm].into_iter();
        while let Some(request) = presenter.recv().await {
            let Some(role) = roles.next() else { break };
            request.resolve(role);
        }
    });

    let config = SelectFieldConfig {
        interface: SelectInterface::Filter,
        resettable: true,
        ..Default::default()
    };
    let mut select = SelectField::new(config, make_provinces(), "", vec![]).unwrap();

    select.open_filter_modal();
    select.set_filter_text("toscana");
    let values = select
        .visible_filterable_options()
        .iter()
        .map(|it| it.value.clone())
        .collect::<Vec<_>>();
    assert_eq!(values, vec!["FI", "SI"]);
    assert!(select.choose("SI"));

    // Dismissed by tapping outside: the selection stays.
    if dialog.show("Reset", "Clear the province?").await.unwrap() {
        select.reset();
    }
    assert_eq!(select.value(), "SI");

    if dialog.show("Reset", "Clear the province?").await.unwrap() {
        select.reset();
    }
    assert_eq!(select.value(), "");
    assert_eq!(
        select.listener(),
        &vec![
            FieldSignal::Changed("SI".to_string()),
            FieldSignal::ValidationChanged(true),
            FieldSignal::Changed(String::new()),
        ]
    );

    drop(dialog);
    presenter_task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_save_feedback_on_a_page() {
    let spinner = DelayedMount::default();
    let mut notifications = NotificationContainer::new("profile");
    notifications.enter();

    // A fast save finishes before the spinner would show up.
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert!(!spinner.is_showing());
    notifications.show(NotificationMessage::success("Profile saved"));

    let visible = notifications.visible().unwrap();
    assert_eq!(visible.kind, NotificationType::Success);
    assert_eq!(visible.kind.color(), "success");
    assert_eq!(notifications.position_anchor(), "profile-header");

    // The page loop hides the toast when it is due.
    tokio::select! {
        () = notifications.sleep_until_auto_hide() => {}
        () = tokio::time::sleep(Duration::from_secs(60)) => panic!("auto hide never fired"),
    }
    assert_eq!(
        notifications.on_auto_hide().map(|it| it.message),
        Some("Profile saved".to_string())
    );
    assert!(notifications.visible().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_notification_waits_for_page_to_come_back() {
    let mut notifications = NotificationContainer::default();
    notifications.enter();
    notifications.show(NotificationMessage::error("Network down"));

    tokio::time::advance(Duration::from_secs(3)).await;
    notifications.leave();
    tokio::time::advance(Duration::from_secs(10)).await;
    assert!(notifications.on_auto_hide().is_none());
    assert!(notifications.current().is_some());

    // Coming back shows it for a full period again.
    notifications.enter();
    tokio::time::advance(Duration::from_millis(4_999)).await;
    assert!(notifications.on_auto_hide().is_none());
    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(notifications.on_auto_hide().is_some());
}
