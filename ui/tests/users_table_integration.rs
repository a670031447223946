use egui_kittest::Harness;
use kittest::Queryable;
use sneat_business::table::{SelectionInput, SortKey, ToggleUserSelectionCommand};
use sneat_business::{
    Activity, ActivityCompute, AppConfig, BulkAction, Route, SinkEvent, UserId, UserStatus,
    edit_query,
};
use sneat_ui::SneatApp;

use crate::common::TestCtx;

mod common;

fn open_users_page(harness: &mut Harness<'_, SneatApp>) {
    harness.step();
    harness.get_by_label("Users").click();
    harness.run();
}

// Row checkboxes carry no label, so rows are selected through the context.
fn select(app: &mut SneatApp, id: u32) {
    let ctx = &mut app.state.ctx;
    ctx.state_mut::<SelectionInput>().toggle = Some(UserId(id));
    ctx.dispatch::<ToggleUserSelectionCommand>();
}

/// Tests that the Users navigation button opens the table.
#[test]
fn test_navigate_to_users_page() {
    let mut ctx = TestCtx::new_app();

    let harness = ctx.harness_mut();
    open_users_page(harness);

    assert_eq!(harness.state().state.route(), Route::Users);
    assert!(
        harness.query_by_label("User Management").is_some(),
        "User Management heading should be displayed"
    );
    assert!(
        harness.query_by_label("John Doe").is_some(),
        "Seed users should be listed"
    );
    assert!(
        harness.query_by_label("Showing 1-8 of 8").is_some(),
        "All eight users should be on the first page"
    );
}

/// Tests that a search hides the rows that do not match.
#[test]
fn test_search_narrows_rows() {
    let mut ctx = TestCtx::new_app();

    let harness = ctx.harness_mut();
    open_users_page(harness);

    edit_query(&mut harness.state_mut().state.ctx, |q| q.set_search("jane"));
    harness.run();

    assert!(harness.query_by_label("Jane Smith").is_some());
    assert!(
        harness.query_by_label("John Doe").is_none(),
        "Non-matching users should be hidden"
    );
    assert!(harness.query_by_label("Showing 1-1 of 1").is_some());
}

/// Tests that bulk buttons appear with a selection and report to the sink.
#[test]
fn test_bulk_disable_reports_selection() {
    let mut ctx = TestCtx::new_app();

    {
        let harness = ctx.harness_mut();
        open_users_page(harness);
        assert!(
            harness.query_by_label("Disable").is_none(),
            "Bulk buttons should be hidden without a selection"
        );

        select(harness.state_mut(), 5);
        select(harness.state_mut(), 3);
        harness.run();

        assert!(
            harness.query_by_label("2 of 8 selected").is_some(),
            "Selection count should be shown"
        );
        harness.get_by_label("Disable").click();
        harness.run();

        assert!(
            harness
                .query_by_label("Disable requested for 2 user(s)")
                .is_some(),
            "Bulk action should be acknowledged"
        );
    }

    assert_eq!(
        ctx.sink().events(),
        vec![SinkEvent::Bulk {
            action: BulkAction::Disable,
            ids: vec![UserId(3), UserId(5)],
        }]
    );
}

/// Tests that Export CSV delivers the filtered rows and reports it.
#[test]
fn test_export_csv_button() {
    let mut ctx = TestCtx::new_app();

    {
        let harness = ctx.harness_mut();
        open_users_page(harness);
        edit_query(&mut harness.state_mut().state.ctx, |q| {
            q.set_status_filter(Some(UserStatus::Locked))
        });
        harness.run();

        harness.get_by_label("Export CSV").click();
        harness.run();

        assert_eq!(
            harness
                .state()
                .state
                .ctx
                .compute::<ActivityCompute>()
                .activity,
            Activity::Exported {
                file_name: "users.csv".to_owned(),
                rows: 1,
            }
        );
        assert!(
            harness
                .query_by_label("Exported 1 user(s) to users.csv")
                .is_some(),
            "Export should be acknowledged"
        );
    }

    let Some(SinkEvent::Export {
        file_name,
        contents,
    }) = ctx.sink().last()
    else {
        panic!("expected an export event");
    };
    assert_eq!(file_name, "users.csv");
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.contains("Charlie Brown"));
}

/// Tests that Next and Prev move through pages when the page size is small.
#[test]
fn test_pager_next_and_prev() {
    let mut ctx = TestCtx::new_app_with_config(AppConfig::default().with_page_size(3));

    let harness = ctx.harness_mut();
    open_users_page(harness);
    assert!(harness.query_by_label("Page 1 of 3").is_some());

    harness.get_by_label("Next ▶").click();
    harness.run();
    assert!(
        harness.query_by_label("Page 2 of 3").is_some(),
        "Next should move to the second page"
    );
    assert!(harness.query_by_label("Showing 4-6 of 8").is_some());

    harness.get_by_label("◀ Prev").click();
    harness.run();
    assert!(harness.query_by_label("Page 1 of 3").is_some());
}

/// Tests that sorting marks the header with the direction arrow.
#[test]
fn test_sort_header_shows_direction() {
    let mut ctx = TestCtx::new_app();

    let harness = ctx.harness_mut();
    open_users_page(harness);

    harness.get_by_label("Email").click();
    harness.run();
    assert!(
        harness.query_by_label("Email ⏶").is_some(),
        "Ascending arrow should be shown"
    );

    edit_query(&mut harness.state_mut().state.ctx, |q| {
        q.toggle_sort(SortKey::Email);
        true
    });
    harness.run();
    assert!(
        harness.query_by_label("Email ⏷").is_some(),
        "Descending arrow should be shown"
    );
}
