//! The user table driven through a `StateCtx`, the way the UI drives it.

use std::rc::Rc;

use sneat_business::table::{
    PageInput, SelectionInput, SortKey, TableQuery, ToggleSelectAllCommand,
    ToggleUserSelectionCommand, UserPage, VisibleUsers,
};
use sneat_business::{
    Activity, ActivityCompute, AppConfig, BulkAction, BulkActionCommand, BulkActionInput,
    ExportCsvCommand, RecordingSink, RowAction, RowActionCommand, RowActionInput, SinkEvent,
    TableSelection, UserId, UserRecords, UserStatus, build_state_ctx, edit_query, go_to_page,
};
use sneat_states::StateCtx;

fn setup_with(config: AppConfig, sink: RecordingSink) -> (StateCtx, Rc<RecordingSink>) {
    let sink = Rc::new(sink);
    let ctx = build_state_ctx(config, UserRecords::seed(), sink.clone());
    (ctx, sink)
}

fn setup() -> (StateCtx, Rc<RecordingSink>) {
    setup_with(AppConfig::default(), RecordingSink::new())
}

fn toggle(ctx: &mut StateCtx, id: u32) {
    ctx.state_mut::<SelectionInput>().toggle = Some(UserId(id));
    ctx.dispatch::<ToggleUserSelectionCommand>();
}

fn visible_ids(ctx: &StateCtx) -> Vec<u32> {
    ctx.compute::<VisibleUsers>()
        .users()
        .iter()
        .map(|u| u.id.get())
        .collect()
}

fn selected(ctx: &StateCtx) -> Vec<UserId> {
    ctx.compute::<TableSelection>().ids()
}

mod query_tests {
    use super::*;

    #[test]
    fn test_active_then_jane_then_export() {
        let (mut ctx, sink) = setup();

        edit_query(&mut ctx, |q| q.set_status_filter(Some(UserStatus::Active)));
        assert_eq!(visible_ids(&ctx), vec![1, 2, 6, 7]);

        edit_query(&mut ctx, |q| q.set_search("jane"));
        assert_eq!(visible_ids(&ctx), vec![2]);

        ctx.dispatch::<ExportCsvCommand>();
        assert_eq!(
            sink.last(),
            Some(SinkEvent::Export {
                file_name: "users.csv".to_owned(),
                contents: "ID,Name,Email,Role,Department,Status\n\
                           2,Jane Smith,jane.smith@example.com,Manager,HR,active\n"
                    .to_owned(),
            })
        );
        assert_eq!(
            ctx.compute::<ActivityCompute>().activity,
            Activity::Exported {
                file_name: "users.csv".to_owned(),
                rows: 1,
            }
        );
    }

    #[test]
    fn test_sort_by_name_toggles() {
        let (mut ctx, _sink) = setup();

        edit_query(&mut ctx, |q| {
            q.toggle_sort(SortKey::Name);
            true
        });
        let ascending = visible_ids(&ctx);
        assert_eq!(&ascending[..2], &[4, 3], "Alice before Bob");

        edit_query(&mut ctx, |q| {
            q.toggle_sort(SortKey::Name);
            true
        });
        let mut reversed = ascending;
        reversed.reverse();
        assert_eq!(visible_ids(&ctx), reversed);
    }

    #[test]
    fn test_unchanged_edit_is_a_no_op() {
        let (mut ctx, _sink) = setup();
        toggle(&mut ctx, 3);

        assert!(!edit_query(&mut ctx, |q| q.set_search("")));
        assert_eq!(selected(&ctx), vec![UserId(3)]);
    }
}

mod selection_tests {
    use super::*;

    #[test]
    fn test_toggle_rows_and_select_all_flag() {
        let (mut ctx, _sink) = setup();
        edit_query(&mut ctx, |q| q.set_role_filter(Some("Admin".to_owned())));

        toggle(&mut ctx, 1);
        assert!(!ctx.compute::<TableSelection>().all_selected());
        toggle(&mut ctx, 6);
        assert!(ctx.compute::<TableSelection>().all_selected());

        toggle(&mut ctx, 1);
        assert_eq!(selected(&ctx), vec![UserId(6)]);
        assert!(!ctx.compute::<TableSelection>().all_selected());
    }

    #[test]
    fn test_hidden_row_cannot_be_selected() {
        let (mut ctx, _sink) = setup();
        edit_query(&mut ctx, |q| q.set_search("jane"));

        toggle(&mut ctx, 1);
        assert!(selected(&ctx).is_empty());
    }

    #[test]
    fn test_select_all_twice_empties() {
        let (mut ctx, _sink) = setup();

        ctx.dispatch::<ToggleSelectAllCommand>();
        assert_eq!(selected(&ctx).len(), 8);

        ctx.dispatch::<ToggleSelectAllCommand>();
        assert!(selected(&ctx).is_empty());
    }

    #[test]
    fn test_every_query_change_clears_selection() {
        let edits: Vec<Box<dyn Fn(&mut TableQuery) -> bool>> = vec![
            Box::new(|q| q.set_search("o")),
            Box::new(|q| q.set_status_filter(Some(UserStatus::New))),
            Box::new(|q| q.set_role_filter(Some("User".to_owned()))),
            Box::new(|q| q.set_department_filter(Some("IT".to_owned()))),
            Box::new(|q| {
                q.toggle_sort(SortKey::Email);
                true
            }),
        ];

        for edit in edits {
            let (mut ctx, _sink) = setup();
            ctx.dispatch::<ToggleSelectAllCommand>();
            assert!(!selected(&ctx).is_empty());

            assert!(edit_query(&mut ctx, |q| edit(q)));
            assert!(selected(&ctx).is_empty());
            assert!(!ctx.compute::<TableSelection>().all_selected());
        }
    }

    #[test]
    fn test_page_change_keeps_selection() {
        let (mut ctx, _sink) = setup_with(AppConfig::default().with_page_size(3), RecordingSink::new());
        toggle(&mut ctx, 2);

        go_to_page(&mut ctx, 1);
        let page = &ctx.compute::<UserPage>().page;
        assert_eq!(page.page, 1);
        assert_eq!(page.first_row(), 4);
        assert_eq!(selected(&ctx), vec![UserId(2)]);
    }
}

mod pagination_tests {
    use super::*;

    #[test]
    fn test_page_clamps_to_last() {
        let (mut ctx, _sink) = setup_with(AppConfig::default().with_page_size(3), RecordingSink::new());

        go_to_page(&mut ctx, 99);
        let page = &ctx.compute::<UserPage>().page;
        assert_eq!(page.page, 2);
        assert_eq!(page.page_count, 3);
        assert_eq!(ctx.state::<PageInput>().page, 2);
    }

    #[test]
    fn test_query_change_returns_to_first_page() {
        let (mut ctx, _sink) = setup_with(AppConfig::default().with_page_size(3), RecordingSink::new());
        go_to_page(&mut ctx, 2);

        edit_query(&mut ctx, |q| q.set_search("a"));
        assert_eq!(ctx.compute::<UserPage>().page.page, 0);
    }
}

mod action_tests {
    use super::*;

    #[test]
    fn test_bulk_disable_reports_ascending_ids() {
        let (mut ctx, sink) = setup();
        toggle(&mut ctx, 6);
        toggle(&mut ctx, 2);

        ctx.state_mut::<BulkActionInput>().action = Some(BulkAction::Disable);
        ctx.dispatch::<BulkActionCommand>();

        assert_eq!(
            sink.events(),
            vec![SinkEvent::Bulk {
                action: BulkAction::Disable,
                ids: vec![UserId(2), UserId(6)],
            }]
        );
        // reporting does not touch records or selection
        assert_eq!(ctx.state::<UserRecords>().len(), 8);
        assert_eq!(selected(&ctx).len(), 2);
    }

    #[test]
    fn test_bulk_with_empty_selection_dispatches_nothing() {
        let (mut ctx, sink) = setup();

        ctx.state_mut::<BulkActionInput>().action = Some(BulkAction::Delete);
        ctx.dispatch::<BulkActionCommand>();

        assert!(sink.is_empty());
        assert_eq!(ctx.compute::<ActivityCompute>().activity, Activity::Idle);
    }

    #[test]
    fn test_row_actions_are_reported() {
        let (mut ctx, sink) = setup();

        ctx.state_mut::<RowActionInput>().action = Some(RowAction::Edit(UserId(4)));
        ctx.dispatch::<RowActionCommand>();
        ctx.state_mut::<RowActionInput>().action = Some(RowAction::Delete(UserId(5)));
        ctx.dispatch::<RowActionCommand>();

        assert_eq!(
            sink.events(),
            vec![
                SinkEvent::Row(RowAction::Edit(UserId(4))),
                SinkEvent::Row(RowAction::Delete(UserId(5))),
            ]
        );
    }

    #[test]
    fn test_export_covers_every_page() {
        let (mut ctx, sink) = setup_with(AppConfig::default().with_page_size(2), RecordingSink::new());

        ctx.dispatch::<ExportCsvCommand>();

        let Some(SinkEvent::Export { contents, .. }) = sink.last() else {
            panic!("expected an export event");
        };
        assert_eq!(contents.lines().count(), 9);
    }

    #[test]
    fn test_failed_export_is_surfaced() {
        let (mut ctx, _sink) = setup_with(AppConfig::default(), RecordingSink::failing_exports());

        ctx.dispatch::<ExportCsvCommand>();

        assert_eq!(
            ctx.compute::<ActivityCompute>().activity,
            Activity::ExportFailed("export cancelled".to_owned())
        );
    }
}
