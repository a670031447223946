//! The user table: query inputs, derived rows, pagination and selection.
//!
//! The UI edits [`TableQuery`] through [`edit_query`], reads
//! [`VisibleUsers`], [`UserPage`] and [`TableSelection`] with
//! `ctx.cached::<T>()`, and toggles rows by setting [`SelectionInput`] and
//! dispatching [`ToggleUserSelectionCommand`].

mod compute;
mod query;
mod selection;
mod view;

pub use compute::{PageInput, UserPage, VisibleUsers};
pub use query::{
    ParseSortKeyError, SortDirection, SortKey, SortSpec, TableQuery, UserFilters,
};
pub use selection::{
    SelectionInput, TableSelection, ToggleSelectAllCommand, ToggleUserSelectionCommand,
};
pub use view::{
    FilterOptions, Page, derive_view, matches_filters, matches_search, paginate, sort_users,
};

use sneat_states::StateCtx;

/// Apply `edit` to the table query.
///
/// The state is only written when `edit` reports a change, so an unchanged
/// search box does not reset the selection every frame. A real change also
/// returns the table to its first page. Returns whether anything changed.
pub fn edit_query(ctx: &mut StateCtx, edit: impl FnOnce(&mut TableQuery) -> bool) -> bool {
    let mut query = ctx.state::<TableQuery>().clone();
    if !edit(&mut query) {
        return false;
    }
    *ctx.state_mut::<TableQuery>() = query;
    ctx.state_mut::<PageInput>().page = 0;
    ctx.run_computed();
    true
}

/// Move to `page`, leaving the selection alone.
pub fn go_to_page(ctx: &mut StateCtx, page: usize) {
    let last = ctx
        .cached::<UserPage>()
        .map_or(usize::MAX, |current| current.page.page_count.saturating_sub(1));
    let page = page.min(last);
    if ctx.state::<PageInput>().page != page {
        ctx.state_mut::<PageInput>().page = page;
        ctx.run_computed();
    }
}
