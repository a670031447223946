use egui::{Button, Ui};
use sneat_business::go_to_page;
use sneat_business::table::UserPage;
use sneat_states::StateCtx;

pub(super) fn render_pager(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(page) = state_ctx.cached::<UserPage>().map(|c| &c.page) else {
        return;
    };
    let current = page.page;
    let (has_previous, has_next) = (page.has_previous(), page.has_next());
    let summary = format!(
        "Showing {}-{} of {}",
        page.first_row(),
        page.last_row(),
        page.total
    );
    let position = format!("Page {} of {}", current + 1, page.page_count);

    let mut target = None;
    ui.horizontal(|ui| {
        if ui.add_enabled(has_previous, Button::new("◀ Prev")).clicked() {
            target = Some(current.saturating_sub(1));
        }
        ui.label(position);
        if ui.add_enabled(has_next, Button::new("Next ▶")).clicked() {
            target = Some(current + 1);
        }
        ui.separator();
        ui.label(summary);
    });

    if let Some(page) = target {
        go_to_page(state_ctx, page);
    }
}
