use super::HandlerContext;
use crate::presentation::presenters::{present_inventory, present_inventory_result};
use anyhow::Result;
use bintrack_runtime::InventorySession;
use bintrack_types::ViewKind;

pub async fn handle(
    ctx: &HandlerContext,
    search: Option<String>,
    view: Option<ViewKind>,
) -> Result<()> {
    let (mut session, _suggestions) = ctx.session()?;
    if !session.reload().await {
        return Err(ctx.session_failure(&session, "Error connecting to server"));
    }

    apply_filters(&mut session, search.as_deref(), view);

    let visible = session.visible_records();
    let inventory = present_inventory(
        &visible,
        session.view(),
        session.search_input(),
        ctx.separator(),
    );
    ctx.render(present_inventory_result(inventory, session.records().len()))
}

fn apply_filters(session: &mut InventorySession, search: Option<&str>, view: Option<ViewKind>) {
    if let Some(view) = view {
        session.switch_view(view);
    }
    session.set_search(search.unwrap_or_default());
}
