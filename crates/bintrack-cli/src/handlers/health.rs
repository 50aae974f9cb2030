use super::HandlerContext;
use crate::presentation::presenters::present_health;
use anyhow::Result;

pub async fn handle(ctx: &HandlerContext) -> Result<()> {
    let api = ctx.api()?;
    let status = api.health().await.map_err(|e| ctx.client_failure(e))?;
    ctx.render(present_health(ctx.server(), status))
}
