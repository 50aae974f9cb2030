use super::HandlerContext;
use crate::presentation::presenters::present_bins;
use anyhow::Result;
use bintrack_engine::{SearchTerm, filter_bins};

pub async fn handle(ctx: &HandlerContext, search: Option<String>) -> Result<()> {
    let api = ctx.api()?;
    let bins = api.list_bins().await.map_err(|e| ctx.client_failure(e))?;

    let term = SearchTerm::new(search.as_deref().unwrap_or_default());
    let matching = filter_bins(&bins, &term);

    ctx.render(present_bins(&matching, search.as_deref()))
}
