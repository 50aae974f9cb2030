use super::HandlerContext;
use crate::presentation::presenters::present_products;
use anyhow::Result;
use tracing::debug;

pub async fn handle(ctx: &HandlerContext, query: String) -> Result<()> {
    let min_chars = ctx.config.autocomplete.product_min_chars;
    let query = query.trim().to_string();

    // Too short: nothing is sent, the result explains why.
    let products = if query.chars().count() < min_chars {
        debug!(%query, min_chars, "product query below threshold");
        Vec::new()
    } else {
        let api = ctx.api()?;
        api.search_products(&query)
            .await
            .map_err(|e| ctx.client_failure(e))?
    };

    ctx.render(present_products(&query, products, min_chars))
}
