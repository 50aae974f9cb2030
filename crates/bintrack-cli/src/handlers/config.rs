use super::HandlerContext;
use crate::presentation::presenters::{present_config, present_config_init};
use anyhow::Result;
use bintrack_runtime::Config;
use tracing::info;

pub fn show(ctx: &HandlerContext) -> Result<()> {
    let path = ctx.config_path();
    let exists = path.exists();
    ctx.render(present_config(&path, exists, ctx.config.clone()))
}

/// Write defaults (with the effective server URL). An existing file is kept
/// unless `force` is set.
pub fn init(ctx: &HandlerContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    if path.exists() && !force {
        return ctx.render(present_config_init(&path, false));
    }

    let mut config = Config::default();
    config.server.base_url = ctx.server().to_string();
    config.save_to(&path)?;
    info!(path = %path.display(), "config written");

    ctx.render(present_config_init(&path, true))
}
