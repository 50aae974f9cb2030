use super::HandlerContext;
use crate::presentation::presenters::present_logout;
use anyhow::Result;
use bintrack_runtime::Config;
use tracing::{info, warn};

pub async fn handle(ctx: &HandlerContext) -> Result<()> {
    let api = ctx.api()?;
    // Local state is dropped whatever the server says.
    if let Err(err) = api.logout().await {
        warn!(error = %err, "logout request failed");
    }

    let cleared = forget_session_cookie(ctx)?;
    ctx.render(present_logout(ctx.server(), cleared))
}

/// Remove the stored session cookie from the config file. Returns whether
/// there was one.
pub fn forget_session_cookie(ctx: &HandlerContext) -> Result<bool> {
    let path = ctx.config_path();
    if !path.exists() {
        return Ok(false);
    }

    let mut config = Config::load_from(&path)?;
    if config.server.session_cookie.take().is_none() {
        return Ok(false);
    }
    config.save_to(&path)?;
    info!(path = %path.display(), "session cookie removed");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_forget_cookie_rewrites_config() -> Result<()> {
        let dir = TempDir::new()?;
        let mut config = Config::default();
        config.server.session_cookie = Some("session=abc".to_string());
        config.save_to(&Config::path_in(dir.path()))?;

        let ctx = HandlerContext::new(OutputFormat::Plain, dir.path().to_path_buf(), config);
        assert!(forget_session_cookie(&ctx)?);
        assert!(!forget_session_cookie(&ctx)?);

        let reloaded = Config::load(dir.path())?;
        assert_eq!(reloaded.server.session_cookie, None);
        Ok(())
    }

    #[test]
    fn test_missing_config_is_not_an_error() -> Result<()> {
        let dir = TempDir::new()?;
        let ctx = HandlerContext::new(
            OutputFormat::Plain,
            dir.path().to_path_buf(),
            Config::default(),
        );
        assert!(!forget_session_cookie(&ctx)?);
        Ok(())
    }
}
