use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::{Result, anyhow};
use bintrack_client::{ClientError, HttpInventoryApi, InventoryApi};
use bintrack_runtime::{
    Config, InventorySession, Route, SessionSettings, SuggestionReceiver, suggestion_channel,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Context for handler execution: resolved config plus presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub data_dir: PathBuf,
    pub config: Config,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, data_dir: PathBuf, config: Config) -> Self {
        Self {
            format,
            data_dir,
            config,
        }
    }

    pub fn server(&self) -> &str {
        self.config.server.base_url.trim_end_matches('/')
    }

    pub fn separator(&self) -> &str {
        &self.config.display.thousands_separator
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn api(&self) -> Result<Arc<dyn InventoryApi>> {
        let api = HttpInventoryApi::new(self.config.client_options())?;
        Ok(Arc::new(api))
    }

    /// A session over the configured server. The receiver only matters to
    /// hosts that run autocomplete.
    pub fn session(&self) -> Result<(InventorySession, SuggestionReceiver)> {
        Ok(Self::session_with(self.api()?, &self.config))
    }

    pub fn session_with(
        api: Arc<dyn InventoryApi>,
        config: &Config,
    ) -> (InventorySession, SuggestionReceiver) {
        let (tx, rx) = suggestion_channel();
        let session = InventorySession::new(api, SessionSettings::from(config), tx);
        (session, rx)
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        let renderer = ConsoleRenderer::new(self.format);
        renderer.render(view_model)
    }

    /// Error for a server response the CLI cannot recover from.
    pub fn client_failure(&self, err: ClientError) -> anyhow::Error {
        match err {
            ClientError::AuthRequired => self.route_failure(Route::Login, None),
            ClientError::NeedsConfig { message } => {
                self.route_failure(Route::Settings, Some(&message))
            }
            other => anyhow!(other),
        }
    }

    /// Error for a session operation that failed, read back from the
    /// session's redirect and latest notice.
    pub fn session_failure(&self, session: &InventorySession, fallback: &str) -> anyhow::Error {
        let message = session
            .notices()
            .latest()
            .map(|notice| notice.message.clone())
            .unwrap_or_else(|| fallback.to_string());

        match session.redirect().map(|r| r.route) {
            Some(route) => self.route_failure(route, Some(&message)),
            None => anyhow!(message),
        }
    }

    fn route_failure(&self, route: Route, message: Option<&str>) -> anyhow::Error {
        match route {
            Route::Login => anyhow!(
                "Authentication required. Sign in at {}{} and set server.session_cookie in {}",
                self.server(),
                route.path(),
                display_path(&self.config_path())
            ),
            Route::Settings => anyhow!(
                "{}. Configure the database at {}{}",
                message.unwrap_or("Database not configured").trim_end_matches('.'),
                self.server(),
                route.path()
            ),
        }
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bintrack_testing::{FakeFailure, FakeInventoryApi, fixtures};

    fn context() -> HandlerContext {
        let mut config = Config::default();
        config.server.base_url = "http://inventory.test/".to_string();
        HandlerContext::new(OutputFormat::Plain, PathBuf::from("/tmp/bt"), config)
    }

    #[test]
    fn test_auth_failure_points_at_login() {
        let err = context().client_failure(ClientError::AuthRequired);
        let text = err.to_string();
        assert!(text.starts_with("Authentication required."));
        assert!(text.contains("http://inventory.test/login"));
        assert!(text.contains("/tmp/bt/config.toml"));
    }

    #[test]
    fn test_rejected_keeps_server_message() {
        let err = context().client_failure(ClientError::Rejected("Record not found".into()));
        assert_eq!(err.to_string(), "Record not found");
    }

    #[tokio::test]
    async fn test_session_failure_reads_settings_redirect() {
        let ctx = context();
        let api = Arc::new(FakeInventoryApi::new().with_records(fixtures::records()));
        api.fail_next(FakeFailure::NeedsConfig("Database not configured.".into()));
        let (mut session, _rx) = HandlerContext::session_with(api, &ctx.config);

        assert!(!session.reload().await);
        let text = ctx.session_failure(&session, "load failed").to_string();
        assert!(text.starts_with("Please configure database connection in Settings."));
        assert!(text.ends_with("http://inventory.test/settings"));
    }
}
