use bintrack_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, HealthViewModel,
    LogoutViewModel, StatusBadge,
};

pub const REDACTED: &str = "<redacted>";

pub fn present_health(server: &str, status: String) -> CommandResultViewModel<HealthViewModel> {
    let healthy = status.eq_ignore_ascii_case("healthy") || status.eq_ignore_ascii_case("ok");
    let badge = if healthy {
        StatusBadge::success(format!("Server is {}", status))
    } else {
        StatusBadge::warning(format!("Server reported '{}'", status))
    };

    CommandResultViewModel::new(HealthViewModel {
        server: server.to_string(),
        status,
    })
    .with_badge(badge)
}

pub fn present_logout(
    server: &str,
    cookie_cleared: bool,
) -> CommandResultViewModel<LogoutViewModel> {
    CommandResultViewModel::new(LogoutViewModel {
        server: server.to_string(),
        cookie_cleared,
    })
    .with_badge(StatusBadge::success("Logged out"))
    .with_suggestion(Guidance::new(format!(
        "Sign in again at {}/login and store the session cookie in config.toml",
        server.trim_end_matches('/')
    )))
}

pub fn present_config(
    path: &Path,
    exists: bool,
    mut config: Config,
) -> CommandResultViewModel<ConfigViewModel> {
    // Never echo the session secret.
    if config.server.session_cookie.is_some() {
        config.server.session_cookie = Some(REDACTED.to_string());
    }

    let mut result = CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config,
    });

    if !exists {
        result = result
            .with_badge(StatusBadge::info("No config file, showing defaults"))
            .with_suggestion(Guidance::new("Write one").with_command("bintrack config init"));
    }
    result
}

pub fn present_config_init(
    path: &Path,
    created: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        path: path.display().to_string(),
        created,
    };

    if created {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::success("Config written"))
            .with_suggestion(Guidance::new("Check the server").with_command("bintrack health"))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("Config already exists"))
            .with_suggestion(
                Guidance::new("Overwrite with defaults").with_command("bintrack config init --force"),
            )
    }
}
