use bintrack_runtime::Config;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HealthViewModel {
    pub server: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutViewModel {
    pub server: String,
    /// A stored session cookie was removed from the config file.
    pub cookie_cleared: bool,
}

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub config: Config,
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub created: bool,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for HealthViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::HealthView;
        Box::new(HealthView::new(self, mode))
    }
}

impl CreateView for LogoutViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::LogoutView;
        Box::new(LogoutView::new(self, mode))
    }
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ConfigView;
        Box::new(ConfigView::new(self, mode))
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ConfigInitView;
        Box::new(ConfigInitView::new(self, mode))
    }
}
