use std::fmt::{self, Write};

use super::preformatted;
use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigViewModel, HealthViewModel, LogoutViewModel, ViewMode,
};

// --------------------------------------------------------
// Health / Logout
// --------------------------------------------------------

pub struct HealthView<'a> {
    data: &'a HealthViewModel,
    mode: ViewMode,
}

impl<'a> HealthView<'a> {
    pub fn new(data: &'a HealthViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render(&self, w: &mut impl Write) -> fmt::Result {
        writeln!(w, "Server: {}", self.data.server)?;
        writeln!(w, "Status: {}", self.data.status)
    }
}

impl<'a> fmt::Display for HealthView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Text => self.render(f),
            ViewMode::Markup => preformatted(f, |w| self.render(w)),
        }
    }
}

pub struct LogoutView<'a> {
    data: &'a LogoutViewModel,
    mode: ViewMode,
}

impl<'a> LogoutView<'a> {
    pub fn new(data: &'a LogoutViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render(&self, w: &mut impl Write) -> fmt::Result {
        writeln!(w, "Session ended on {}", self.data.server)?;
        if self.data.cookie_cleared {
            writeln!(w, "Stored session cookie removed.")?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for LogoutView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Text => self.render(f),
            ViewMode::Markup => preformatted(f, |w| self.render(w)),
        }
    }
}

// --------------------------------------------------------
// Config
// --------------------------------------------------------

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    mode: ViewMode,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render(&self, w: &mut impl Write) -> fmt::Result {
        writeln!(w, "# {}", self.data.path)?;
        match toml::to_string_pretty(&self.data.config) {
            Ok(text) => write!(w, "{}", text),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Text => self.render(f),
            ViewMode::Markup => preformatted(f, |w| self.render(w)),
        }
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
    mode: ViewMode,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render(&self, w: &mut impl Write) -> fmt::Result {
        writeln!(w, "{}", self.data.path)
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Text => self.render(f),
            ViewMode::Markup => preformatted(f, |w| self.render(w)),
        }
    }
}
