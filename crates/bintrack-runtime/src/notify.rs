//! Transient notifications and deferred navigation.

use serde::Serialize;
use std::fmt;
use tokio::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    expires_at: Instant,
}

impl Notice {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Queue of auto-dismissing notices. Nothing here is fatal; notices simply
/// stop being reported once their lifetime has passed.
#[derive(Debug, Clone)]
pub struct Notifier {
    ttl: Duration,
    notices: Vec<Notice>,
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            notices: Vec::new(),
        }
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            level,
            message: message.into(),
            expires_at: Instant::now() + self.ttl,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message);
    }

    /// Notices still alive at `now`, oldest first.
    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(move |n| !n.is_expired(now))
    }

    /// Drop expired notices; returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.notices.len();
        self.notices.retain(|n| !n.is_expired(now));
        before - self.notices.len()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Every notice pushed so far, expired or not.
    pub fn all(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_all(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}

/// Screens outside this client that a session can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Login,
    Settings,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Settings => "/settings",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub route: Route,
    pub due: Instant,
}

impl Redirect {
    pub fn now(route: Route) -> Self {
        Self {
            route,
            due: Instant::now(),
        }
    }

    pub fn after(route: Route, delay: Duration) -> Self {
        Self {
            route,
            due: Instant::now() + delay,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_notice_expires_after_ttl() {
        let mut notifier = Notifier::new(Duration::from_millis(4500));
        notifier.error("Failed to load data");

        tokio::time::advance(Duration::from_millis(4499)).await;
        assert_eq!(notifier.active(Instant::now()).count(), 1);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(notifier.active(Instant::now()).count(), 0);
        assert_eq!(notifier.prune(Instant::now()), 1);
        assert!(notifier.latest().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_redirect_becomes_due() {
        let redirect = Redirect::after(Route::Settings, Duration::from_millis(2000));
        assert!(!redirect.is_due(Instant::now()));

        tokio::time::advance(Duration::from_millis(2000)).await;
        assert!(redirect.is_due(Instant::now()));
        assert_eq!(redirect.route.path(), "/settings");
    }
}
