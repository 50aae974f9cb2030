use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared "request in flight" flag.
///
/// Every load and mutation holds a [`BusyGuard`]; the indicator shows as
/// busy while at least one guard is alive.
#[derive(Debug, Clone, Default)]
pub struct BusyIndicator {
    active: Arc<AtomicUsize>,
}

impl BusyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&self) -> BusyGuard {
        self.active.fetch_add(1, Ordering::SeqCst);
        BusyGuard {
            active: Arc::clone(&self.active),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.depth() > 0
    }

    pub fn depth(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

#[must_use = "the indicator is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct BusyGuard {
    active: Arc<AtomicUsize>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_every_exit_path() {
        let busy = BusyIndicator::new();

        fn fails(busy: &BusyIndicator) -> Result<(), &'static str> {
            let _guard = busy.enter();
            Err("boom")
        }

        assert!(fails(&busy).is_err());
        assert!(!busy.is_busy());

        let outer = busy.enter();
        let inner = busy.enter();
        assert_eq!(busy.depth(), 2);
        drop(inner);
        assert!(busy.is_busy());
        drop(outer);
        assert!(!busy.is_busy());
    }
}
