//! Subscription ledger for the panel's data-source link
//!
//! At most one refresh subscription may be outstanding per view generation.
//! Acquire and release must pair symmetrically across panel re-creation;
//! acquiring on top of a live handle would double-deliver every future
//! refresh, so the ledger releases the stale handle itself and logs the
//! discipline violation instead of leaking.

use crate::data::{DataSource, RefreshFn, SubscriptionId};

/// Tracks the single active data-source subscription
#[derive(Default)]
pub struct SubscriptionLedger {
    active: Option<SubscriptionId>,
    acquired_total: u64,
    released_total: u64,
}

impl SubscriptionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `callback` to `source`, recording the handle
    ///
    /// A still-outstanding handle is released first; callers are expected to
    /// have released already, so that path warns.
    pub fn acquire(&mut self, source: &mut dyn DataSource, callback: RefreshFn) -> SubscriptionId {
        if self.active.is_some() {
            tracing::warn!("Acquiring subscription with one still outstanding; releasing it");
            self.release(source);
        }
        let id = source.subscribe(callback);
        self.active = Some(id);
        self.acquired_total += 1;
        id
    }

    /// Release the active subscription; no-op when none is held
    pub fn release(&mut self, source: &mut dyn DataSource) -> bool {
        match self.active.take() {
            Some(id) => {
                source.unsubscribe(id);
                self.released_total += 1;
                true
            }
            None => false,
        }
    }

    /// Number of currently outstanding handles (0 or 1)
    pub fn outstanding(&self) -> usize {
        usize::from(self.active.is_some())
    }

    pub fn acquired_total(&self) -> u64 {
        self.acquired_total
    }

    pub fn released_total(&self) -> u64 {
        self.released_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Item, JsonDataSource};

    #[test]
    fn test_acquire_release_pairing() {
        let mut source = JsonDataSource::new(vec![Item::project("a")]);
        let mut ledger = SubscriptionLedger::new();

        ledger.acquire(&mut source, Box::new(|_| {}));
        assert_eq!(ledger.outstanding(), 1);
        assert_eq!(source.subscriber_count(), 1);

        assert!(ledger.release(&mut source));
        assert_eq!(ledger.outstanding(), 0);
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn test_release_without_acquire_is_noop() {
        let mut source = JsonDataSource::new(Vec::new());
        let mut ledger = SubscriptionLedger::new();
        assert!(!ledger.release(&mut source));
        assert!(!ledger.release(&mut source));
        assert_eq!(ledger.released_total(), 0);
    }

    #[test]
    fn test_double_acquire_releases_stale_handle() {
        let mut source = JsonDataSource::new(Vec::new());
        let mut ledger = SubscriptionLedger::new();

        ledger.acquire(&mut source, Box::new(|_| {}));
        ledger.acquire(&mut source, Box::new(|_| {}));

        // Never more than one delivery target
        assert_eq!(source.subscriber_count(), 1);
        assert_eq!(ledger.outstanding(), 1);
        assert_eq!(ledger.acquired_total(), 2);
        assert_eq!(ledger.released_total(), 1);
    }
}
