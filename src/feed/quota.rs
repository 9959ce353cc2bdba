//! Call-cost accounting for a single aggregation run.

use std::sync::atomic::{AtomicU64, Ordering};

/// Running count of upstream call-cost units spent by one run.
///
/// The ledger lives exactly as long as the run; nothing is persisted
/// across invocations. In its default, observing form it only counts,
/// and the protection against runaway spend is the up-front channel cap.
/// With a budget it additionally gates calls: once the budget cannot
/// cover the next call, that call is not issued. The gate is checked
/// before a call goes out, never mid-flight.
#[derive(Debug)]
pub struct QuotaLedger {
    spent: AtomicU64,
    budget: Option<u64>,
}

impl QuotaLedger {
    /// A ledger that counts and never interferes.
    pub fn observing() -> Self {
        Self {
            spent: AtomicU64::new(0),
            budget: None,
        }
    }

    /// A ledger that refuses reservations past `units`.
    pub fn with_budget(units: u64) -> Self {
        Self {
            spent: AtomicU64::new(0),
            budget: Some(units),
        }
    }

    /// Units consumed so far.
    pub fn spent(&self) -> u64 {
        self.spent.load(Ordering::Relaxed)
    }

    /// Reserves `units` for a call that is charged whether or not it
    /// succeeds. Returns false when the budget cannot cover it, in which
    /// case nothing was reserved and the caller must skip the call.
    ///
    /// Concurrent callers may race for the last units of a budget; the
    /// compare-and-swap loop guarantees the total never overshoots.
    pub fn try_reserve(&self, units: u64) -> bool {
        match self.budget {
            None => {
                self.spent.fetch_add(units, Ordering::Relaxed);
                true
            }
            Some(budget) => self
                .spent
                .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |spent| {
                    let next = spent + units;
                    (next <= budget).then_some(next)
                })
                .is_ok(),
        }
    }

    /// True when a call costing `units` could still be issued.
    ///
    /// Used together with [`QuotaLedger::record`] for calls that are only
    /// charged on success; only safe where calls are issued sequentially.
    pub fn may_spend(&self, units: u64) -> bool {
        self.budget
            .is_none_or(|budget| self.spent() + units <= budget)
    }

    /// Records units consumed by an already-issued call.
    pub fn record(&self, units: u64) {
        self.spent.fetch_add(units, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn observing_ledger_only_counts() {
        let ledger = QuotaLedger::observing();
        for _ in 0..1000 {
            assert!(ledger.try_reserve(1));
        }
        assert!(ledger.may_spend(u64::MAX / 2));
        assert_eq!(ledger.spent(), 1000);
    }

    #[test]
    fn budgeted_ledger_refuses_past_budget() {
        let ledger = QuotaLedger::with_budget(3);
        assert!(ledger.try_reserve(2));
        assert!(ledger.try_reserve(1));
        // Budget is spent; nothing further is reserved and the count holds.
        assert!(!ledger.try_reserve(1));
        assert_eq!(ledger.spent(), 3);
    }

    #[test]
    fn failed_reservation_reserves_nothing() {
        let ledger = QuotaLedger::with_budget(5);
        assert!(!ledger.try_reserve(6));
        assert_eq!(ledger.spent(), 0);
        assert!(ledger.try_reserve(5));
    }

    #[test]
    fn may_spend_and_record_track_the_budget() {
        let ledger = QuotaLedger::with_budget(2);
        assert!(ledger.may_spend(1));
        ledger.record(1);
        assert!(ledger.may_spend(1));
        ledger.record(1);
        assert!(!ledger.may_spend(1));
        assert_eq!(ledger.spent(), 2);
    }
}
