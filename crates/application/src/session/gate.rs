//! Single-flight guard for the token refresh call.

use std::sync::atomic::{AtomicBool, Ordering};

/// Gate ensuring at most one refresh call is in flight per coordinator.
///
/// The gate has two states, idle and refreshing. A caller transitions it
/// with [`RefreshGate::try_begin`], which either hands back a permit or
/// reports that another caller already holds one. The permit releases the
/// gate on drop, so no exit path can leave it stuck.
#[derive(Debug, Default)]
pub struct RefreshGate {
    refreshing: AtomicBool,
}

impl RefreshGate {
    /// Creates an idle gate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            refreshing: AtomicBool::new(false),
        }
    }

    /// Returns true while a permit is held.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::Acquire)
    }

    /// Attempts the idle-to-refreshing transition.
    ///
    /// Returns `None` when a refresh is already in flight; the caller must
    /// not start a second one.
    #[must_use]
    pub fn try_begin(&self) -> Option<RefreshPermit<'_>> {
        self.refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RefreshPermit { gate: self })
    }
}

/// Exclusive permission to run the refresh call; releases the gate on drop.
#[derive(Debug)]
pub struct RefreshPermit<'a> {
    gate: &'a RefreshGate,
}

impl Drop for RefreshPermit<'_> {
    fn drop(&mut self) {
        self.gate.refreshing.store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn second_caller_is_refused_while_permit_held() {
        let gate = RefreshGate::new();
        let permit = gate.try_begin();
        assert!(permit.is_some());
        assert!(gate.is_refreshing());
        assert!(gate.try_begin().is_none());
    }

    #[test]
    fn dropping_the_permit_reopens_the_gate() {
        let gate = RefreshGate::new();
        drop(gate.try_begin());
        assert!(!gate.is_refreshing());
        assert!(gate.try_begin().is_some());
    }
}
