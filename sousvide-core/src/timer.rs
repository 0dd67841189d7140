//! Cook clock
//!
//! Remembers when the water first came within range of the target and
//! reports how many whole minutes the food has been holding since.

/// Milliseconds per minute
pub const MS_PER_MINUTE: u64 = 60_000;

/// Holding-time tracker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CookTimer {
    /// Uptime (ms) at which holding started
    started_at_ms: Option<u64>,
}

impl CookTimer {
    /// Create an unlatched timer
    pub const fn new() -> Self {
        Self { started_at_ms: None }
    }

    /// Record the start of holding
    ///
    /// Only the first call after construction or [`reset`](Self::reset) has
    /// any effect. Returns true if this call latched the clock.
    pub fn latch(&mut self, now_ms: u64) -> bool {
        if self.started_at_ms.is_some() {
            return false;
        }
        self.started_at_ms = Some(now_ms);
        true
    }

    /// Whole minutes of holding at `now_ms`, truncated
    ///
    /// Zero when unlatched or when `now_ms` precedes the latch.
    pub fn elapsed_minutes(&self, now_ms: u64) -> u32 {
        match self.started_at_ms {
            Some(start) => (now_ms.saturating_sub(start) / MS_PER_MINUTE) as u32,
            None => 0,
        }
    }

    /// Clear the clock for a new cooking cycle
    pub fn reset(&mut self) {
        self.started_at_ms = None;
    }

    pub fn is_latched(&self) -> bool {
        self.started_at_ms.is_some()
    }

    pub fn started_at(&self) -> Option<u64> {
        self.started_at_ms
    }
}
