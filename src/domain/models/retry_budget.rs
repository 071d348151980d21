use std::time::Duration;

/// Background refresh period for a mounted sections view.
pub const POLL_INTERVAL: Duration = Duration::from_millis(5_000);

/// Bounded wait applied after an acknowledged mutation.
///
/// Process-wide and immutable; the workflow uses [`RetryBudget::DELETE_CONVERGENCE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget {
    max_attempts: u32,
    delay: Duration,
}

impl RetryBudget {
    /// 10 re-reads, one second apart.
    pub const DELETE_CONVERGENCE: Self = Self::new(10, Duration::from_millis(1_000));

    /// Create a budget. `max_attempts` of zero means the waiter never reads.
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Maximum number of re-reads.
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Pause after each re-read that showed no change.
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self::DELETE_CONVERGENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_convergence_budget() {
        let budget = RetryBudget::default();
        assert_eq!(budget.max_attempts(), 10);
        assert_eq!(budget.delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_poll_interval() {
        assert_eq!(POLL_INTERVAL, Duration::from_secs(5));
    }
}
