use chrono::Utc;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch, with sub-second precision.
    fn now_timestamp(&self) -> f64;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_timestamp(&self) -> f64 {
        Utc::now().timestamp_micros() as f64 / 1_000_000.0
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub f64);

impl Clock for FixedClock {
    fn now_timestamp(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_timestamp() > 1_577_836_800.0);
    }

    #[test]
    fn fixed_clock_is_frozen() {
        let clock = FixedClock(0.0);
        assert_eq!(clock.now_timestamp(), 0.0);
        assert_eq!(clock.now_timestamp(), 0.0);
    }
}
