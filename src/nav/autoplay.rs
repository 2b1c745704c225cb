use std::time::{Duration, Instant};

/// Deadline-based autoplay timer for the carousel.
///
/// Cancel-and-recreate rather than pause/resume: re-arming always starts a
/// fresh full interval, so a suspend never leaves a partial countdown to
/// drift against later cycles.
pub struct AutoplayTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl AutoplayTimer {
    /// Starts disarmed; the caller arms it once it knows the carousel is
    /// neither focused nor disabled.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns true once per elapsed interval and re-arms from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(6);

    #[test]
    fn test_disarmed_timer_never_fires() {
        let mut t = AutoplayTimer::new(INTERVAL);
        let now = Instant::now();
        assert!(!t.poll(now + Duration::from_secs(60)));
    }

    #[test]
    fn test_fires_after_interval_elapses() {
        let mut t = AutoplayTimer::new(INTERVAL);
        let start = Instant::now();
        t.arm(start);
        assert!(!t.poll(start + Duration::from_secs(5)));
        assert!(t.poll(start + Duration::from_secs(6)));
    }

    #[test]
    fn test_rearms_after_firing() {
        let mut t = AutoplayTimer::new(INTERVAL);
        let start = Instant::now();
        t.arm(start);
        assert!(t.poll(start + Duration::from_secs(6)));
        // Next deadline counts from the firing poll, not the original arm.
        assert!(!t.poll(start + Duration::from_secs(11)));
        assert!(t.poll(start + Duration::from_secs(12)));
    }

    #[test]
    fn test_cancel_then_arm_starts_fresh_interval() {
        let mut t = AutoplayTimer::new(INTERVAL);
        let start = Instant::now();
        t.arm(start);
        t.cancel();
        assert!(!t.is_armed());
        // Re-arm 5 seconds in: the old deadline must not apply.
        let rearm = start + Duration::from_secs(5);
        t.arm(rearm);
        assert!(!t.poll(start + Duration::from_secs(6)));
        assert!(t.poll(rearm + INTERVAL));
    }
}
