use std::time::{Duration, Instant};

/// Trailing-edge debouncer for the search control. Each submission
/// replaces any pending one and restarts the quiet period; only the last
/// value fires. Timestamps are injected so the behavior is testable.
pub struct Debouncer {
    quiet: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn submit(&mut self, value: String, now: Instant) {
        self.pending = Some((value, now + self.quiet));
    }

    /// Fires the pending value once its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Fires the pending value immediately, quiet period or not.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_submissions_fire_once_with_the_last_value() {
        let mut d = Debouncer::new(Duration::from_millis(300));
        let t0 = Instant::now();
        d.submit("c".to_string(), t0);
        d.submit("co".to_string(), t0 + Duration::from_millis(50));
        d.submit("copy".to_string(), t0 + Duration::from_millis(100));

        assert_eq!(d.poll(t0 + Duration::from_millis(200)), None);
        assert_eq!(
            d.poll(t0 + Duration::from_millis(400)),
            Some("copy".to_string())
        );
        assert_eq!(d.poll(t0 + Duration::from_millis(800)), None);
    }

    #[test]
    fn each_submission_restarts_the_quiet_period() {
        let mut d = Debouncer::new(Duration::from_millis(300));
        let t0 = Instant::now();
        d.submit("a".to_string(), t0);
        // just before the deadline, a new keystroke arrives
        d.submit("ab".to_string(), t0 + Duration::from_millis(299));
        assert_eq!(d.poll(t0 + Duration::from_millis(301)), None);
        assert_eq!(
            d.poll(t0 + Duration::from_millis(599)),
            Some("ab".to_string())
        );
    }

    #[test]
    fn cancel_drops_the_pending_value() {
        let mut d = Debouncer::new(Duration::from_millis(300));
        let t0 = Instant::now();
        d.submit("a".to_string(), t0);
        d.cancel();
        assert_eq!(d.flush(), None);
    }
}
