pub const DEFAULT_DURATION_MS: f64 = 2000.0;

pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Parses a counter target the way markup provides it. Anything that is not
/// an integer yields `None` and the counter is left alone.
pub fn parse_target(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterTarget {
    pub target: u64,
    pub duration_ms: f64,
    pub suffix: String,
}

impl CounterTarget {
    pub fn new(target: u64, duration_ms: f64, suffix: impl Into<String>) -> Self {
        Self {
            target,
            duration_ms: duration_ms.max(0.0),
            suffix: suffix.into(),
        }
    }

    pub fn from_attrs(target: &str, duration_ms: Option<f64>, suffix: &str) -> Option<Self> {
        parse_target(target)
            .map(|t| Self::new(t, duration_ms.unwrap_or(DEFAULT_DURATION_MS), suffix))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub value: u64,
    pub text: String,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimator {
    counter: CounterTarget,
    started_at: Option<f64>,
}

impl CounterAnimator {
    pub fn new(counter: CounterTarget) -> Self {
        Self {
            counter,
            started_at: None,
        }
    }

    pub fn progress(&self, now: f64) -> f64 {
        let start = self.started_at.unwrap_or(now);
        if self.counter.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - start) / self.counter.duration_ms).clamp(0.0, 1.0)
    }

    // at progress 1 the value is exactly the target
    pub fn frame(&mut self, now: f64) -> CounterFrame {
        self.started_at.get_or_insert(now);
        let progress = self.progress(now);
        let value = if progress >= 1.0 {
            self.counter.target
        } else {
            (ease_out_cubic(progress) * self.counter.target as f64).floor() as u64
        };
        CounterFrame {
            value,
            text: format!("{}{}", value, self.counter.suffix),
            done: progress >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn ninety_four_percent_scenario() {
        let mut counter = CounterAnimator::new(CounterTarget::new(94, 2000.0, "%"));
        let first = counter.frame(0.0);
        assert_eq!(first.text, "0%");
        assert!(!first.done);

        let mid = counter.frame(1000.0);
        assert!(mid.value > 0 && mid.value < 94, "mid value {}", mid.value);
        assert!(!mid.done);

        let end = counter.frame(2000.0);
        assert_eq!(end.text, "94%");
        assert!(end.done);
    }

    #[test]
    fn start_time_is_first_frame() {
        let mut counter = CounterAnimator::new(CounterTarget::new(10, 100.0, ""));
        counter.frame(5_000.0);
        assert!(!counter.frame(5_050.0).done);
        assert_eq!(counter.frame(5_100.0).value, 10);
    }

    #[test]
    fn values_are_monotonic_and_end_at_target() {
        for target in [0u64, 1, 7, 94, 312, 10_000] {
            let mut counter = CounterAnimator::new(CounterTarget::new(target, 2000.0, ""));
            let mut last = 0;
            let mut t = 0.0;
            while t <= 2000.0 {
                let frame = counter.frame(t);
                assert!(frame.value >= last);
                assert!(frame.value <= target);
                last = frame.value;
                t += 16.6;
            }
            assert_eq!(counter.frame(2000.0).value, target);
        }
    }

    #[test]
    fn late_frames_stay_at_target() {
        let mut counter = CounterAnimator::new(CounterTarget::new(42, 500.0, "+"));
        counter.frame(0.0);
        let frame = counter.frame(9_999.0);
        assert_eq!(frame.text, "42+");
        assert!(frame.done);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut counter = CounterAnimator::new(CounterTarget::new(5, 0.0, ""));
        let frame = counter.frame(123.0);
        assert!(frame.done);
        assert_eq!(frame.value, 5);
    }

    #[test]
    fn invalid_targets_are_rejected() {
        assert_eq!(parse_target("94"), Some(94));
        assert_eq!(parse_target(" 12 "), Some(12));
        assert_eq!(parse_target("abc"), None);
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target("-3"), None);
        assert!(CounterTarget::from_attrs("n/a", None, "%").is_none());
        let counter = CounterTarget::from_attrs("250", None, "+").unwrap();
        assert_eq!(counter.duration_ms, DEFAULT_DURATION_MS);
    }
}
