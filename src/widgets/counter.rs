//! Animated statistic counters.
//!
//! A counter displays an integer climbing from 0 to a target value once its
//! element becomes sufficiently visible. The climb follows a cubic ease-out
//! curve over a fixed duration, with the intermediate value floored and
//! grouped with thousands separators every frame. On completion the display
//! is exactly the grouped target plus the configured suffix.
//!
//! The visibility trigger fires at most once: the first observation at or
//! above the threshold starts the animation and detaches the observer, so a
//! counter never restarts even if its element leaves and re-enters view.

use crate::timing::{self, Millis};
use serde::{Deserialize, Serialize};

/// Element-level counter declaration, as string attributes.
///
/// `target` carries the raw attribute text; parsing follows the lenient
/// leading-digits rule (see [`parse_target`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterSpec {
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

/// Parse a target attribute: optional leading whitespace, then as many
/// ASCII digits as present. Anything unparsable yields 0.
pub fn parse_target(raw: &str) -> u64 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Group an integer with commas: `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Observer attached, waiting for the element to come into view.
    Waiting,
    Running { start: Millis },
    Done,
}

#[derive(Debug, Clone)]
pub struct Counter {
    target: u64,
    suffix: Option<String>,
    duration: Millis,
    threshold: f64,
    phase: Phase,
    display: String,
}

impl Counter {
    pub fn new(spec: &CounterSpec, duration: Millis, threshold: f64) -> Counter {
        Counter {
            target: parse_target(&spec.target),
            suffix: spec.suffix.clone(),
            duration,
            threshold,
            phase: Phase::Waiting,
            display: "0".to_string(),
        }
    }

    /// Report a visibility ratio. Returns `true` when the observer should
    /// detach — which happens on the observation that starts the animation,
    /// and stays true afterwards.
    pub fn observe(&mut self, ratio: f64, now: Millis) -> bool {
        match self.phase {
            Phase::Waiting => {
                if ratio >= self.threshold {
                    self.phase = Phase::Running { start: now };
                    true
                } else {
                    false
                }
            }
            _ => true,
        }
    }

    /// Per-frame update. No-op until started and after completion.
    pub fn frame(&mut self, now: Millis) {
        let Phase::Running { start } = self.phase else {
            return;
        };
        let p = timing::progress(start, now, self.duration);
        let eased = timing::ease_out_cubic(p);
        let current = (self.target as f64 * eased).floor() as u64;
        self.display = group_thousands(current);
        if p >= 1.0 {
            self.display = group_thousands(self.target);
            if let Some(suffix) = &self.suffix {
                self.display.push_str(suffix);
            }
            self.phase = Phase::Done;
        }
    }

    pub fn started(&self) -> bool {
        !matches!(self.phase, Phase::Waiting)
    }

    pub fn done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(target: &str, suffix: Option<&str>) -> CounterSpec {
        CounterSpec {
            target: target.to_string(),
            suffix: suffix.map(str::to_string),
        }
    }

    // =========================================================================
    // Attribute parsing
    // =========================================================================

    #[test]
    fn parse_plain_number() {
        assert_eq!(parse_target("1234"), 1234);
    }

    #[test]
    fn parse_takes_leading_digits() {
        assert_eq!(parse_target("250 students"), 250);
        assert_eq!(parse_target("  42"), 42);
    }

    #[test]
    fn parse_unparsable_is_zero() {
        assert_eq!(parse_target(""), 0);
        assert_eq!(parse_target("many"), 0);
    }

    // =========================================================================
    // Grouping
    // =========================================================================

    #[test]
    fn grouping_small_numbers_unchanged() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
    }

    #[test]
    fn grouping_inserts_commas() {
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(1000), "1,000");
    }

    // =========================================================================
    // Trigger
    // =========================================================================

    #[test]
    fn does_not_start_below_threshold() {
        let mut c = Counter::new(&spec("100", None), 2000, 0.5);
        assert!(!c.observe(0.3, 10));
        assert!(!c.started());
    }

    #[test]
    fn starts_once_at_threshold_and_detaches() {
        let mut c = Counter::new(&spec("100", None), 2000, 0.5);
        assert!(c.observe(0.5, 10));
        assert!(c.started());
        // Further observations report detached and change nothing.
        assert!(c.observe(0.0, 999));
        c.frame(10);
        assert_eq!(c.display(), "0");
    }

    #[test]
    fn never_restarts_after_completion() {
        let mut c = Counter::new(&spec("50", None), 2000, 0.5);
        c.observe(1.0, 0);
        c.frame(2000);
        assert!(c.done());
        assert!(c.observe(1.0, 5000));
        c.frame(5000);
        assert_eq!(c.display(), "50");
    }

    // =========================================================================
    // Progression
    // =========================================================================

    #[test]
    fn completes_to_exact_grouped_target() {
        let mut c = Counter::new(&spec("1234", None), 2000, 0.5);
        c.observe(0.6, 0);
        c.frame(2000);
        assert!(c.done());
        assert_eq!(c.display(), "1,234");
    }

    #[test]
    fn suffix_appended_only_on_completion() {
        let mut c = Counter::new(&spec("1234", Some("+")), 2000, 0.5);
        c.observe(0.6, 0);
        c.frame(1000);
        assert!(!c.display().ends_with('+'));
        c.frame(2000);
        assert_eq!(c.display(), "1,234+");
    }

    #[test]
    fn progression_is_monotonic() {
        let mut c = Counter::new(&spec("987654", None), 2000, 0.5);
        c.observe(1.0, 0);
        let mut prev = 0u64;
        for now in (0..=2000).step_by(16) {
            c.frame(now);
            let value: u64 = c.display().replace(',', "").parse().unwrap();
            assert!(value >= prev, "display regressed at {now}");
            prev = value;
        }
        assert_eq!(prev, 987_654);
    }

    #[test]
    fn ease_out_front_loads_the_climb() {
        let mut c = Counter::new(&spec("1000", None), 2000, 0.5);
        c.observe(1.0, 0);
        c.frame(1000);
        let halfway: u64 = c.display().replace(',', "").parse().unwrap();
        assert!(halfway > 800, "ease-out should be past 80% at half time");
    }

    #[test]
    fn frame_past_duration_is_complete() {
        let mut c = Counter::new(&spec("10", None), 2000, 0.5);
        c.observe(1.0, 100);
        c.frame(99_999);
        assert!(c.done());
        assert_eq!(c.display(), "10");
    }

    #[test]
    fn zero_target_completes_at_zero() {
        let mut c = Counter::new(&spec("nope", Some("%")), 2000, 0.5);
        c.observe(1.0, 0);
        c.frame(2000);
        assert_eq!(c.display(), "0%");
    }
}
