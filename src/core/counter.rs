//! Animated stat counters
//!
//! A stat like `10K+` counts up from zero to its displayed value with an
//! ease-out-quart curve, keeping its suffixes while it runs.

use std::time::Duration;

/// Suffix markers recognised in counter text, rendered in this order
const SUFFIXES: [char; 3] = ['K', '+', '%'];

/// Parsed counter text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFormat {
    pub target: u64,
    pub thousands: bool,
    pub plus: bool,
    pub percent: bool,
}

impl CounterFormat {
    /// Parse counter text such as `500+`, `10K+` or `99%`.
    ///
    /// Every ASCII digit in the text contributes to the target, so `4.9`
    /// reads as `49`. Returns `None` when the text has no digits.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return None;
        }
        let target = digits.parse::<u64>().unwrap_or(u64::MAX);

        Some(Self {
            target,
            thousands: text.contains(SUFFIXES[0]),
            plus: text.contains(SUFFIXES[1]),
            percent: text.contains(SUFFIXES[2]),
        })
    }

    /// Render a value with this counter's suffixes
    pub fn render(&self, value: u64) -> String {
        let mut out = value.to_string();
        if self.thousands {
            out.push('K');
        }
        if self.plus {
            out.push('+');
        }
        if self.percent {
            out.push('%');
        }
        out
    }
}

/// `1 - (1 - p)^4`, with `p` clamped to `[0, 1]`
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// One rendered frame of a counter animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

/// Time-driven counter animation
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    format: CounterFormat,
    duration: Duration,
}

impl CounterAnimation {
    pub fn new(format: CounterFormat, duration: Duration) -> Self {
        Self { format, duration }
    }

    /// Start from element text; `None` when the text is not a number
    pub fn from_text(text: &str, duration: Duration) -> Option<Self> {
        CounterFormat::parse(text).map(|format| Self::new(format, duration))
    }

    pub fn format(&self) -> &CounterFormat {
        &self.format
    }

    /// Value shown after `elapsed` time
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let progress = self.progress(elapsed);
        (self.format.target as f64 * ease_out_quart(progress)).floor() as u64
    }

    pub fn frame(&self, elapsed: Duration) -> CounterFrame {
        CounterFrame {
            text: self.format.render(self.value_at(elapsed)),
            finished: self.progress(elapsed) >= 1.0,
        }
    }

    fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_parse_suffixes() {
        let format = CounterFormat::parse("10K+").unwrap();
        assert_eq!(format.target, 10);
        assert!(format.thousands);
        assert!(format.plus);
        assert!(!format.percent);

        let format = CounterFormat::parse("99%").unwrap();
        assert_eq!(format.target, 99);
        assert!(format.percent);
    }

    #[test]
    fn test_parse_strips_non_digits() {
        assert_eq!(CounterFormat::parse("4.9").unwrap().target, 49);
        assert_eq!(CounterFormat::parse("1,000+").unwrap().target, 1000);
    }

    #[test]
    fn test_parse_without_digits() {
        assert!(CounterFormat::parse("").is_none());
        assert!(CounterFormat::parse("N/A").is_none());
    }

    #[test]
    fn test_render_order() {
        let format = CounterFormat {
            target: 5,
            thousands: true,
            plus: true,
            percent: true,
        };
        assert_eq!(format.render(3), "3K+%");
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(0.5), 0.9375);
        assert_eq!(ease_out_quart(2.0), 1.0);
        assert_eq!(ease_out_quart(-1.0), 0.0);
    }

    #[test]
    fn test_animation_frames() {
        let anim = CounterAnimation::from_text("500+", ms(2000)).unwrap();
        assert_eq!(anim.frame(ms(0)).text, "0+");
        assert!(!anim.frame(ms(0)).finished);
        // 500 * 0.9375
        assert_eq!(anim.value_at(ms(1000)), 468);
        let last = anim.frame(ms(2000));
        assert_eq!(last.text, "500+");
        assert!(last.finished);
        assert_eq!(anim.frame(ms(5000)).text, "500+");
    }

    #[test]
    fn test_values_never_decrease() {
        let anim = CounterAnimation::from_text("1000", ms(2000)).unwrap();
        let mut last = 0;
        for step in 0..=200 {
            let value = anim.value_at(ms(step * 10));
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 1000);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let anim = CounterAnimation::from_text("42", Duration::ZERO).unwrap();
        let frame = anim.frame(Duration::ZERO);
        assert_eq!(frame.text, "42");
        assert!(frame.finished);
    }
}
