//! printf-style message templates: `%d`, `%f`, `%s` with optional width/precision
//!
//! Width is parsed but never applied. `%%` is a literal percent sign.

use regex::{Captures, Regex};
use std::fmt;
use std::sync::OnceLock;

const PERCENT_SENTINEL: char = '\u{FFFF}';

fn specifier() -> &'static Regex {
    static SPECIFIER: OnceLock<Regex> = OnceLock::new();
    SPECIFIER.get_or_init(|| {
        Regex::new(r"%(\d+)?(?:\.(\d+))?([dfs])").expect("specifier pattern is valid")
    })
}

/// A value substituted into a template
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Num(f64),
    Text(String),
}

impl Arg {
    fn as_number(&self) -> f64 {
        match self {
            Arg::Num(n) => *n,
            Arg::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Num(n) => write!(f, "{n}"),
            Arg::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Arg::Num(n)
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Arg::Num(f64::from(n))
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Text(s)
    }
}

/// Substitute `args` into `template` in order.
///
/// Specifiers without a matching argument render as `undefined` for `%s`
/// and `NaN` for the numeric forms.
pub fn format(template: &str, args: &[Arg]) -> String {
    let sanitized = template.replace("%%", &PERCENT_SENTINEL.to_string());
    let mut next = args.iter();

    let formatted = specifier().replace_all(&sanitized, |caps: &Captures<'_>| {
        let arg = next.next();
        match &caps[3] {
            "s" => arg.map_or_else(|| "undefined".to_string(), Arg::to_string),
            "d" => {
                let n = arg.map_or(f64::NAN, Arg::as_number);
                if n.is_finite() {
                    // `+ 0.0` folds -0 into 0
                    format!("{:.0}", n.trunc() + 0.0)
                } else {
                    "NaN".to_string()
                }
            }
            _ => {
                let n = arg.map_or(f64::NAN, Arg::as_number);
                let precision = caps.get(2).and_then(|p| p.as_str().parse::<usize>().ok());
                format_number(n, precision)
            }
        }
    });

    formatted.replace(PERCENT_SENTINEL, "%")
}

fn format_number(n: f64, precision: Option<usize>) -> String {
    if !n.is_finite() {
        return "NaN".to_string();
    }
    match precision {
        Some(p) => format!("{n:.p$}"),
        None => format!("{n}"),
    }
}

/// `format!`-like shorthand: `fmt_msg!(template, a, b)`
#[macro_export]
macro_rules! fmt_msg {
    ($template:expr) => {
        $crate::core::format::format($template, &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::core::format::format(
            $template,
            &[$($crate::core::format::Arg::from($arg)),+],
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision() {
        assert_eq!(format("%.2f", &[3.14159.into()]), "3.14");
        assert_eq!(format("%.0f ft", &[2499.6.into()]), "2500 ft");
    }

    #[test]
    fn test_float_default_conversion() {
        assert_eq!(format("%f", &[0.9.into()]), "0.9");
        assert_eq!(format("%f", &[400.0.into()]), "400");
    }

    #[test]
    fn test_integer_truncates() {
        assert_eq!(format("%d", &[7.9.into()]), "7");
        assert_eq!(format("%d", &[(-7.9).into()]), "-7");
        assert_eq!(format("%d", &[(-0.4).into()]), "0");
        assert_eq!(format("%d", &[1e20.into()]), "100000000000000000000");
    }

    #[test]
    fn test_non_finite_renders_nan() {
        assert_eq!(format("%d", &[f64::NAN.into()]), "NaN");
        assert_eq!(format("%.3f", &[f64::INFINITY.into()]), "NaN");
        assert_eq!(format("%d", &["abc".into()]), "NaN");
    }

    #[test]
    fn test_string_specifier() {
        assert_eq!(format("%s and %s", &["Ps1".into(), 2.0.into()]), "Ps1 and 2");
    }

    #[test]
    fn test_width_is_ignored() {
        assert_eq!(format("[%5d]", &[42_i32.into()]), "[42]");
        assert_eq!(format("[%8.1f]", &[1.26.into()]), "[1.3]");
    }

    #[test]
    fn test_literal_percent() {
        assert_eq!(format("100%%", &[]), "100%");
        assert_eq!(format("%d%%", &[50_i32.into()]), "50%");
        assert_eq!(format("%%d", &[1_i32.into()]), "%d");
    }

    #[test]
    fn test_missing_args() {
        assert_eq!(format("%s/%d", &[]), "undefined/NaN");
    }

    #[test]
    fn test_macro() {
        assert_eq!(fmt_msg!("Score: %d/10", 8), "Score: 8/10");
        assert_eq!(fmt_msg!("plain"), "plain");
    }
}
