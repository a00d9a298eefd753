//! Display formatting helpers for the front-end shell

use chrono::{DateTime, Utc};

/// Currency with two decimals and thousands separators, e.g. "$10,540.00"
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let formatted = format!("{:.2}", value.abs());
    let (whole, frac) = formatted.split_once('.').unwrap_or((&formatted, "00"));
    format!("{}${}.{}", sign, group_thousands(whole), frac)
}

/// Signed percentage, e.g. "+1.36%" / "-0.85%"
pub fn format_percent(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// Compact magnitude, e.g. 45234567 -> "45.2M"
pub fn format_compact_number(value: i64) -> String {
    let v = value as f64;
    if v >= 1e9 {
        format!("{:.1}B", v / 1e9)
    } else if v >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else if v >= 1e3 {
        format!("{:.1}K", v / 1e3)
    } else {
        value.to_string()
    }
}

/// Market cap string with a dollar prefix, e.g. "2.85T" -> "$2.85T"
pub fn format_market_cap(value: &str) -> String {
    match value.chars().last() {
        Some(suffix @ ('T' | 'B' | 'M')) => {
            let number: f64 = value[..value.len() - 1].parse().unwrap_or(0.0);
            format!("${:.2}{}", number, suffix)
        }
        _ => value.to_string(),
    }
}

/// Coarse relative time, e.g. "Just now", "5m ago", "3h ago", "2d ago"
pub fn relative_time(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - target).num_seconds();

    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else if seconds < 2_592_000 {
        format!("{}d ago", seconds / 86_400)
    } else {
        target.format("%Y-%m-%d").to_string()
    }
}

/// Ticker symbols are 1-5 ASCII letters
pub fn is_valid_symbol(symbol: &str) -> bool {
    let symbol = symbol.trim();
    (1..=5).contains(&symbol.len()) && symbol.chars().all(|c| c.is_ascii_alphabetic())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (ix, c) in digits.chars().enumerate() {
        if ix > 0 && (digits.len() - ix) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(182.52), "$182.52");
        assert_eq!(format_currency(10_540.0), "$10,540.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-42.5), "-$42.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1.36), "+1.36%");
        assert_eq!(format_percent(-0.85), "-0.85%");
        assert_eq!(format_percent(0.0), "+0.00%");
    }

    #[test]
    fn test_format_compact_number() {
        assert_eq!(format_compact_number(45_234_567), "45.2M");
        assert_eq!(format_compact_number(1_500_000_000), "1.5B");
        assert_eq!(format_compact_number(2_500), "2.5K");
        assert_eq!(format_compact_number(999), "999");
    }

    #[test]
    fn test_format_market_cap() {
        assert_eq!(format_market_cap("2.85T"), "$2.85T");
        assert_eq!(format_market_cap("790.2B"), "$790.20B");
        assert_eq!(format_market_cap("n/a"), "n/a");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc::now();
        assert_eq!(relative_time(now - Duration::seconds(30), now), "Just now");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3h ago");
        assert_eq!(relative_time(now - Duration::days(2), now), "2d ago");

        let old = now - Duration::days(40);
        assert_eq!(relative_time(old, now), old.format("%Y-%m-%d").to_string());
    }

    #[test]
    fn test_is_valid_symbol() {
        assert!(is_valid_symbol("AAPL"));
        assert!(is_valid_symbol("a"));
        assert!(is_valid_symbol(" GOOGL "));
        assert!(!is_valid_symbol(""));
        assert!(!is_valid_symbol("TOOLONG"));
        assert!(!is_valid_symbol("BRK.B"));
        assert!(!is_valid_symbol("123"));
    }
}
