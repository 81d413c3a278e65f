//! Month name formatting for the "favorite month" card.

use serde_json::Value;

/// Shown for anything that is not a month number
pub const NOT_AVAILABLE: &str = "N/A";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name for a month number in 1..=12, `"N/A"` otherwise
pub fn month_name_from_number(month: i64) -> &'static str {
    usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|idx| MONTHS.get(idx).copied())
        .unwrap_or(NOT_AVAILABLE)
}

/// Month name for a raw JSON value as sent by the metrics service.
///
/// Numbers are truncated toward zero; strings are read by their leading
/// integer (`"03"` and `"3 "` are March). Anything else is `"N/A"`.
pub fn month_name(value: &Value) -> &'static str {
    let number = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => leading_integer(s),
        _ => None,
    };

    number.map(month_name_from_number).unwrap_or(NOT_AVAILABLE)
}

fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let n: i64 = digits[..end].parse().ok()?;
    Some(if negative { -n } else { n })
}
