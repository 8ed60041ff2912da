/// Abbreviate large magnitudes for display.
///
/// - `>= 1e12` -> `$1.50T`
/// - `>= 1e9`  -> `$2.10B`
/// - `>= 1e6`  -> `$2.50M`
/// - otherwise two decimals, thousands grouped when `is_currency`
///
/// Halves round away from zero: `0.125` -> `$0.13`.
pub fn format_currency(num: f64, is_currency: bool) -> String {
    let num = normalize_zero(num);
    let prefix = if is_currency { "$" } else { "" };
    if num >= 1e12 {
        return format!("{prefix}{:.2}T", round_cents(num / 1e12));
    }
    if num >= 1e9 {
        return format!("{prefix}{:.2}B", round_cents(num / 1e9));
    }
    if num >= 1e6 {
        return format!("{prefix}{:.2}M", round_cents(num / 1e6));
    }
    if is_currency {
        format!("${}", group_thousands(num))
    } else {
        format!("{:.2}", round_cents(num))
    }
}

/// Signed percentage with two decimals: `+3.46%`, `-1.20%`.
pub fn format_percentage(num: f64) -> String {
    let num = normalize_zero(num);
    let sign = if num >= 0.0 { "+" } else { "" };
    format!("{sign}{:.2}%", round_cents(num))
}

/// `-0.0` from upstream JSON prints like `0.0`
fn normalize_zero(num: f64) -> f64 {
    if num == 0.0 { 0.0 } else { num }
}

/// Two-decimal rounding with ties away from zero; `{:.2}` alone rounds ties to even.
fn round_cents(num: f64) -> f64 {
    (num * 100.0).round() / 100.0
}

fn group_thousands(num: f64) -> String {
    let fixed = format!("{:.2}", round_cents(num.abs()));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        // inf / NaN
        return fixed;
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if num < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(1234567.891), "1,234,567.89");
        assert_eq!(group_thousands(999.999), "1,000.00");
        assert_eq!(group_thousands(12.0), "12.00");
        assert_eq!(group_thousands(-4321.5), "-4,321.50");
        assert_eq!(group_thousands(1234.125), "1,234.13");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(normalize_zero(-0.0).to_string(), "0");
        assert_eq!(round_cents(-0.004).abs(), 0.0);
    }
}
