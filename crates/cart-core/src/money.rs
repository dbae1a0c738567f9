//! Currency Formatting

/// Format an amount as `prefix` plus a thousands-grouped number with at
/// most three fraction digits. Non-finite amounts format as zero.
pub fn format_money(amount: f64, prefix: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.3}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(prefix.len() + fixed.len() + whole.len() / 3 + 1);
    out.push_str(prefix);
    if amount < 0.0 && (whole != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0, "NT$ "), "NT$ 0");
        assert_eq!(format_money(300.0, "NT$ "), "NT$ 300");
        assert_eq!(format_money(1234.0, "NT$ "), "NT$ 1,234");
        assert_eq!(format_money(1234567.0, "NT$ "), "NT$ 1,234,567");
        assert_eq!(format_money(999.5, "NT$ "), "NT$ 999.5");
        assert_eq!(format_money(0.1 + 0.2, "NT$ "), "NT$ 0.3");
        assert_eq!(format_money(-2500.0, "NT$ "), "NT$ -2,500");
    }

    #[test]
    fn test_non_finite_formats_as_zero() {
        assert_eq!(format_money(f64::NAN, "NT$ "), "NT$ 0");
        assert_eq!(format_money(f64::INFINITY, "$"), "$0");
    }
}
