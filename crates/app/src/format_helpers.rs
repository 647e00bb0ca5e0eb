//! Shared number formatting for the dashboards.

/// Format an amount the way an en-US locale does by default: thousands
/// separators and at most three fraction digits, trailing zeros dropped.
/// `2450.0` → `"2,450"`, `1234.5` → `"1,234.5"`, `12.345` → `"12.345"`.
///
/// An unknown balance renders as `"0.00"`.
pub fn format_balance(amount: Option<f64>) -> String {
    let Some(amount) = amount.filter(|a| a.is_finite()) else {
        return "0.00".to_string();
    };

    let millis = (amount.abs() * 1000.0).round() as u64;
    let whole = millis / 1000;
    let frac = millis % 1000;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && millis > 0 { "-" } else { "" };
    if frac == 0 {
        return format!("{sign}{grouped}");
    }
    let frac = format!("{frac:03}");
    format!("{sign}{grouped}.{}", frac.trim_end_matches('0'))
}

/// Monthly revenue (thousands) as a stat-card value: `45.2` → `"$45.2k"`.
pub fn format_revenue(thousands: f64) -> String {
    format!("${thousands}k")
}
