//! Display formatting shared by the dashboard pages.

/// Format a dollar amount with thousands separators and at most two
/// fraction digits, e.g. `500000.0` -> `"$500,000"`, `1234.5` -> `"$1,234.5"`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('$');
    out.push_str(&grouped);
    if fraction != 0 {
        let frac = format!("{fraction:02}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// Convert a 0..1 confidence into a rounded percentage.
pub fn confidence_percent(confidence: f64) -> u32 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u32
}

/// Average confidence across alerts as a rounded percentage. Missing
/// confidences count as zero; an empty slice yields 0.
pub fn average_confidence_percent(confidences: &[Option<f64>]) -> u32 {
    if confidences.is_empty() {
        return 0;
    }
    let sum: f64 = confidences.iter().map(|c| c.unwrap_or(0.0)).sum();
    (sum / confidences.len() as f64 * 100.0).round() as u32
}
