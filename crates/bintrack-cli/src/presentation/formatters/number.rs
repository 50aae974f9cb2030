/// Group the digits of an integer, e.g. `1234567` -> `1,234,567`.
pub fn format_count(value: i64, separator: &str) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len() + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// `,` when digits are grouped with `.`, so `2.500` and `2,5` stay distinct.
fn decimal_mark(separator: &str) -> char {
    if separator == "." { ',' } else { '.' }
}

/// Grouped integer part plus up to three fraction digits, trailing zeros dropped.
pub fn format_quantity(value: f64, separator: &str) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let scaled = (value.abs() * 1000.0).round() as u64;
    let whole = (scaled / 1000) as i64;
    let frac = scaled % 1000;

    let mut out = String::new();
    if value < 0.0 && scaled > 0 {
        out.push('-');
    }
    out.push_str(&format_count(whole, separator));
    if frac > 0 {
        let digits = format!("{:03}", frac);
        out.push(decimal_mark(separator));
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Units per case as entered: no grouping, no trailing `.0`.
pub fn format_per_case(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
