pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Text for an optional label; missing or blank reads as "N/A".
pub fn or_na(text: Option<&str>) -> &str {
    match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => "N/A",
    }
}

/// Secondary line of a product suggestion.
pub fn product_detail(upc: &str, qty_per_case: Option<f64>) -> String {
    let qty = qty_per_case
        .map(super::number::format_per_case)
        .unwrap_or_else(|| NOT_SET.to_string());
    format!("UPC: {} | Qty per Case: {}", upc, qty)
}

pub const NOT_SET: &str = "Not Set";
pub const NOT_APPLICABLE: &str = "—";
