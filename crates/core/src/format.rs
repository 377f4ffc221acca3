//! Display formatting for INR amounts, NAVs and percentages.

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

/// Whole-rupee amount with Indian digit grouping: `1230475.4 → "₹12,30,475"`.
/// Non-finite input gives `"N/A"`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "N/A".to_string();
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(&format!("{:.0}", rounded.abs())))
}

/// Compact INR for large figures: crores, then lakhs, then plain rupees.
/// Zero or non-finite input gives `"N/A"`.
pub fn format_compact_inr(amount: f64) -> String {
    if !amount.is_finite() || amount == 0.0 {
        return "N/A".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    if abs >= CRORE {
        format!("{sign}₹{:.1} Cr", abs / CRORE)
    } else if abs >= LAKH {
        format!("{sign}₹{:.1} L", abs / LAKH)
    } else {
        format_inr(amount)
    }
}

/// NAV with two decimals: `45.678 → "₹45.68"`.
pub fn format_nav(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    format!("₹{value:.2}")
}

/// One decimal with an explicit `+` on gains: `18.6 → "+18.6%"`.
pub fn format_percentage(percentage: f64) -> String {
    if !percentage.is_finite() {
        return "N/A".to_string();
    }
    let sign = if percentage > 0.0 { "+" } else { "" };
    format!("{sign}{percentage:.1}%")
}

/// "1230475" → "12,30,475": last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
