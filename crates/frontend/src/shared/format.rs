//! Number formatting for dashboard display

/// Format a value as US currency: "$1,234.56"
pub fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let int_part = cents / 100;
    let frac = cents % 100;
    let formatted = format!("${}.{:02}", format_thousands(int_part), frac);
    if negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Format an integer with thousands separators: "1,234,567"
pub fn format_int(value: u64) -> String {
    format_thousands(value)
}

fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
