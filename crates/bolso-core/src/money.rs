//! pt-BR currency rendering.

/// Formats a decimal string as Brazilian currency: `"1234.5"` -> `"R$ 1.234,50"`.
///
/// Unparseable input degrades to `R$ 0,00` instead of failing, matching how
/// the dashboard treats absent data.
pub fn format_brl(value: &str) -> String {
    let parsed: f64 = match value.trim().parse() {
        Ok(v) if f64::is_finite(v) => v,
        _ => 0.0,
    };

    let negative = parsed < 0.0;
    let cents = (parsed.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    format!(
        "{}R$ {},{frac:02}",
        if negative { "-" } else { "" },
        group_thousands(whole)
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
