//! Dollar formatting for donation totals and funding figures.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// `$150.00` style: two decimals, no grouping.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

/// `$35,000` style: whole dollars grouped by thousands.
#[must_use]
pub fn format_whole_usd(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
