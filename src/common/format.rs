/// Group digits in threes with commas, e.g. 1234567 -> "1,234,567".
pub(crate) fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(',') }
        out.push(ch);
    }
    out
}

/// Format a fractional share as a percentage with one decimal, e.g. 0.4321 -> "43.2%".
pub(crate) fn format_share(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}
