/// Format whole naira with thousands separators, e.g. `₦4,200`.
pub fn format_naira(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push('₦');
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_naira;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_naira(0), "₦0");
        assert_eq!(format_naira(500), "₦500");
        assert_eq!(format_naira(4200), "₦4,200");
        assert_eq!(format_naira(45_200), "₦45,200");
        assert_eq!(format_naira(1_234_567), "₦1,234,567");
    }
}
