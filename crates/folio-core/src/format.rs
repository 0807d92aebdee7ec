//! Display formatting helpers.

/// Group digits in threes with commas: `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage label, `85` → `"85%"`.
pub fn percent(level: u8) -> String {
    format!("{}%", level.min(100))
}

/// Counter label with a trailing plus, `3` → `"3+"`.
pub fn at_least(n: usize) -> String {
    format!("{}+", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_percent_clamps() {
        assert_eq!(percent(85), "85%");
        assert_eq!(percent(200), "100%");
    }

    #[test]
    fn test_at_least() {
        assert_eq!(at_least(3), "3+");
    }
}
