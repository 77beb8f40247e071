/// Format a day change percentage, with an explicit sign for gains.
pub fn pct_change(change: f32) -> String {
    match change {
        c if c > 0.0 => format!("+{:.2}%", c),
        _ => format!("{:.2}%", change),
    }
}

/// Abbreviate large numbers for compact display, e.g. `1.25m`, `3.4k`.
pub fn abbr_large_numbers(value: f32) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    match abs_value {
        v if v >= 1_000_000_000.0 => format!("{}{:.2}b", sign, v / 1_000_000_000.0),
        v if v >= 1_000_000.0 => format!("{}{:.2}m", sign, v / 1_000_000.0),
        v if v >= 1_000.0 => format!("{}{:.1}k", sign, v / 1_000.0),
        v if v >= 1.0 => format!("{}{:.2}", sign, v),
        _ => format!("{}{:.3}", sign, abs_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_change_signs() {
        assert_eq!(pct_change(2.345), "+2.35%");
        assert_eq!(pct_change(-1.2), "-1.20%");
        assert_eq!(pct_change(0.0), "0.00%");
    }

    #[test]
    fn abbreviations() {
        assert_eq!(abbr_large_numbers(1_250_000.0), "1.25m");
        assert_eq!(abbr_large_numbers(3_400.0), "3.4k");
        assert_eq!(abbr_large_numbers(-2_000_000_000.0), "-2.00b");
        assert_eq!(abbr_large_numbers(12.3456), "12.35");
    }
}
