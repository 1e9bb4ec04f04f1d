//! Currency formatting helpers.
//!
//! Prices are carried as `f64` reais throughout the domain; these helpers
//! only decide how they are printed.

/// Formats a value the way chat replies show it: `R$ 1350.00`.
pub fn format_reais(value: f64) -> String {
    format!("R$ {:.2}", value)
}

/// Formats a value with Brazilian separators: `1.234,56`.
pub fn format_brl(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{},{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reais_uses_two_decimals() {
        assert_eq!(format_reais(1350.0), "R$ 1350.00");
        assert_eq!(format_reais(0.126), "R$ 0.13");
    }

    #[test]
    fn brl_groups_thousands() {
        assert_eq!(format_brl(1234.56), "1.234,56");
        assert_eq!(format_brl(1_000_000.0), "1.000.000,00");
        assert_eq!(format_brl(999.9), "999,90");
        assert_eq!(format_brl(0.0), "0,00");
    }

    #[test]
    fn brl_keeps_sign() {
        assert_eq!(format_brl(-1500.5), "-1.500,50");
    }
}
