//! pt-BR number and currency formatting for display payloads.
//!
//! These are display helpers, not a money type: amounts stay `f64`
//! end-to-end and rounding happens only at formatting time.

/// Groups the digits of `n` in threes with "." separators ("1.234.567").
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Formats an amount as BRL with two decimal places: "R$ 1.234,56".
pub fn brl(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    // Round at cent precision before splitting so 51.005 -> "51,01", not "51,00".
    let cents = (amount.abs() * 100.0).round() as u64;
    format!("R$ {sign}{},{:02}", group_thousands(cents / 100), cents % 100)
}

/// Formats an amount as BRL rounded to whole units: "R$ 1.000.000".
pub fn brl_whole(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("R$ {sign}{}", group_thousands(amount.abs().round() as u64))
}

#[cfg(test)]
mod tests {
    use super::{brl, brl_whole, group_thousands};

    #[test]
    fn groups_across_magnitudes() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1.000");
        assert_eq!(group_thousands(12_345), "12.345");
        assert_eq!(group_thousands(1_234_567), "1.234.567");
    }

    #[test]
    fn brl_keeps_two_decimals() {
        assert_eq!(brl(0.0), "R$ 0,00");
        assert_eq!(brl(51.0), "R$ 51,00");
        assert_eq!(brl(1_234.56), "R$ 1.234,56");
        assert_eq!(brl(0.5), "R$ 0,50");
    }

    #[test]
    fn brl_rounds_at_cent_precision() {
        assert_eq!(brl(2.005), "R$ 2,01");
        assert_eq!(brl(2.004), "R$ 2,00");
    }

    #[test]
    fn brl_whole_drops_decimals() {
        assert_eq!(brl_whole(1_000_000.0), "R$ 1.000.000");
        assert_eq!(brl_whole(999.6), "R$ 1.000");
    }

    #[test]
    fn negative_amounts_carry_sign() {
        assert_eq!(brl(-1_234.56), "R$ -1.234,56");
        assert_eq!(brl_whole(-1_500.0), "R$ -1.500");
    }
}
