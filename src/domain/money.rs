use std::fmt;

/// Money is represented as integer cents, the minor unit of the ledger's currency.
/// 1 unit = 100 cents, so 50.31 = 5031 cents.
pub type Cents = i64;

/// Convert cents to a major-unit decimal.
/// Example: 5031 -> 50.31, -1299 -> -12.99
pub fn cents_to_units(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

/// Format cents as a human-readable currency string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Format a major-unit total with two decimals.
pub fn format_units(units: f64) -> String {
    format!("{:.2}", units)
}

/// Parse a decimal string into cents.
/// Example: "50.31" -> 5031, "12.5" -> 1250, "80" -> 8000
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (digits, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| ParseCentsError::Overflow)?
    };

    // Pad to two digits, truncate anything past the cent
    let fraction_cents: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| ParseCentsError::InvalidFormat)? * 10,
        _ => fraction[..2]
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(fraction_cents))
        .ok_or(ParseCentsError::Overflow)?;
    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    Overflow,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::Overflow => write!(f, "amount out of range"),
        }
    }
}

impl std::error::Error for ParseCentsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_to_units() {
        assert_eq!(cents_to_units(5031), 50.31);
        assert_eq!(cents_to_units(8000), 80.0);
        assert_eq!(cents_to_units(-1299), -12.99);
        assert_eq!(cents_to_units(0), 0.0);
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(5031), "50.31");
        assert_eq!(format_cents(100), "1.00");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-3500), "-35.00");
        assert_eq!(format_cents(-1), "-0.01");
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(130.31), "130.31");
        assert_eq!(format_units(35.0), "35.00");
        assert_eq!(format_units(0.0), "0.00");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("50.31"), Ok(5031));
        assert_eq!(parse_cents("80"), Ok(8000));
        assert_eq!(parse_cents("12.5"), Ok(1250));
        assert_eq!(parse_cents(".99"), Ok(99));
        assert_eq!(parse_cents("-12.99"), Ok(-1299));
        assert_eq!(parse_cents(" 7. "), Ok(700));
        assert_eq!(parse_cents("100.999"), Ok(10099)); // Truncates
    }

    #[test]
    fn test_parse_cents_invalid() {
        assert_eq!(parse_cents("abc"), Err(ParseCentsError::InvalidFormat));
        assert_eq!(parse_cents("12.34.56"), Err(ParseCentsError::InvalidFormat));
        assert_eq!(parse_cents("-"), Err(ParseCentsError::InvalidFormat));
        assert_eq!(parse_cents("--5"), Err(ParseCentsError::InvalidFormat));
        assert_eq!(parse_cents("-.-5"), Err(ParseCentsError::InvalidFormat));
        assert_eq!(parse_cents("1e5"), Err(ParseCentsError::InvalidFormat));
        assert_eq!(
            parse_cents("99999999999999999999"),
            Err(ParseCentsError::Overflow)
        );
    }
}
