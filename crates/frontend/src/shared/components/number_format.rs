//! Number formatting utilities shared by cards, tables and chart axes

/// Formats a number with a comma thousands separator and the given number
/// of decimal places
///
/// # Examples
///
/// ```
/// use frontend::shared::components::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    // Split off the fractional part before grouping digits
    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Insert a comma every 3 digits, counting from the right
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Formats a monetary amount with a currency prefix and no decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::components::number_format::format_money;
/// assert_eq!(format_money(1234567.89, "$"), "$1,234,568");
/// ```
pub fn format_money(value: f64, currency: &str) -> String {
    if value < 0.0 {
        format!("-{}{}", currency, format_number_with_decimals(-value, 0))
    } else {
        format!("{}{}", currency, format_number_with_decimals(value, 0))
    }
}

/// Formats an integer quantity with a comma thousands separator
///
/// # Examples
///
/// ```
/// use frontend::shared::components::number_format::format_number_int;
/// assert_eq!(format_number_int(1234567.0), "1,234,567");
/// ```
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Shortens a value for axis tick labels: thousands become "k",
/// millions become "M", small values keep at most one decimal
pub fn compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{}M", trim_trailing_zero(format!("{:.1}", value / 1_000_000.0)))
    } else if abs >= 1_000.0 {
        format!("{}k", trim_trailing_zero(format!("{:.1}", value / 1_000.0)))
    } else {
        trim_trailing_zero(format!("{:.1}", value))
    }
}

fn trim_trailing_zero(text: String) -> String {
    match text.strip_suffix(".0") {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Placeholder shown in table cells where a value is absent
pub const NO_VALUE: &str = "\u{2014}";

pub fn money_or_dash(value: Option<f64>, currency: &str) -> String {
    value
        .map(|v| format_money(v, currency))
        .unwrap_or_else(|| NO_VALUE.to_string())
}

pub fn int_or_dash(value: Option<f64>) -> String {
    value
        .map(format_number_int)
        .unwrap_or_else(|| NO_VALUE.to_string())
}

pub fn number_or_dash(value: Option<f64>, decimals: u8) -> String {
    value
        .map(|v| format_number_with_decimals(v, decimals))
        .unwrap_or_else(|| NO_VALUE.to_string())
}

pub fn pct_or_dash(value: Option<f64>, decimals: u8) -> String {
    value
        .map(|v| format!("{}%", format_number_with_decimals(v, decimals)))
        .unwrap_or_else(|| NO_VALUE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56, "$"), "$1,235");
        assert_eq!(format_money(1234567.89, "$"), "$1,234,568");
        assert_eq!(format_money(0.0, "$"), "$0");
        assert_eq!(format_money(-1234.56, "$"), "-$1,235");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1,234");
    }

    #[test]
    fn test_absent_values_render_as_dash() {
        assert_eq!(money_or_dash(None, "$"), "\u{2014}");
        assert_eq!(money_or_dash(Some(1200.0), "$"), "$1,200");
        assert_eq!(pct_or_dash(Some(-10.0), 1), "-10.0%");
        assert_eq!(pct_or_dash(None, 1), "\u{2014}");
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact(228_900.0), "228.9k");
        assert_eq!(compact(1_200_000.0), "1.2M");
        assert_eq!(compact(-12_500.0), "-12.5k");
        assert_eq!(compact(0.0), "0");
        assert_eq!(compact(10.0), "10");
        assert_eq!(compact(4.4), "4.4");
    }
}
