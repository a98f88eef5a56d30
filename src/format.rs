//! Number formatting for console output.
//!
//! Samples are printed in the `%g` style with 6 significant digits: fixed
//! notation for decimal exponents in `[-4, 6)`, scientific otherwise, and
//! trailing zeros removed in both cases.

/// Significant digits printed for each sample.
const PRECISION: i32 = 6;

/// Formats `x` in `%g` style with 6 significant digits.
///
/// # Examples
/// ```
/// use u_sampling::format::format_general;
/// assert_eq!(format_general(0.34657359027997264), "0.346574");
/// assert_eq!(format_general(100.0), "100");
/// assert_eq!(format_general(1234567.0), "1.23457e+06");
/// assert_eq!(format_general(f64::INFINITY), "inf");
/// ```
pub fn format_general(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_owned();
    }
    if x.is_infinite() {
        return String::from(if x > 0.0 { "inf" } else { "-inf" });
    }
    if x == 0.0 {
        return String::from(if x.is_sign_negative() { "-0" } else { "0" });
    }

    // The exponent after rounding to PRECISION digits picks the notation.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, x);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{x:.decimals$}")).to_owned()
    }
}

/// Strips trailing zeros, and then a trailing point, from a decimal string.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_general(39.14839446162839), "39.1484");
        assert_eq!(format_general(13.330218444630791), "13.3302");
        assert_eq!(format_general(-2.5), "-2.5");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(123456.0), "123456");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_general(0.00001234), "1.234e-05");
        assert_eq!(format_general(-1e20), "-1e+20");
        assert_eq!(format_general(1e-300), "1e-300");
    }

    #[test]
    fn test_rounding_bumps_exponent() {
        assert_eq!(format_general(999999.6), "1e+06");
        assert_eq!(format_general(9.999999), "10");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_general(f64::NAN), "nan");
        assert_eq!(format_general(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(-0.0), "-0");
    }

    #[test]
    fn test_trim_fraction() {
        assert_eq!(trim_fraction("1.500"), "1.5");
        assert_eq!(trim_fraction("2.000"), "2");
        assert_eq!(trim_fraction("100"), "100");
    }
}
