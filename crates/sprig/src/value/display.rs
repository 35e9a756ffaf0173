//! Display and Debug implementations for Value

use std::fmt;

use super::*;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "Integer({})", n),
            Value::Float(n) => write!(f, "Float({:?})", n),
            Value::String(s) => write!(f, "String({:?})", s.as_str()),
            Value::Char(c) => write!(f, "Char({:?})", c),
            Value::Bool(b) => write!(f, "Bool({})", b),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => f.write_str(&format_scientific(*n)),
            Value::String(s) => f.write_str(s),
            Value::Char(c) => write!(f, "{}", c),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Render a float in scientific notation with six fractional digits and a
/// signed, at least two-digit exponent: `8.000000e+00`, `-1.500000e-03`.
pub fn format_scientific(n: f32) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    // Rust renders the exponent bare (`8.000000e0`); rewrite it.
    let raw = format!("{:.6e}", n);
    match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_integer() {
        assert_eq!(Value::Integer(-25).to_string(), "-25");
    }

    #[test]
    fn test_display_float_scientific() {
        assert_eq!(Value::Float(8.0).to_string(), "8.000000e+00");
        assert_eq!(Value::Float(7.5).to_string(), "7.500000e+00");
        assert_eq!(Value::Float(0.0).to_string(), "0.000000e+00");
        assert_eq!(Value::Float(-0.0015).to_string(), "-1.500000e-03");
        assert_eq!(Value::Float(1.0e10).to_string(), "1.000000e+10");
    }

    #[test]
    fn test_display_float_non_finite() {
        assert_eq!(format_scientific(f32::INFINITY), "+Inf");
        assert_eq!(format_scientific(f32::NEG_INFINITY), "-Inf");
        assert_eq!(format_scientific(f32::NAN), "NaN");
    }

    #[test]
    fn test_display_string_has_no_quotes() {
        assert_eq!(Value::string("hello, world").to_string(), "hello, world");
    }

    #[test]
    fn test_display_char_is_scalar() {
        assert_eq!(Value::Char('a').to_string(), "a");
        assert_eq!(Value::Char('Â').to_string(), "Â");
    }

    #[test]
    fn test_display_bool() {
        assert_eq!(Value::TRUE.to_string(), "true");
        assert_eq!(Value::FALSE.to_string(), "false");
    }

    #[test]
    fn test_debug_names_the_kind() {
        assert_eq!(format!("{:?}", Value::string("go")), "String(\"go\")");
        assert_eq!(format!("{:?}", Value::Float(1.5)), "Float(1.5)");
    }
}
