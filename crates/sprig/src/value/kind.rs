//! Kind tags

use std::fmt;

use super::Value;

/// The closed tag distinguishing runtime value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `int`
    Integer,
    /// `float32`
    FloatingPoint,
    /// `string`
    String,
    /// `rune`
    Character,
    /// `bool`
    Boolean,
}

impl Kind {
    /// Name of the kind as written in a declaration's type position.
    pub fn type_name(self) -> &'static str {
        match self {
            Kind::Integer => "int",
            Kind::FloatingPoint => "float32",
            Kind::String => "string",
            Kind::Character => "rune",
            Kind::Boolean => "bool",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl Value {
    /// The kind tag of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::FloatingPoint,
            Value::String(_) => Kind::String,
            Value::Char(_) => Kind::Character,
            Value::Bool(_) => Kind::Boolean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(Value::Integer(1).kind(), Kind::Integer);
        assert_eq!(Value::Float(1.0).kind(), Kind::FloatingPoint);
        assert_eq!(Value::string("a").kind(), Kind::String);
        assert_eq!(Value::Char('a').kind(), Kind::Character);
        assert_eq!(Value::TRUE.kind(), Kind::Boolean);
    }

    #[test]
    fn test_kind_display_uses_type_names() {
        assert_eq!(Kind::FloatingPoint.to_string(), "float32");
        assert_eq!(Kind::Character.to_string(), "rune");
    }
}
