use crate::{stmt::Value, Error, Result};

use std::fmt;

/// Column types understood by the renderer.
///
/// The set is closed: every variant has a fixed SQL spelling and belongs to
/// exactly one [`TypeFamily`], which decides what default values it accepts.
/// Sized variants carry their size in the name because the rendered text is
/// fixed (`VarChar255` always renders as `VARCHAR(255)`).
///
/// The list follows SQLite's type affinity examples
/// (<https://www.sqlite.org/datatype3.html>).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Boolean,

    Int,
    Integer,
    TinyInt,
    SmallInt,
    MediumInt,
    BigInt,
    UnsignedBigInt,
    Int2,
    Int8,

    Character20,
    VarChar255,
    VaryingCharacter255,
    NChar55,
    NativeCharacter70,
    NVarChar100,
    Text,
    Clob,

    Blob,

    Real,
    Double,
    DoublePrecision,
    Float,

    Numeric,
    Decimal10_5,
    Date,
    DateTime,
}

/// Groups of [`Type`]s that share a casting rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    /// `TRUE` / `FALSE`
    Boolean,

    /// Decimal digits from any signed integer width
    SignedInteger,

    /// Decimal digits from any unsigned integer width
    UnsignedInteger,

    /// The string, verbatim
    Text,

    /// Raw bytes; no literal encoding yet
    Binary,

    /// Decimal digits from `f32` or `f64`
    Float,

    /// No literal encoding yet
    DateTime,
}

impl Type {
    /// Every catalog entry, in declaration order.
    pub const ALL: [Type; 27] = [
        Type::Boolean,
        Type::Int,
        Type::Integer,
        Type::TinyInt,
        Type::SmallInt,
        Type::MediumInt,
        Type::BigInt,
        Type::UnsignedBigInt,
        Type::Int2,
        Type::Int8,
        Type::Character20,
        Type::VarChar255,
        Type::VaryingCharacter255,
        Type::NChar55,
        Type::NativeCharacter70,
        Type::NVarChar100,
        Type::Text,
        Type::Clob,
        Type::Blob,
        Type::Real,
        Type::Double,
        Type::DoublePrecision,
        Type::Float,
        Type::Numeric,
        Type::Decimal10_5,
        Type::Date,
        Type::DateTime,
    ];

    /// The type name as it appears in a column definition.
    pub const fn as_sql(self) -> &'static str {
        match self {
            Type::Boolean => "BOOLEAN",

            Type::Int => "INT",
            Type::Integer => "INTEGER",
            Type::TinyInt => "TINYINT",
            Type::SmallInt => "SMALLINT",
            Type::MediumInt => "MEDIUMINT",
            Type::BigInt => "BIGINT",
            Type::UnsignedBigInt => "UNSIGNED BIG INT",
            Type::Int2 => "INT2",
            Type::Int8 => "INT8",

            Type::Character20 => "CHARACTER(20)",
            Type::VarChar255 => "VARCHAR(255)",
            Type::VaryingCharacter255 => "VARYING CHARACTER(255)",
            Type::NChar55 => "NCHAR(55)",
            Type::NativeCharacter70 => "NATIVE CHARACTER(70)",
            Type::NVarChar100 => "NVARCHAR(100)",
            Type::Text => "TEXT",
            Type::Clob => "CLOB",

            Type::Blob => "BLOB",

            Type::Real => "REAL",
            Type::Double => "DOUBLE",
            Type::DoublePrecision => "DOUBLE PRECISION",
            Type::Float => "FLOAT",

            Type::Numeric => "NUMERIC",
            Type::Decimal10_5 => "DECIMAL(10,5)",
            Type::Date => "DATE",
            Type::DateTime => "DATETIME",
        }
    }

    /// The casting rule this type follows.
    ///
    /// `NUMERIC` casts like an integer and `DECIMAL(10,5)` like a float.
    pub const fn family(self) -> TypeFamily {
        match self {
            Type::Boolean => TypeFamily::Boolean,

            Type::Int
            | Type::Integer
            | Type::TinyInt
            | Type::SmallInt
            | Type::MediumInt
            | Type::BigInt
            | Type::Int2
            | Type::Int8
            | Type::Numeric => TypeFamily::SignedInteger,

            Type::UnsignedBigInt => TypeFamily::UnsignedInteger,

            Type::Character20
            | Type::VarChar255
            | Type::VaryingCharacter255
            | Type::NChar55
            | Type::NativeCharacter70
            | Type::NVarChar100
            | Type::Text
            | Type::Clob => TypeFamily::Text,

            Type::Blob => TypeFamily::Binary,

            Type::Real | Type::Double | Type::DoublePrecision | Type::Float | Type::Decimal10_5 => {
                TypeFamily::Float
            }

            Type::Date | Type::DateTime => TypeFamily::DateTime,
        }
    }

    /// Converts `value` into the SQL literal used after `DEFAULT`.
    ///
    /// Fails with a type conversion error when the value's shape does not
    /// belong to this type's family, or when a float is infinite or NaN.
    /// Strings are not quoted or escaped.
    pub fn cast(self, value: &Value) -> Result<String> {
        match (self.family(), value) {
            (TypeFamily::Boolean, Value::Bool(true)) => Ok("TRUE".to_string()),
            (TypeFamily::Boolean, Value::Bool(false)) => Ok("FALSE".to_string()),
            (TypeFamily::SignedInteger, value) if value.is_signed_integer() => {
                Ok(value.to_string())
            }
            (TypeFamily::UnsignedInteger, value) if value.is_unsigned_integer() => {
                Ok(value.to_string())
            }
            (TypeFamily::Text, Value::String(value)) => Ok(value.clone()),
            // TODO: encode the bytes as a blob literal (`X'..'`) instead of
            // the type name.
            (TypeFamily::Binary, Value::Bytes(_)) => Ok("BLOB".to_string()),
            // `inf` and `NaN` have no SQL literal
            (TypeFamily::Float, Value::F32(v)) if v.is_finite() => Ok(v.to_string()),
            (TypeFamily::Float, Value::F64(v)) if v.is_finite() => Ok(v.to_string()),
            (TypeFamily::DateTime, _) => Err(Error::unsupported_feature(format!(
                "{} default values",
                self.as_sql()
            ))),
            (_, value) => Err(Error::type_conversion(value, self.as_sql())),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_distinct_name() {
        let mut names: Vec<_> = Type::ALL.iter().map(|ty| ty.as_sql()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Type::ALL.len());
    }

    #[test]
    fn display_matches_as_sql() {
        for ty in Type::ALL {
            assert_eq!(ty.to_string(), ty.as_sql());
        }
    }

    #[test]
    fn numeric_and_decimal_families() {
        assert_eq!(Type::Numeric.family(), TypeFamily::SignedInteger);
        assert_eq!(Type::Decimal10_5.family(), TypeFamily::Float);
        assert_eq!(Type::UnsignedBigInt.family(), TypeFamily::UnsignedInteger);
    }
}
