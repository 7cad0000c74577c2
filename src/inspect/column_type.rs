use std::fmt;
use std::str::FromStr;

use crate::codec::{
    Date, Date32, DateTime, DateTime64, Enum8, Enum16, FixedWidth, Precision,
};

use super::error::InspectError;

/// Fixed-width column types addressable by their wire-protocol name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    UInt8,
    Int8,
    UInt16,
    Int16,
    UInt32,
    Int32,
    UInt64,
    Int64,
    Float32,
    Float64,
    Enum8,
    Enum16,
    Date,
    Date32,
    DateTime,
    DateTime64(Precision),
}

impl ColumnType {
    pub fn width(self) -> usize {
        match self {
            ColumnType::UInt8 => <u8 as FixedWidth>::WIDTH,
            ColumnType::Int8 => <i8 as FixedWidth>::WIDTH,
            ColumnType::UInt16 => <u16 as FixedWidth>::WIDTH,
            ColumnType::Int16 => <i16 as FixedWidth>::WIDTH,
            ColumnType::UInt32 => <u32 as FixedWidth>::WIDTH,
            ColumnType::Int32 => <i32 as FixedWidth>::WIDTH,
            ColumnType::UInt64 => <u64 as FixedWidth>::WIDTH,
            ColumnType::Int64 => <i64 as FixedWidth>::WIDTH,
            ColumnType::Float32 => <f32 as FixedWidth>::WIDTH,
            ColumnType::Float64 => <f64 as FixedWidth>::WIDTH,
            ColumnType::Enum8 => Enum8::WIDTH,
            ColumnType::Enum16 => Enum16::WIDTH,
            ColumnType::Date => Date::WIDTH,
            ColumnType::Date32 => Date32::WIDTH,
            ColumnType::DateTime => DateTime::WIDTH,
            ColumnType::DateTime64(_) => DateTime64::WIDTH,
        }
    }

    /// Bare type name, without parameters.
    pub fn name(self) -> &'static str {
        match self {
            ColumnType::UInt8 => <u8 as FixedWidth>::TYPE_NAME,
            ColumnType::Int8 => <i8 as FixedWidth>::TYPE_NAME,
            ColumnType::UInt16 => <u16 as FixedWidth>::TYPE_NAME,
            ColumnType::Int16 => <i16 as FixedWidth>::TYPE_NAME,
            ColumnType::UInt32 => <u32 as FixedWidth>::TYPE_NAME,
            ColumnType::Int32 => <i32 as FixedWidth>::TYPE_NAME,
            ColumnType::UInt64 => <u64 as FixedWidth>::TYPE_NAME,
            ColumnType::Int64 => <i64 as FixedWidth>::TYPE_NAME,
            ColumnType::Float32 => <f32 as FixedWidth>::TYPE_NAME,
            ColumnType::Float64 => <f64 as FixedWidth>::TYPE_NAME,
            ColumnType::Enum8 => Enum8::TYPE_NAME,
            ColumnType::Enum16 => Enum16::TYPE_NAME,
            ColumnType::Date => Date::TYPE_NAME,
            ColumnType::Date32 => Date32::TYPE_NAME,
            ColumnType::DateTime => DateTime::TYPE_NAME,
            ColumnType::DateTime64(_) => DateTime64::TYPE_NAME,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::DateTime64(p) => write!(f, "DateTime64({})", p.get()),
            other => f.write_str(other.name()),
        }
    }
}

/// Splits `Name(args)` into its name and the raw argument list.
fn split_params(s: &str) -> Result<(&str, Option<&str>), InspectError> {
    match s.find('(') {
        None => Ok((s, None)),
        Some(open) => {
            let args = s[open + 1..]
                .strip_suffix(')')
                .ok_or_else(|| InspectError::UnknownType(s.to_string()))?;
            Ok((s[..open].trim_end(), Some(args.trim())))
        }
    }
}

impl FromStr for ColumnType {
    type Err = InspectError;

    /// Enum value lists and DateTime time zones are accepted and ignored;
    /// they do not change the wire layout.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let unknown = || InspectError::UnknownType(s.to_string());
        let (name, args) = split_params(s)?;

        let ty = match (name, args) {
            ("UInt8", None) => ColumnType::UInt8,
            ("Int8", None) => ColumnType::Int8,
            ("UInt16", None) => ColumnType::UInt16,
            ("Int16", None) => ColumnType::Int16,
            ("UInt32", None) => ColumnType::UInt32,
            ("Int32", None) => ColumnType::Int32,
            ("UInt64", None) => ColumnType::UInt64,
            ("Int64", None) => ColumnType::Int64,
            ("Float32", None) => ColumnType::Float32,
            ("Float64", None) => ColumnType::Float64,
            ("Enum8", _) => ColumnType::Enum8,
            ("Enum16", _) => ColumnType::Enum16,
            ("Date", None) => ColumnType::Date,
            ("Date32", None) => ColumnType::Date32,
            ("DateTime", _) => ColumnType::DateTime,
            ("DateTime64", Some(args)) => {
                let precision = args.split(',').next().unwrap_or("").trim();
                let precision = precision
                    .parse::<u8>()
                    .ok()
                    .and_then(Precision::new)
                    .ok_or_else(unknown)?;
                ColumnType::DateTime64(precision)
            }
            _ => return Err(unknown()),
        };
        Ok(ty)
    }
}
