use chrono::{NaiveDate, SecondsFormat, Utc};
use serde_json::Value;

use crate::codec::{
    Buffer, CodecError, Date, Date32, DateTime, DateTime64, Enum8, Enum16, FixedWidth,
    FixedWidthCodec, Precision, Reader,
};

use super::column_type::ColumnType;
use super::error::InspectError;

/// Decodes `rows` values of `ty` into JSON. Integers and enum codes become
/// numbers, dates become ISO-8601 strings, non-finite floats become null.
pub fn decode_json(
    ty: ColumnType,
    reader: &mut Reader<'_>,
    rows: usize,
) -> Result<Vec<Value>, InspectError> {
    let values = match ty {
        ColumnType::UInt8 => map_rows::<u8>(reader, rows, Value::from)?,
        ColumnType::Int8 => map_rows::<i8>(reader, rows, Value::from)?,
        ColumnType::UInt16 => map_rows::<u16>(reader, rows, Value::from)?,
        ColumnType::Int16 => map_rows::<i16>(reader, rows, Value::from)?,
        ColumnType::UInt32 => map_rows::<u32>(reader, rows, Value::from)?,
        ColumnType::Int32 => map_rows::<i32>(reader, rows, Value::from)?,
        ColumnType::UInt64 => map_rows::<u64>(reader, rows, Value::from)?,
        ColumnType::Int64 => map_rows::<i64>(reader, rows, Value::from)?,
        ColumnType::Float32 => map_rows::<f32>(reader, rows, Value::from)?,
        ColumnType::Float64 => map_rows::<f64>(reader, rows, Value::from)?,
        ColumnType::Enum8 => map_rows::<Enum8>(reader, rows, |v| Value::from(v.0))?,
        ColumnType::Enum16 => map_rows::<Enum16>(reader, rows, |v| Value::from(v.0))?,
        ColumnType::Date => map_rows::<Date>(reader, rows, |v| {
            date_value(v.to_naive_date(), i64::from(v.0))
        })?,
        ColumnType::Date32 => map_rows::<Date32>(reader, rows, |v| {
            date_value(v.to_naive_date(), i64::from(v.0))
        })?,
        ColumnType::DateTime => map_rows::<DateTime>(reader, rows, |v| {
            datetime_value(v.to_utc(), SecondsFormat::Secs, i64::from(v.0))
        })?,
        ColumnType::DateTime64(p) => map_rows::<DateTime64>(reader, rows, |v| {
            datetime_value(v.to_utc(p), seconds_format(p), v.0)
        })?,
    };
    Ok(values)
}

/// Encodes JSON values as a `ty` column. Every value is validated before
/// anything is written, so `buffer` is untouched on error.
///
/// Integer kinds take JSON integers in range. Date kinds also take
/// `YYYY-MM-DD` (dates) or RFC 3339 (date-times) strings.
pub fn encode_json(
    ty: ColumnType,
    values: &[Value],
    buffer: &mut Buffer,
) -> Result<(), InspectError> {
    match ty {
        ColumnType::UInt8 => encode_rows(values, buffer, int_cell::<u8>),
        ColumnType::Int8 => encode_rows(values, buffer, int_cell::<i8>),
        ColumnType::UInt16 => encode_rows(values, buffer, int_cell::<u16>),
        ColumnType::Int16 => encode_rows(values, buffer, int_cell::<i16>),
        ColumnType::UInt32 => encode_rows(values, buffer, int_cell::<u32>),
        ColumnType::Int32 => encode_rows(values, buffer, int_cell::<i32>),
        ColumnType::UInt64 => encode_rows(values, buffer, int_cell::<u64>),
        ColumnType::Int64 => encode_rows(values, buffer, int_cell::<i64>),
        ColumnType::Float32 => encode_rows(values, buffer, f32_cell),
        ColumnType::Float64 => encode_rows(values, buffer, float_cell),
        ColumnType::Enum8 => encode_rows(values, buffer, |v| int_cell::<i8>(v).map(Enum8)),
        ColumnType::Enum16 => encode_rows(values, buffer, |v| int_cell::<i16>(v).map(Enum16)),
        ColumnType::Date => encode_rows(values, buffer, |v| match v {
            Value::String(s) => Date::from_naive_date(parse_date(s)?)
                .ok_or_else(|| format!("{s} is outside the Date range")),
            other => int_cell::<u16>(other).map(Date),
        }),
        ColumnType::Date32 => encode_rows(values, buffer, |v| match v {
            Value::String(s) => Date32::from_naive_date(parse_date(s)?)
                .ok_or_else(|| format!("{s} is outside the Date32 range")),
            other => int_cell::<i32>(other).map(Date32),
        }),
        ColumnType::DateTime => encode_rows(values, buffer, |v| match v {
            Value::String(s) => DateTime::from_utc(parse_datetime(s)?)
                .ok_or_else(|| format!("{s} is outside the DateTime range")),
            other => int_cell::<u32>(other).map(DateTime),
        }),
        ColumnType::DateTime64(p) => encode_rows(values, buffer, |v| match v {
            Value::String(s) => DateTime64::from_utc(parse_datetime(s)?, p)
                .ok_or_else(|| format!("{s} is outside the DateTime64 range")),
            other => int_cell::<i64>(other).map(DateTime64),
        }),
    }
}

fn map_rows<T: FixedWidth>(
    reader: &mut Reader<'_>,
    rows: usize,
    f: impl Fn(T) -> Value,
) -> Result<Vec<Value>, CodecError> {
    Ok(FixedWidthCodec::<T>::decode(reader, rows)?
        .into_iter()
        .map(f)
        .collect())
}

fn encode_rows<T: FixedWidth>(
    values: &[Value],
    buffer: &mut Buffer,
    convert: impl Fn(&Value) -> Result<T, String>,
) -> Result<(), InspectError> {
    let mut column = Vec::with_capacity(values.len());
    for (row, v) in values.iter().enumerate() {
        let cell = convert(v).map_err(|reason| InspectError::InvalidValue {
            row,
            column: T::TYPE_NAME,
            reason,
        })?;
        column.push(cell);
    }
    FixedWidthCodec::<T>::encode(&column, buffer);
    Ok(())
}

fn int_cell<T: TryFrom<i128>>(v: &Value) -> Result<T, String> {
    let n = v
        .as_i64()
        .map(i128::from)
        .or_else(|| v.as_u64().map(i128::from))
        .ok_or_else(|| format!("expected an integer, got {v}"))?;
    T::try_from(n).map_err(|_| format!("{n} is out of range"))
}

fn float_cell(v: &Value) -> Result<f64, String> {
    v.as_f64()
        .ok_or_else(|| format!("expected a number, got {v}"))
}

/// Finite numbers that would overflow to infinity are rejected.
fn f32_cell(v: &Value) -> Result<f32, String> {
    let f = float_cell(v)?;
    let narrowed = f as f32;
    if f.is_finite() && !narrowed.is_finite() {
        return Err(format!("{f} is out of range"));
    }
    Ok(narrowed)
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("bad date {s:?}: {e}"))
}

fn parse_datetime(s: &str) -> Result<chrono::DateTime<Utc>, String> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("bad date-time {s:?}: {e}"))
}

fn date_value(date: Option<NaiveDate>, raw: i64) -> Value {
    match date {
        Some(d) => Value::String(d.format("%Y-%m-%d").to_string()),
        None => Value::from(raw),
    }
}

fn datetime_value(dt: Option<chrono::DateTime<Utc>>, format: SecondsFormat, raw: i64) -> Value {
    match dt {
        Some(dt) => Value::String(dt.to_rfc3339_opts(format, true)),
        None => Value::from(raw),
    }
}

fn seconds_format(p: Precision) -> SecondsFormat {
    match p.get() {
        0 => SecondsFormat::Secs,
        1..=3 => SecondsFormat::Millis,
        4..=6 => SecondsFormat::Micros,
        _ => SecondsFormat::Nanos,
    }
}
