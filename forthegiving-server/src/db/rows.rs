//! Dynamic row-to-JSON mapping
//!
//! The hospital and donor tables are owned by an external schema, so reads
//! never assume a column layout. Each `MySqlRow` is converted to a JSON
//! object keyed by column name, dispatching on the column's MySQL type name.
//!
//! Encoding choices:
//! - DECIMAL is rendered as a string to avoid silent precision loss
//! - DATE/TIME/DATETIME use their SQL text form, TIMESTAMP is RFC 3339
//! - binary columns are base64
//! - SQL NULL maps to JSON null

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use sqlx::mysql::MySqlRow;
use sqlx::{Column, Row, TypeInfo};

use super::DbError;

/// Convert result rows to a JSON array of objects, column names as keys.
pub fn rows_to_json(rows: &[MySqlRow]) -> Result<Vec<Value>, DbError> {
    rows.iter()
        .map(|row| row_to_object(row).map(Value::Object))
        .collect()
}

/// Convert a single row to a JSON object keyed by column name.
pub fn row_to_object(row: &MySqlRow) -> Result<Map<String, Value>, DbError> {
    let mut object = Map::new();

    for (idx, column) in row.columns().iter().enumerate() {
        let name = column.name();
        let type_name = column.type_info().name();

        let value = match type_name {
            "NULL" => Value::Null,

            "BOOLEAN" => scalar(get::<bool>(row, idx, name)?),

            "TINYINT" => scalar(get::<i8>(row, idx, name)?),
            "SMALLINT" => scalar(get::<i16>(row, idx, name)?),
            "MEDIUMINT" | "INT" => scalar(get::<i32>(row, idx, name)?),
            "BIGINT" => scalar(get::<i64>(row, idx, name)?),

            "TINYINT UNSIGNED" => scalar(get::<u8>(row, idx, name)?),
            "SMALLINT UNSIGNED" | "YEAR" => scalar(get::<u16>(row, idx, name)?),
            "MEDIUMINT UNSIGNED" | "INT UNSIGNED" => scalar(get::<u32>(row, idx, name)?),
            "BIGINT UNSIGNED" => scalar(get::<u64>(row, idx, name)?),

            "FLOAT" => scalar(get::<f32>(row, idx, name)?),
            "DOUBLE" => scalar(get::<f64>(row, idx, name)?),

            "DECIMAL" => text(get::<Decimal>(row, idx, name)?),

            "CHAR" | "VARCHAR" | "TEXT" | "TINYTEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM"
            | "SET" => scalar(get::<String>(row, idx, name)?),

            "DATE" => text(get::<NaiveDate>(row, idx, name)?),
            "TIME" => text(get::<NaiveTime>(row, idx, name)?),
            "DATETIME" => text(get::<NaiveDateTime>(row, idx, name)?),
            "TIMESTAMP" => get::<DateTime<Utc>>(row, idx, name)?
                .map(|v| Value::String(v.to_rfc3339()))
                .unwrap_or(Value::Null),

            "JSON" => get::<Value>(row, idx, name)?.unwrap_or(Value::Null),

            "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => {
                get::<Vec<u8>>(row, idx, name)?
                    .map(|v| Value::String(BASE64.encode(v)))
                    .unwrap_or(Value::Null)
            }

            // Last resort for exotic types (BIT, GEOMETRY, ...): take the
            // string form if the driver offers one.
            other => match get::<String>(row, idx, name) {
                Ok(v) => scalar(v),
                Err(_) => {
                    return Err(DbError::UnsupportedType {
                        column: name.to_owned(),
                        type_name: other.to_owned(),
                    })
                }
            },
        };

        object.insert(name.to_owned(), value);
    }

    Ok(object)
}

fn get<'r, T>(row: &'r MySqlRow, idx: usize, column: &str) -> Result<Option<T>, DbError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(idx).map_err(|source| DbError::Decode {
        column: column.to_owned(),
        source,
    })
}

fn scalar<T: Into<Value>>(value: Option<T>) -> Value {
    value.map(Into::into).unwrap_or(Value::Null)
}

fn text<T: ToString>(value: Option<T>) -> Value {
    value
        .map(|v| Value::String(v.to_string()))
        .unwrap_or(Value::Null)
}
