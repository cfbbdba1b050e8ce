use bytes::Bytes;
use serde_json::Number;

use crate::config::DecodeConfig;
use crate::error::{DecodeError, Result};
use crate::integer::Integer;
use crate::value::{Record, Value};

/// Decode JSON text into a [`Value`].
///
/// - Integral numbers of any width become [`Value::Integer`]; others become [`Value::Float`].
/// - `0x` strings become [`Value::Bytes`] unless `hex_strings_as_bytes` is off.
/// - Everything else maps structurally.
pub fn decode(input: &str, config: &DecodeConfig) -> Result<Value> {
    if input.len() > config.max_input_size {
        return Err(DecodeError::InputTooLarge {
            size: input.len(),
            max: config.max_input_size,
        });
    }

    let json: serde_json::Value = serde_json::from_str(input)?;
    convert(json, config, 0)
}

fn convert(json: serde_json::Value, config: &DecodeConfig, depth: usize) -> Result<Value> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(value) => Ok(Value::Bool(value)),
        serde_json::Value::Number(number) => convert_number(&number, config),
        serde_json::Value::String(text) => convert_string(text, config),
        serde_json::Value::Array(items) => {
            check_depth(depth, config)?;
            items
                .into_iter()
                .map(|item| convert(item, config, depth + 1))
                .collect::<Result<Vec<_>>>()
                .map(Value::List)
        }
        serde_json::Value::Object(map) => {
            check_depth(depth, config)?;
            map.into_iter()
                .map(|(key, item)| Ok((key, convert(item, config, depth + 1)?)))
                .collect::<Result<Record>>()
                .map(Value::Map)
        }
    }
}

fn check_depth(depth: usize, config: &DecodeConfig) -> Result<()> {
    if depth >= config.max_depth {
        return Err(DecodeError::TooDeep {
            max: config.max_depth,
        });
    }
    Ok(())
}

fn convert_number(number: &Number, config: &DecodeConfig) -> Result<Value> {
    if let Some(value) = number.as_u64() {
        return Ok(Value::from(value));
    }
    if let Some(value) = number.as_i64() {
        return Ok(Value::from(value));
    }

    // With arbitrary precision the literal text is preserved verbatim.
    let literal = number.to_string();
    let is_integral = !literal.contains(['.', 'e', 'E']);
    if is_integral {
        let digits = literal.trim_start_matches('-').len();
        if digits > config.max_integer_digits {
            return Err(DecodeError::IntegerTooLong {
                digits,
                max: config.max_integer_digits,
            });
        }
        return literal
            .parse::<Integer>()
            .map(Value::Integer)
            .map_err(|_| DecodeError::InvalidNumber(literal));
    }

    number
        .as_f64()
        .map(Value::Float)
        .ok_or(DecodeError::InvalidNumber(literal))
}

fn convert_string(text: String, config: &DecodeConfig) -> Result<Value> {
    if !config.hex_strings_as_bytes {
        return Ok(Value::Text(text));
    }

    let digits = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => digits,
        None => return Ok(Value::Text(text)),
    };

    match hex::decode(digits) {
        Ok(raw) => Ok(Value::Bytes(Bytes::from(raw))),
        Err(source) => Err(DecodeError::InvalidHex { text, source }),
    }
}
