//! Atomic checks on scalar and byte values.

use ethshape_value::{Integer, Value};

use crate::error::{Result, ValidationError};

/// Width of a logs bloom filter in bits.
pub const LOGS_BLOOM_BITS: usize = 2048;

const HASH_LENGTH: usize = 32;
const NONCE_LENGTH: usize = 8;
const ADDRESS_LENGTH: usize = 20;

fn expect_bytes(value: &Value) -> Result<&[u8]> {
    match value {
        Value::Bytes(raw) => Ok(raw.as_ref()),
        other => Err(ValidationError::new(format!(
            "Value must be a byte string. Got: {other} of type {}",
            other.kind()
        ))),
    }
}

fn expect_length(value: &Value, expected: usize) -> Result<()> {
    let raw = expect_bytes(value)?;
    if raw.len() != expected {
        return Err(ValidationError::new(format!(
            "Must be of length {expected}.  Got: {value} of length {}",
            raw.len()
        )));
    }
    Ok(())
}

fn expect_positive_integer(value: &Value) -> Result<&Integer> {
    match value {
        Value::Integer(integer) if !integer.is_negative() => Ok(integer),
        other => Err(ValidationError::new(format!(
            "Value must be a positive integer. Got: {other} of type {}",
            other.kind()
        ))),
    }
}

/// Fails unless the value is a byte string.
pub fn validate_bytes(value: &Value) -> Result<()> {
    expect_bytes(value).map(|_| ())
}

/// Fails unless the value is a byte string of exactly 32 bytes.
///
/// Used for hashes, roots and extra data.
pub fn validate_32_byte_string(value: &Value) -> Result<()> {
    expect_length(value, HASH_LENGTH)
}

/// Fails unless the value is a byte string of exactly 8 bytes.
pub fn validate_nonce(value: &Value) -> Result<()> {
    expect_length(value, NONCE_LENGTH)
}

/// Fails unless the value is an integer `>= 0`. Booleans and floats are not integers.
pub fn validate_positive_integer(value: &Value) -> Result<()> {
    expect_positive_integer(value).map(|_| ())
}

/// Fails unless the value is a non-negative integer no wider than 2048 bits.
pub fn validate_logs_bloom(value: &Value) -> Result<()> {
    let integer = expect_positive_integer(value)?;
    if integer.bits() > LOGS_BLOOM_BITS {
        return Err(ValidationError::new(format!(
            "Value exceeds {LOGS_BLOOM_BITS} bit integer size: got {} bits",
            integer.bits()
        )));
    }
    Ok(())
}

/// Fails unless the value is a 20-byte address in binary form.
///
/// Text forms (hex, checksummed) are not canonical at this layer.
pub fn validate_canonical_address(value: &Value) -> Result<()> {
    let raw = expect_bytes(value)?;
    if raw.len() != ADDRESS_LENGTH {
        return Err(ValidationError::new(format!(
            "Value must be a {ADDRESS_LENGTH} byte string. Got: {value} of length {}",
            raw.len()
        )));
    }
    Ok(())
}

/// Fails unless the value is the literal text `"pending"` or `"mined"`.
pub fn validate_log_entry_type(value: &Value) -> Result<()> {
    match value.as_text() {
        Some("pending" | "mined") => Ok(()),
        _ => Err(ValidationError::new(format!(
            "Log entry type must be one of 'pending' or 'mined'. Got: {value}"
        ))),
    }
}

/// Fails unless the value is a sequence whose every item is a 32-byte string.
pub fn validate_log_entry_topics(value: &Value) -> Result<()> {
    let topics = value.as_list().ok_or_else(|| {
        ValidationError::new(format!(
            "Log entry topics must be a sequence. Got: {value} of type {}",
            value.kind()
        ))
    })?;
    topics.iter().try_for_each(validate_32_byte_string)
}

/// Accepts any value.
pub(crate) fn validate_unchecked(_value: &Value) -> Result<()> {
    Ok(())
}
