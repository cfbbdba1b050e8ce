use ethshape_value::Value;

use crate::error::Result;
use crate::primitives::validate_32_byte_string;
use crate::registry::{RecordSchema, BLOCK_SCHEMA, LOG_ENTRY_SCHEMA};
use crate::structural::{expect_record, validate_has_required_keys, validate_no_extra_keys};

/// Validate a record against a schema.
///
/// Order of checks: the value is a mapping, it has no undeclared keys, it has
/// every declared key, then each field in declared order. Only the first
/// failure is reported.
pub fn validate_record(value: &Value, schema: &RecordSchema) -> Result<()> {
    let record = expect_record(value)?;

    validate_no_extra_keys(record, schema.keys())?;
    validate_has_required_keys(record, schema.keys())?;

    for field in schema.fields() {
        // Presence was checked above; a missing key here would be a schema bug.
        if let Some(item) = record.get(field.name()) {
            field.check(item)?;
        }
    }
    Ok(())
}

/// Validate a block record (18 declared fields).
pub fn validate_block(value: &Value) -> Result<()> {
    validate_record(value, &BLOCK_SCHEMA)
}

/// Validate a log entry record (9 declared fields).
pub fn validate_log_entry(value: &Value) -> Result<()> {
    validate_record(value, &LOG_ENTRY_SCHEMA)
}

/// Validate a standalone block hash: a 32-byte string.
pub fn validate_block_hash(value: &Value) -> Result<()> {
    validate_32_byte_string(value)
}
