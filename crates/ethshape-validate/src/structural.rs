//! Record-shape checks, independent of what the fields mean.

use std::collections::BTreeSet;

use ethshape_value::{Record, Value};

use crate::error::{Result, ValidationError};

pub(crate) fn expect_record(value: &Value) -> Result<&Record> {
    value.as_record().ok_or_else(|| {
        ValidationError::new(format!(
            "Value must be a dictionary. Got: {value} of type {}",
            value.kind()
        ))
    })
}

/// Fails unless the value is a mapping.
pub fn validate_dict(value: &Value) -> Result<()> {
    expect_record(value).map(|_| ())
}

/// Fails if `record` has any key outside `allowed_keys`.
pub fn validate_no_extra_keys(record: &Record, allowed_keys: &BTreeSet<&str>) -> Result<()> {
    let extra: Vec<&str> = record
        .keys()
        .map(String::as_str)
        .filter(|key| !allowed_keys.contains(key))
        .collect();

    if !extra.is_empty() {
        return Err(ValidationError::new(format!(
            "Only the keys '{}' are allowed. Got extra keys: '{}'",
            join(allowed_keys.iter().copied()),
            join(extra.into_iter()),
        )));
    }
    Ok(())
}

/// Fails if any key in `required_keys` is absent from `record`.
pub fn validate_has_required_keys(record: &Record, required_keys: &BTreeSet<&str>) -> Result<()> {
    let missing: Vec<&str> = required_keys
        .iter()
        .copied()
        .filter(|key| !record.contains_key(*key))
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::new(format!(
            "Value must contain all of the following keys: '{}'. Missing keys: '{}'",
            join(required_keys.iter().copied()),
            join(missing.into_iter()),
        )));
    }
    Ok(())
}

fn join<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    keys.collect::<Vec<_>>().join(", ")
}
