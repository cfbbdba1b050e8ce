use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use ethshape_value::Value;

use crate::error::{Result, UnknownRecordKind};
use crate::primitives::{
    validate_32_byte_string, validate_bytes, validate_canonical_address,
    validate_log_entry_topics, validate_log_entry_type, validate_logs_bloom, validate_nonce,
    validate_positive_integer, validate_unchecked,
};
use crate::validator::validate_record;

/// A boxed field validator.
pub type Validator = Box<dyn Fn(&Value) -> Result<()> + Send + Sync>;

/// Wrap a validator so that a null value passes without being checked.
///
/// Any other value is handed to `validator` unchanged.
pub fn if_not_null<F>(validator: F) -> impl Fn(&Value) -> Result<()> + Send + Sync
where
    F: Fn(&Value) -> Result<()> + Send + Sync,
{
    move |value: &Value| {
        if value.is_null() {
            Ok(())
        } else {
            validator(value)
        }
    }
}

/// One declared field of a record schema.
pub struct FieldRule {
    name: &'static str,
    rule: &'static str,
    validator: Validator,
}

impl FieldRule {
    /// Declare a field together with a short description of its rule.
    pub fn new<F>(name: &'static str, rule: &'static str, validator: F) -> Self
    where
        F: Fn(&Value) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            name,
            rule,
            validator: Box::new(validator),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable rule, e.g. `"32-byte string"`.
    pub fn rule(&self) -> &'static str {
        self.rule
    }

    /// Run this field's validator on a value.
    pub fn check(&self, value: &Value) -> Result<()> {
        (self.validator)(value)
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("name", &self.name)
            .field("rule", &self.rule)
            .finish_non_exhaustive()
    }
}

/// The full set of declared fields for one record kind.
///
/// Field order is the order in which fields are validated.
#[derive(Debug)]
pub struct RecordSchema {
    kind: RecordKind,
    fields: Vec<FieldRule>,
    keys: BTreeSet<&'static str>,
}

impl RecordSchema {
    pub fn new(kind: RecordKind, fields: Vec<FieldRule>) -> Self {
        let keys = fields.iter().map(FieldRule::name).collect();
        Self { kind, fields, keys }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Declared fields, in validation order.
    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    /// Declared field names as a set.
    pub fn keys(&self) -> &BTreeSet<&'static str> {
        &self.keys
    }

    /// Look up a declared field by name.
    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|field| field.name == name)
    }
}

const POSITIVE_INTEGER: &str = "positive integer";
const BYTES_32: &str = "32-byte string";

/// Block schema: 18 fields.
///
/// `transactions` and `uncles` must be present but their values are not checked.
pub static BLOCK_SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
    RecordSchema::new(
        RecordKind::Block,
        vec![
            FieldRule::new("number", POSITIVE_INTEGER, validate_positive_integer),
            FieldRule::new("hash", BYTES_32, validate_32_byte_string),
            FieldRule::new("parent_hash", BYTES_32, validate_32_byte_string),
            FieldRule::new("nonce", "8-byte string", validate_nonce),
            FieldRule::new("sha3_uncles", BYTES_32, validate_32_byte_string),
            FieldRule::new("logs_bloom", "integer below 2^2048", validate_logs_bloom),
            FieldRule::new("transactions_root", BYTES_32, validate_32_byte_string),
            FieldRule::new("state_root", BYTES_32, validate_32_byte_string),
            FieldRule::new("miner", "20-byte address", validate_canonical_address),
            FieldRule::new("difficulty", POSITIVE_INTEGER, validate_positive_integer),
            FieldRule::new("total_difficulty", POSITIVE_INTEGER, validate_positive_integer),
            FieldRule::new("size", POSITIVE_INTEGER, validate_positive_integer),
            FieldRule::new("extra_data", BYTES_32, validate_32_byte_string),
            FieldRule::new("gas_limit", POSITIVE_INTEGER, validate_positive_integer),
            FieldRule::new("gas_used", POSITIVE_INTEGER, validate_positive_integer),
            FieldRule::new("timestamp", POSITIVE_INTEGER, validate_positive_integer),
            FieldRule::new("transactions", "any (unchecked)", validate_unchecked),
            FieldRule::new("uncles", "any (unchecked)", validate_unchecked),
        ],
    )
});

/// Log entry schema: 9 fields.
///
/// Position fields may be null, which is how pending entries arrive.
pub static LOG_ENTRY_SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
    RecordSchema::new(
        RecordKind::LogEntry,
        vec![
            FieldRule::new("type", "\"pending\" or \"mined\"", validate_log_entry_type),
            FieldRule::new("log_index", POSITIVE_INTEGER, validate_positive_integer),
            FieldRule::new(
                "transaction_index",
                "positive integer or null",
                if_not_null(validate_positive_integer),
            ),
            FieldRule::new("transaction_hash", BYTES_32, validate_32_byte_string),
            FieldRule::new(
                "block_hash",
                "32-byte string or null",
                if_not_null(validate_32_byte_string),
            ),
            FieldRule::new(
                "block_number",
                "positive integer or null",
                if_not_null(validate_positive_integer),
            ),
            FieldRule::new("address", "20-byte address", validate_canonical_address),
            FieldRule::new("data", "byte string", validate_bytes),
            FieldRule::new("topics", "sequence of 32-byte strings", validate_log_entry_topics),
        ],
    )
});

/// The record types this crate knows how to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Block,
    LogEntry,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::Block, RecordKind::LogEntry];

    pub fn name(self) -> &'static str {
        match self {
            RecordKind::Block => "block",
            RecordKind::LogEntry => "log-entry",
        }
    }

    /// The declared schema for this kind.
    pub fn schema(self) -> &'static RecordSchema {
        match self {
            RecordKind::Block => &*BLOCK_SCHEMA,
            RecordKind::LogEntry => &*LOG_ENTRY_SCHEMA,
        }
    }

    /// Validate a record against this kind's schema.
    pub fn validate(self, value: &Value) -> Result<()> {
        validate_record(value, self.schema())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordKind {
    type Err = UnknownRecordKind;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(RecordKind::Block),
            "log-entry" | "log_entry" | "log" => Ok(RecordKind::LogEntry),
            _ => Err(UnknownRecordKind(input.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn if_not_null_skips_null_only() {
        let optional = if_not_null(validate_positive_integer);
        assert!(optional(&Value::Null).is_ok());
        assert!(optional(&Value::from(3u8)).is_ok());
        assert!(optional(&Value::from(-3i8)).is_err());
        assert!(optional(&Value::from("x")).is_err());
    }

    #[test]
    fn block_schema_declares_eighteen_fields() {
        let schema = RecordKind::Block.schema();
        assert_eq!(schema.fields().len(), 18);
        assert_eq!(schema.keys().len(), 18);
        assert_eq!(schema.kind(), RecordKind::Block);
        assert!(schema.keys().contains("transactions"));
        assert!(schema.keys().contains("uncles"));
        assert_eq!(schema.fields()[0].name(), "number");
    }

    #[test]
    fn log_entry_schema_declares_nine_fields() {
        let schema = RecordKind::LogEntry.schema();
        assert_eq!(schema.fields().len(), 9);
        assert_eq!(schema.keys().len(), 9);
        assert_eq!(
            schema.get("block_hash").map(FieldRule::rule),
            Some("32-byte string or null")
        );
        assert!(schema.get("nonexistent").is_none());
    }

    #[test]
    fn unchecked_block_fields_accept_anything() {
        let transactions = RecordKind::Block.schema().get("transactions").unwrap();
        assert!(transactions.check(&Value::Null).is_ok());
        assert!(transactions.check(&Value::from("anything")).is_ok());
    }

    #[test]
    fn record_kind_parses_names() {
        assert_eq!("block".parse::<RecordKind>(), Ok(RecordKind::Block));
        assert_eq!("Log-Entry".parse::<RecordKind>(), Ok(RecordKind::LogEntry));
        assert_eq!("log_entry".parse::<RecordKind>(), Ok(RecordKind::LogEntry));
        assert!("receipt".parse::<RecordKind>().is_err());

        for kind in RecordKind::ALL {
            assert_eq!(kind.to_string().parse::<RecordKind>(), Ok(kind));
        }
    }
}
