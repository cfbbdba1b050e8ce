//! Strict structural validation of block and log entry records.
//!
//! A record passes only if its key set is exactly the declared schema's key
//! set and every field satisfies its validator. Validation is a pass/fail
//! predicate: the first violation aborts the call and is returned as a
//! [`ValidationError`]. Fields are checked in the schema's declared order, so
//! which violation surfaces first is deterministic.
//!
//! Nothing here logs, allocates shared state, or coerces values. The schema
//! tables are built once and are read-only afterwards, so validators can be
//! called from any number of threads.

pub mod error;
pub mod primitives;
pub mod registry;
pub mod structural;
pub mod validator;

pub use error::{Result, UnknownRecordKind, ValidationError};
pub use primitives::{
    validate_32_byte_string, validate_bytes, validate_canonical_address, validate_log_entry_topics,
    validate_log_entry_type, validate_logs_bloom, validate_nonce, validate_positive_integer,
    LOGS_BLOOM_BITS,
};
pub use registry::{
    if_not_null, FieldRule, RecordKind, RecordSchema, Validator, BLOCK_SCHEMA, LOG_ENTRY_SCHEMA,
};
pub use structural::{validate_dict, validate_has_required_keys, validate_no_extra_keys};
pub use validator::{validate_block, validate_block_hash, validate_log_entry, validate_record};
