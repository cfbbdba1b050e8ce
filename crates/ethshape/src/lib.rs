//! Strict structural validation of observed block and log entry records.
//!
//! Records produced by a data source (a simulated chain backend, an RPC
//! client) are checked against a declared schema: exact key set, no extras,
//! and a per-field value rule. The first violation is reported.
//!
//! # Crate Structure
//!
//! - [`value`]: untyped record model and JSON decoding
//! - [`validate`]: primitive validators, schema tables and record validators
//!
//! ```
//! use ethshape::{validate_block_hash, Value};
//!
//! assert!(validate_block_hash(&Value::from([0u8; 32])).is_ok());
//! assert!(validate_block_hash(&Value::from([0u8; 31])).is_err());
//! ```

/// Re-export value model types.
pub mod value {
    pub use ethshape_value::*;
}

/// Re-export validation types.
pub mod validate {
    pub use ethshape_validate::*;
}

pub use ethshape_validate::{
    validate_block, validate_block_hash, validate_log_entry, RecordKind, ValidationError,
};
pub use ethshape_value::{decode, DecodeConfig, Integer, Record, Value};
