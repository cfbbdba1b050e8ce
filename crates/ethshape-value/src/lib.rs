//! Untyped record model for externally observed block and log data.
//!
//! Data sources hand over loosely typed, string-keyed records. This crate
//! gives them a concrete shape:
//! - [`Value`]: one dynamically typed field value
//! - [`Integer`]: an arbitrary-precision integer (a logs bloom is 2048 bits wide)
//! - [`Record`]: a string-keyed map of values
//!
//! [`decode`] turns JSON text into a [`Value`], hex-decoding `0x` strings into bytes.

pub mod config;
pub mod error;
pub mod integer;
pub mod json;
pub mod value;

pub use config::DecodeConfig;
pub use error::{DecodeError, ParseIntegerError, Result};
pub use integer::Integer;
pub use json::decode;
pub use value::{Record, Value};
