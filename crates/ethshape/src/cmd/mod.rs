use clap::{Args, Subcommand};
use ethshape_validate::RecordKind;
use ethshape_value::DecodeConfig;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod hash;
pub mod schema;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate block or log entry records from a JSON file.
    Validate(ValidateArgs),
    /// Validate a single block hash.
    Hash(HashArgs),
    /// Print the declared field table for a record kind.
    Schema(SchemaArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Validate(args) => validate::run(args, format),
        Command::Hash(args) => hash::run(args, format),
        Command::Schema(args) => schema::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON file holding one record or an array of records ("-" reads stdin).
    pub input: String,
    /// Record kind: block or log-entry.
    #[arg(long, short = 'k')]
    pub kind: RecordKind,
    /// Maximum input size in bytes.
    #[arg(long, env = "ETHSHAPE_MAX_INPUT_SIZE", default_value_t = DecodeConfig::default().max_input_size)]
    pub max_input_size: usize,
    /// Maximum nesting depth of the input.
    #[arg(long, env = "ETHSHAPE_MAX_DEPTH", default_value_t = DecodeConfig::default().max_depth)]
    pub max_depth: usize,
    /// Maximum number of digits in an integer literal.
    #[arg(long, env = "ETHSHAPE_MAX_INTEGER_DIGITS", default_value_t = DecodeConfig::default().max_integer_digits)]
    pub max_integer_digits: usize,
    /// Keep "0x" strings as text instead of decoding them to bytes.
    #[arg(long)]
    pub no_hex: bool,
}

impl ValidateArgs {
    pub fn decode_config(&self) -> DecodeConfig {
        DecodeConfig {
            max_input_size: self.max_input_size,
            max_depth: self.max_depth,
            max_integer_digits: self.max_integer_digits,
            hex_strings_as_bytes: !self.no_hex,
        }
    }
}

#[derive(Args, Debug)]
pub struct HashArgs {
    /// Hex-encoded hash, with or without a "0x" prefix.
    pub value: String,
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Record kind: block or log-entry.
    #[arg(long, short = 'k')]
    pub kind: RecordKind,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
