use ethshape_validate::validate_block_hash;
use ethshape_value::Value;
use serde::Serialize;
use tracing::debug;

use crate::cmd::HashArgs;
use crate::exit::{CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_json, OutputFormat};

#[derive(Serialize)]
struct HashOutput<'a> {
    schema_id: &'static str,
    value: &'a str,
    length: usize,
    valid: bool,
    error: Option<String>,
}

pub fn run(args: HashArgs, format: OutputFormat) -> CliResult<i32> {
    let digits = args
        .value
        .strip_prefix("0x")
        .or_else(|| args.value.strip_prefix("0X"))
        .unwrap_or(&args.value);
    let raw = hex::decode(digits)
        .map_err(|err| CliError::new(USAGE, format!("hash is not valid hex: {err}")))?;
    debug!(length = raw.len(), "decoded hash argument");

    let length = raw.len();
    let error = validate_block_hash(&Value::from(raw))
        .err()
        .map(|err| err.to_string());

    let out = HashOutput {
        schema_id: "https://schemas.3leaps.dev/ethshape/cli/v1/block-hash.schema.json",
        value: &args.value,
        length,
        valid: error.is_none(),
        error,
    };

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table | OutputFormat::Pretty => match &out.error {
            None => println!("block hash: valid ({} bytes)", out.length),
            Some(error) => println!("block hash: invalid ({error})"),
        },
    }

    if out.valid {
        Ok(SUCCESS)
    } else {
        Ok(DATA_INVALID)
    }
}
