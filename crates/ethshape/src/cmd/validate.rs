use std::fs::File;
use std::io::Read;

use ethshape_value::{decode, DecodeError, Value};
use tracing::{debug, info, warn};

use crate::cmd::ValidateArgs;
use crate::exit::{decode_error, io_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{
    print_report, OutputFormat, RecordOutcome, ValidationReport, VALIDATION_REPORT_SCHEMA,
};

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let config = args.decode_config();
    let source = if args.input == "-" { "<stdin>" } else { args.input.as_str() };

    let content = read_input(&args.input, config.max_input_size)?;
    debug!(source, bytes = content.len(), "loaded input");

    let value = decode(&content, &config)
        .map_err(|err| decode_error(&format!("failed decoding {source}"), err))?;

    // A top-level array is a batch of records; anything else is one record.
    let records: Vec<&Value> = match &value {
        Value::List(items) => items.iter().collect(),
        single => vec![single],
    };

    let outcomes: Vec<RecordOutcome> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let error = args.kind.validate(record).err().map(|err| err.to_string());
            RecordOutcome {
                index,
                valid: error.is_none(),
                error,
            }
        })
        .collect();

    let failed = outcomes.iter().filter(|outcome| !outcome.valid).count();
    if failed == 0 {
        info!(kind = %args.kind, total = outcomes.len(), "all records valid");
    } else {
        warn!(kind = %args.kind, failed, total = outcomes.len(), "records failed validation");
    }

    let report = ValidationReport {
        schema_id: VALIDATION_REPORT_SCHEMA,
        kind: args.kind.name(),
        source,
        valid: failed == 0,
        records: outcomes,
    };
    print_report(&report, format);

    if failed == 0 {
        Ok(SUCCESS)
    } else {
        Ok(DATA_INVALID)
    }
}

fn read_input(input: &str, max_bytes: usize) -> CliResult<String> {
    // One byte past the limit is enough to tell that the input is oversize.
    let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
    let mut raw = Vec::new();

    let result = if input == "-" {
        std::io::stdin().lock().take(read_limit).read_to_end(&mut raw)
    } else {
        let file = File::open(input)
            .map_err(|err| io_error(&format!("failed opening {input}"), err))?;
        file.take(read_limit).read_to_end(&mut raw)
    };
    result.map_err(|err| io_error(&format!("failed reading {input}"), err))?;

    // Size before UTF-8: the cut may land inside a multi-byte character.
    if raw.len() > max_bytes {
        return Err(decode_error(
            &format!("failed decoding {input}"),
            DecodeError::InputTooLarge {
                size: raw.len(),
                max: max_bytes,
            },
        ));
    }

    String::from_utf8(raw).map_err(|err| {
        CliError::new(
            DATA_INVALID,
            format!("failed decoding {input}: input is not valid UTF-8: {err}"),
        )
    })
}
