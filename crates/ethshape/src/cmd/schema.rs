use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use ethshape_validate::RecordSchema;
use serde::Serialize;

use crate::cmd::SchemaArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_json, OutputFormat};

#[derive(Serialize)]
struct FieldOutput {
    name: &'static str,
    rule: &'static str,
}

#[derive(Serialize)]
struct SchemaOutput {
    schema_id: &'static str,
    kind: &'static str,
    fields: Vec<FieldOutput>,
}

pub fn run(args: SchemaArgs, format: OutputFormat) -> CliResult<i32> {
    let schema = args.kind.schema();
    let out = SchemaOutput {
        schema_id: "https://schemas.3leaps.dev/ethshape/cli/v1/record-schema.schema.json",
        kind: schema.kind().name(),
        fields: field_rows(schema),
    };

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "RULE"]);
            for field in &out.fields {
                table.add_row(vec![field.name, field.rule]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{} ({} fields)", out.kind, out.fields.len());
            for field in &out.fields {
                println!("  {:<20} {}", field.name, field.rule);
            }
        }
    }

    Ok(SUCCESS)
}

fn field_rows(schema: &RecordSchema) -> Vec<FieldOutput> {
    schema
        .fields()
        .iter()
        .map(|field| FieldOutput {
            name: field.name(),
            rule: field.rule(),
        })
        .collect()
}
