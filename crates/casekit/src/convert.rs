use crate::prelude::{eprintln, println, *};
use casekit_core::batch::{convert_all_cases, convert_batch, BatchOutput};
use casekit_core::case::{tokenize, Case};
use serde_json::Value;
use std::io::BufRead;

#[derive(Debug, clap::Args)]
pub struct ConvertOptions {
    /// Text to convert. Reads one input per line from stdin when omitted.
    pub inputs: Vec<String>,

    /// Target case style: camel, dot, kebab, snake or pascal
    #[arg(short, long, env = "CASEKIT_CASE", default_value = "camel")]
    pub to: Case,

    /// Parse every input as a JSON value (`null`, `123`, `"text"`, ...)
    #[arg(long)]
    pub json_input: bool,

    /// Output a JSON report instead of one line per input
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct TableOptions {
    /// Text to convert
    pub input: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct TokensOptions {
    /// Text to split into words
    pub input: String,
}

pub fn run(options: ConvertOptions, global: crate::Global) -> Result<()> {
    let raw = if options.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        options.inputs
    };

    if global.verbose {
        eprintln!("Converting {} input(s) to {}", raw.len(), options.to.label());
        eprintln!();
    }

    let values = parse_inputs(&raw, options.json_input)?;
    log::debug!("parsed {} input value(s)", values.len());

    if options.json {
        let output = convert_batch(options.to, &values);
        println!("{}", format_batch_json(&output)?);

        if output.has_failures() {
            return Err(Error::PartialFailure {
                failed: output.summary.failed,
                total: output.summary.total,
            }
            .into());
        }

        return Ok(());
    }

    for line in convert_lines(options.to, &values)? {
        println!("{line}");
    }

    Ok(())
}

pub fn table(options: TableOptions, _global: crate::Global) -> Result<()> {
    let rows = convert_all_cases(&options.input);

    if options.json {
        let map: serde_json::Map<String, Value> = rows
            .into_iter()
            .map(|(case, output)| (case.name().to_string(), Value::String(output)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    let mut table = new_table();
    table.set_titles(prettytable::row!["Style", "Output"]);

    for (case, output) in rows {
        table.add_row(prettytable::row![case.label(), output]);
    }

    table.printstd();

    Ok(())
}

pub fn tokens(options: TokensOptions, global: crate::Global) -> Result<()> {
    let words: Vec<_> = tokenize(&options.input).collect();

    if global.verbose {
        eprintln!("Found {} token(s)", words.len());
    }

    for word in words {
        println!("{word}");
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>, Error> {
    std::io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| Error::Stdin(e.to_string()))
}

/// Turn raw command line or stdin inputs into dynamic values.
///
/// Without `json`, every input is taken as a literal string.
fn parse_inputs(raw: &[String], json: bool) -> Result<Vec<Value>, Error> {
    if !json {
        return Ok(raw.iter().cloned().map(Value::String).collect());
    }

    raw.iter()
        .enumerate()
        .map(|(index, input)| {
            serde_json::from_str(input).map_err(|e| Error::InvalidJson {
                line: index + 1,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Convert every value, stopping at the first one that is not a string.
fn convert_lines(case: Case, values: &[Value]) -> Result<Vec<String>, Error> {
    values
        .iter()
        .map(|value| case.convert(value).map_err(Error::from))
        .collect()
}

fn format_batch_json(output: &BatchOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}
