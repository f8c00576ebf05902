//! `json-match`: test JSON documents against a matching schema.
//!
//! Usage:
//!   json-match --schema rule.json [--input doc.json]
//!   json-match --schema-json '{"type": "created"}' --lines < events.ndjson
//!
//! Exit code 0 on a match (any line, with `--lines`), 1 otherwise, 2 on error.
//! Logging is controlled by `RUST_LOG`.

use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use json_match::cli::{
    check_sources, filter_lines, match_document, parse_schema, read_source, CliError,
};

#[derive(Parser, Debug)]
#[command(name = "json-match", version, about, long_about = None)]
#[command(group(ArgGroup::new("schema_source").required(true).args(["schema", "schema_json"])))]
struct Args {
    /// Schema file, or `-` for stdin.
    #[arg(long, value_name = "FILE|-")]
    schema: Option<PathBuf>,

    /// Schema given inline as JSON.
    #[arg(long, value_name = "JSON")]
    schema_json: Option<String>,

    /// Input document. Defaults to stdin.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Treat the input as newline-delimited JSON and print matching lines.
    #[arg(long)]
    lines: bool,

    /// Print nothing; report through the exit code only.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("json-match: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<bool, CliError> {
    let input = args.input.clone().unwrap_or_else(|| PathBuf::from("-"));
    let schema_text = match (&args.schema_json, &args.schema) {
        (Some(inline), _) => inline.clone(),
        (None, path) => {
            let path = path.as_deref().unwrap_or(Path::new("-"));
            check_sources(Some(path), &input)?;
            read_source(path)?
        }
    };
    let schema = parse_schema(&schema_text)?;

    if args.lines {
        let stdout = io::stdout();
        let stderr = io::stderr();
        let matched = if input.as_os_str() == "-" {
            filter(args, &schema, io::stdin().lock(), &mut stdout.lock(), &mut stderr.lock())?
        } else {
            let file = std::fs::File::open(&input).map_err(|source| CliError::Read {
                path: input.display().to_string(),
                source,
            })?;
            filter(args, &schema, BufReader::new(file), &mut stdout.lock(), &mut stderr.lock())?
        };
        tracing::debug!(matched, "filtered input lines");
        return Ok(matched > 0);
    }

    let matched = match_document(&schema, &read_source(&input)?)?;
    if !args.quiet {
        writeln!(io::stdout(), "{matched}")?;
    }
    Ok(matched)
}

fn filter<R: io::BufRead>(
    args: &Args,
    schema: &json_match::Schema,
    input: R,
    out: &mut impl Write,
    diagnostics: &mut impl Write,
) -> Result<usize, CliError> {
    if args.quiet {
        filter_lines(schema, input, &mut io::sink(), &mut io::sink())
    } else {
        filter_lines(schema, input, out, diagnostics)
    }
}
