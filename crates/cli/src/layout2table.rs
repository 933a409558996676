//! layout2table - infer a table from JSON layout dumps.
//!
//! Usage: layout2table [options] FILE...
//!
//! Every page of every input file contributes records to one table. Pages
//! whose table cannot be read are logged as warnings and skipped; the JSON
//! output also lists them under `failures`.

mod dump;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use tabulus_core::layout::analysis::position_from_slice;
use tabulus_core::layout::{HeaderRows, LTPage, TableParams};
use tabulus_core::table::TableExtraction;
use tabulus_core::utils::Position;
use tabulus_core::{extract_table, extract_table_par};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputType {
    /// One JSON object per record, wrapped in a document with failures
    #[default]
    Json,
    /// Header line followed by one line per record
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "layout2table")]
#[command(author, version, about = "Infer a table from positioned layout items", long_about = None)]
struct Args {
    /// Layout dump files (JSON)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Output format
    #[arg(short = 't', long = "output-type", value_enum, default_value_t = OutputType::Json)]
    output_type: OutputType,

    /// Number of header rows, or "auto" to detect them from font changes
    #[arg(long = "header-rows", default_value = "1")]
    header_rows: HeaderRows,

    /// Only consider items inside x0,y0,x1,y1
    #[arg(short = 'b', long, allow_hyphen_values = true)]
    boundary: Option<String>,

    /// Tolerance around a cell when collecting its text
    #[arg(long = "cell-margin")]
    cell_margin: Option<f64>,

    /// Decimal digits kept when projecting positions
    #[arg(long)]
    precision: Option<u32>,

    /// Worker threads for page analysis (0 analyzes pages in order on one thread)
    #[arg(short = 'j', long)]
    jobs: Option<usize>,
}

fn build_params(args: &Args) -> Result<TableParams> {
    let mut params = TableParams::default().with_header_rows(args.header_rows);
    if let Some(value) = &args.boundary {
        let boundary =
            parse_boundary(value).with_context(|| format!("invalid --boundary {value:?}"))?;
        params = params.with_boundary(Some(boundary));
    }
    if let Some(margin) = args.cell_margin {
        params = params.with_cell_margin(margin);
    }
    if let Some(precision) = args.precision {
        params.precision = precision;
    }
    params.validate().context("invalid table parameters")?;
    Ok(params)
}

fn parse_boundary(value: &str) -> Result<Position> {
    let coords = value
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<f64>, _>>()?;
    Ok(position_from_slice(&coords)?)
}

fn read_pages(files: &[PathBuf]) -> Result<Vec<LTPage>> {
    let mut pages = Vec::new();
    for path in files {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut parsed = dump::read_pages(&json)
            .with_context(|| format!("failed to parse layout dump {}", path.display()))?;
        tracing::debug!(file = %path.display(), pages = parsed.len(), "layout dump");
        pages.append(&mut parsed);
    }
    Ok(pages)
}

fn write_json<W: Write>(writer: &mut W, extraction: &TableExtraction) -> Result<()> {
    let failures: Vec<serde_json::Value> = extraction
        .failures
        .iter()
        .map(|f| serde_json::json!({ "pageid": f.pageid, "error": f.error.to_string() }))
        .collect();
    let doc = serde_json::json!({
        "fields": extraction.fields,
        "records": extraction.records,
        "pages": extraction.pages,
        "failures": failures,
    });
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

fn write_csv<W: Write>(writer: W, extraction: &TableExtraction) -> Result<()> {
    let mut csv = csv::WriterBuilder::new().from_writer(writer);
    csv.write_record(&extraction.fields)?;
    for record in &extraction.records {
        csv.write_record(record.values())?;
    }
    csv.flush()?;
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let params = build_params(args)?;
    let pages = read_pages(&args.files)?;

    let extraction = match args.jobs {
        Some(0) => extract_table(&pages, &params)?,
        jobs => extract_table_par(&pages, &params, jobs)?,
    };
    if extraction.pages.is_empty() {
        bail!("no table found in {} page(s)", pages.len());
    }

    let writer: Box<dyn Write> = if args.outfile == "-" {
        Box::new(io::stdout().lock())
    } else {
        Box::new(
            File::create(&args.outfile)
                .with_context(|| format!("failed to create {}", args.outfile))?,
        )
    };
    let mut writer = BufWriter::new(writer);
    match args.output_type {
        OutputType::Json => write_json(&mut writer, &extraction)?,
        OutputType::Csv => write_csv(&mut writer, &extraction)?,
    }
    writer.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("layout2table: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "layout2table",
            "--header-rows",
            "auto",
            "--boundary",
            "10,20,300,400",
            "-t",
            "csv",
            "a.json",
        ])
        .unwrap();
        assert_eq!(args.header_rows, HeaderRows::Detect);
        assert_eq!(args.output_type, OutputType::Csv);
        let params = build_params(&args).unwrap();
        assert_eq!(params.boundary, Some((10.0, 20.0, 300.0, 400.0)));
    }

    #[test]
    fn test_boundary_needs_four_values() {
        assert!(parse_boundary("1,2,3").is_err());
        assert!(parse_boundary("1,2,x,4").is_err());
        assert_eq!(parse_boundary("-5, 0, 10, 20").unwrap(), (-5.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn test_csv_output() {
        let mut extraction = TableExtraction {
            fields: vec!["Name".into(), "Note".into()],
            pages: vec![1],
            ..TableExtraction::default()
        };
        extraction.records.push(
            [("Name", "Ada"), ("Note", "a, b")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        let mut out = Vec::new();
        write_csv(&mut out, &extraction).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Name,Note\nAda,\"a, b\"\n");
    }

    #[test]
    fn test_json_output_lists_failures() {
        let extraction = TableExtraction {
            fields: vec!["Name".into()],
            pages: vec![1],
            failures: vec![tabulus_core::table::PageFailure {
                pageid: 2,
                error: tabulus_core::LayoutError::EmptyInput("font size"),
            }],
            ..TableExtraction::default()
        };
        let mut out = Vec::new();
        write_json(&mut out, &extraction).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["failures"].as_array().map(Vec::len), Some(1));
        assert_eq!(doc["failures"][0]["pageid"], 2);
        assert_eq!(
            doc["failures"][0]["error"],
            "cannot compute font size of an empty item set"
        );
    }
}
