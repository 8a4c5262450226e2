// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV into records and prints every chart helper's output for the chosen fields.

use anyhow::{Context, Result};
use chart_helpers::{
    by_fields, discrete_ticks, format_timestamp_millis, group_by_fields, max_by_fields, max_by_fields_stacked,
    min_by_fields, transform_from_center, FieldValue, Fields, Record,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_TICKS: usize = 5;

// Plot rectangle used for the zoom transform preview.
const PLOT_LEFT: f64 = 72.0;
const PLOT_TOP: f64 = 24.0;
const PLOT_WIDTH: f64 = 928.0;
const PLOT_HEIGHT: f64 = 560.0;
const ZOOM: f64 = 2.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Usage: chart-helpers-demo [CSV_PATH] [FIELDS] [TICKS]
    let mut args = std::env::args().skip(1);
    let raw = args
        .next()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample.csv").to_string());
    let fields_arg = args.next();
    let tick_count = args
        .next()
        .map(|s| s.parse::<usize>())
        .transpose()
        .context("TICKS must be a non-negative integer")?
        .unwrap_or(DEFAULT_TICKS);

    let path = resolve_path(&raw)?;
    info!(path = %path.display(), "using input file");

    let (headers, records) = load_csv_records(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(rows = records.len(), columns = headers.len(), "loaded records");

    if records.is_empty() {
        anyhow::bail!("no records loaded; check headers/delimiter.");
    }

    let fields = match fields_arg {
        Some(list) => Fields::new(list.split(',').map(str::trim).filter(|s| !s.is_empty())),
        None => numeric_columns(&headers, &records),
    };
    if fields.is_empty() {
        anyhow::bail!("no numeric columns found; pass FIELDS explicitly (comma-separated).");
    }

    println!("Fields: {}", fields.iter().collect::<Vec<_>>().join(", "));
    println!("  min_by_fields:         {}", fmt_opt(min_by_fields(&records, &fields)));
    println!("  max_by_fields:         {}", fmt_opt(max_by_fields(&records, &fields)));
    println!("  max_by_fields_stacked: {}", fmt_opt(max_by_fields_stacked(&records, &fields)));
    println!("  by_fields:             {} values", by_fields(&records, &fields).len());

    for (name, group) in fields.iter().zip(group_by_fields(&records, &fields)) {
        let present = group.iter().flatten().count();
        if present < records.len() {
            warn!(field = name, missing = records.len() - present, "field absent in some rows");
        }
        println!("  {name}: {present}/{} present", records.len());
    }

    // X axis labels come from the first column.
    let x_field = headers[0].as_str();
    let labels: Vec<String> = by_fields(&records, x_field).into_iter().map(axis_label).collect();
    let ticks = discrete_ticks(&labels, tick_count);
    println!("Ticks on '{x_field}' ({tick_count} requested): {}", ticks.join(" | "));

    println!(
        "Zoom x{ZOOM} transform: {}",
        transform_from_center(PLOT_LEFT, PLOT_TOP, PLOT_WIDTH, PLOT_HEIGHT, ZOOM)
    );

    Ok(())
}

fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load a headed CSV into records. Cells parsing as `f64` become numbers,
/// empty cells are left absent, anything else is kept as text.
fn load_csv_records(path: &Path) -> Result<(Vec<String>, Vec<Record>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(str::to_owned).collect::<Vec<_>>();
    if headers.is_empty() {
        anyhow::bail!("CSV has no header row");
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let mut record = Record::new();
        for (name, cell) in headers.iter().zip(rec.iter()) {
            if cell.is_empty() {
                continue;
            }
            match cell.parse::<f64>() {
                Ok(v) => record.insert(name.as_str(), v),
                Err(_) => record.insert(name.as_str(), cell),
            };
        }
        out.push(record);
    }
    Ok((headers, out))
}

/// Columns (after the first) with at least one numeric cell.
fn numeric_columns(headers: &[String], records: &[Record]) -> Fields {
    Fields::new(
        headers
            .iter()
            .skip(1)
            .filter(|h| records.iter().any(|r| r.number(h.as_str()).is_some()))
            .cloned(),
    )
}

fn axis_label(value: Option<&FieldValue>) -> String {
    match value {
        // epoch milliseconds
        Some(FieldValue::Number(v)) if v.fract() == 0.0 && *v > 1e12 => {
            format_timestamp_millis(*v as i64).unwrap_or_else(|_| v.to_string())
        }
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "n/a".to_string())
}
