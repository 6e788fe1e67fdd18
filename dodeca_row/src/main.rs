// Dodeca `serial`: command-line front end for the row engine.
//
// Classifies pitch-class sets and analyses tone rows, printing either a
// readable summary or JSON for downstream exporters.
//
// Usage:
//   serial set 0,4,7
//   serial row 0,11,7,4,2,9,3,8,10,1,5,6 [--json] [--config analysis.json]
//   serial forms 014295B38A76
//
// Rows and sets accept comma- or space-separated integers, or compact
// single-character spellings (t/a = 10, e/b = 11). Logging goes to stderr
// and is controlled by RUST_LOG (default: warn).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dodeca_pcset::{DescriptorCache, describe};
use dodeca_row::{AnalysisConfig, Row, RowReport, analyse_row, row_forms};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "serial")]
#[command(about = "Pitch-class set classification and twelve-tone row analysis", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify an unordered pitch-class set
    Set { pcs: String },
    /// Analyse a tone row
    Row {
        row: String,
        /// Analysis config (JSON); fields left out keep their defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print all 48 serial forms of a row
    Forms { row: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Set { pcs } => run_set(&pcs, args.json),
        Command::Row { row, config } => run_row(&row, config, args.json),
        Command::Forms { row } => run_forms(&row, args.json),
    }
}

fn parse_row(text: &str) -> Result<Row> {
    text.parse()
        .with_context(|| format!("could not read '{text}' as a row"))
}

fn run_set(text: &str, json: bool) -> Result<()> {
    let set = parse_row(text)?.to_pc_set();
    let descriptor = describe(set)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
        return Ok(());
    }
    println!("Set: {set}");
    println!("Forte index: {}", descriptor.forte_index);
    println!("Prime form: {}", descriptor.prime_form);
    println!("Interval vector: {:?}", descriptor.interval_vector);
    println!("Transformations: {}", descriptor.transformation_count);
    if let Some(status) = descriptor.combinatoriality {
        println!("Combinatoriality: {status}");
    }
    Ok(())
}

fn run_row(text: &str, config_path: Option<PathBuf>, json: bool) -> Result<()> {
    let row = parse_row(text)?;
    let config = match config_path {
        Some(path) => {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path.display()))?;
            AnalysisConfig::from_json(&contents)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => AnalysisConfig::default(),
    };
    let report = analyse_row(&row, &config, &DescriptorCache::new())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &RowReport) {
    println!("Row: {}", report.row);
    println!("Intervals: {:?}", report.intervals);
    println!(
        "Twelve-tone: {}  All-interval: {}  Self-R: {}  Self-RI: {}",
        report.twelve_tone,
        report.all_interval,
        report.self_retrograde,
        report.self_retrograde_inversion
    );

    for survey in &report.overlapping {
        let names: Vec<&str> = survey
            .descriptors
            .iter()
            .map(|d| d.forte_index.as_str())
            .collect();
        println!("Segments of {}: {}", survey.size, names.join(" "));
        if !survey.repeated.is_empty() {
            let repeated: Vec<String> = survey.repeated.iter().map(|p| p.to_string()).collect();
            println!("  repeated: {}", repeated.join(" "));
        }
    }

    for derived in &report.derived {
        let forms: Vec<String> = derived
            .segments
            .iter()
            .map(|s| s.to_generator.to_string())
            .collect();
        println!(
            "Derived in {}s from {} {}: {}",
            derived.segment_size,
            derived.generator,
            derived.set_class,
            forms.join(" ")
        );
    }

    for result in &report.combinatoriality {
        let forms: Vec<String> = result.forms.iter().map(|f| f.to_string()).collect();
        println!(
            "Combinatorial forms ({}s): {}",
            result.partition_size,
            if forms.is_empty() { "none".to_string() } else { forms.join(" ") }
        );
    }
    if let Some(status) = report.combinatorial_type {
        println!("Hexachordal type: {status}");
    }
    if !report.summary.is_empty() {
        println!("Summary: {}", report.summary);
    }
}

fn run_forms(text: &str, json: bool) -> Result<()> {
    let row = parse_row(text)?;
    let forms = row_forms(&row);
    if json {
        let labelled: Vec<(String, Vec<u8>)> = forms
            .iter()
            .map(|(form, r)| (form.to_string(), r.to_vec()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&labelled)?);
        return Ok(());
    }
    for (form, r) in &forms {
        println!("{:>4}  {r}", form.to_string());
    }
    Ok(())
}
