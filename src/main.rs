//! Salescope CLI - Transform dashboard CSV exports to chart-ready JSON
//!
//! # Main Commands
//!
//! ```bash
//! salescope run --sales sales_data.csv --geo geographic_data.csv \
//!               --feedback customer_feedback.csv -o dashboard.json
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! salescope parse input.csv          # Just parse CSV to JSON rows
//! salescope check input.csv -t sales # Validate a CSV against a table contract
//! salescope schema feedback          # Show the embedded JSON Schema
//! ```

use clap::{Parser, Subcommand};
use salescope::{
    load_dashboard, read_csv_file, schema, DashboardPaths, PipelineOptions, Table,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "salescope")]
#[command(about = "Transform sales, geo and feedback CSVs into dashboard view-models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full pipeline: three CSVs → five JSON view-models
    Run {
        /// Sales transactions CSV (date, category, sales)
        #[arg(long)]
        sales: PathBuf,

        /// Geographic sales CSV (latitude, longitude, region, sales)
        #[arg(long)]
        geo: PathBuf,

        /// Customer feedback CSV (date, category, rating, sentiment_score)
        #[arg(long)]
        feedback: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Skip the row-level schema check
        #[arg(long)]
        no_validate: bool,
    },

    /// Parse a CSV file and output JSON rows
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a CSV file against a table contract
    Check {
        /// Input CSV file
        input: PathBuf,

        /// Table contract to check against: sales, geo or feedback
        #[arg(short, long)]
        table: Table,
    },

    /// Show the embedded JSON Schema for a table
    Schema {
        /// Table: sales, geo or feedback
        table: Table,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            sales,
            geo,
            feedback,
            output,
            pretty,
            no_validate,
        } => cmd_run(sales, geo, feedback, output.as_deref(), pretty, no_validate),

        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),

        Commands::Check { input, table } => cmd_check(&input, table),

        Commands::Schema { table } => cmd_schema(table),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_run(
    sales: PathBuf,
    geo: PathBuf,
    feedback: PathBuf,
    output: Option<&Path>,
    pretty: bool,
    no_validate: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📊 Building dashboard view-models");

    let paths = DashboardPaths { sales, geo, feedback };
    let options = PipelineOptions {
        skip_schema_check: no_validate,
    };

    let dashboard = load_dashboard(&paths, &options)?;

    let json = if pretty {
        serde_json::to_string_pretty(&dashboard)?
    } else {
        serde_json::to_string(&dashboard)?
    };
    write_output(&json, output)?;

    eprintln!("✨ Done!");
    Ok(())
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let table = read_csv_file(input)?;

    eprintln!("   Encoding: {}", table.encoding);
    eprintln!(
        "   Delimiter: '{}'",
        match table.delimiter {
            '\t' => "\\t".to_string(),
            c => c.to_string(),
        }
    );
    eprintln!("   Columns: {}", table.headers.join(", "));
    eprintln!("✅ Parsed {} records", table.records.len());

    let json = serde_json::to_string_pretty(&table.records)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_check(input: &Path, table: Table) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("✔️  Checking: {} against '{}' contract", input.display(), table.name());

    let parsed = read_csv_file(input)?;
    schema::check_columns(table, &parsed.headers)?;

    let mut valid = 0;
    let mut invalid = 0;

    for (i, row) in parsed.records.iter().enumerate() {
        match schema::validate_row(table, row) {
            Ok(()) => valid += 1,
            Err(errors) => {
                invalid += 1;
                if invalid <= 5 {
                    eprintln!("\n❌ Row {} invalid:", i + 2);
                    for err in errors.iter().take(3) {
                        eprintln!("   - {}", err);
                    }
                }
            }
        }
    }

    eprintln!("\n📊 Results: {} valid, {} invalid", valid, invalid);

    if invalid > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_schema(table: Table) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", table.schema_json());
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
