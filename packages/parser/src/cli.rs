//! Command-line interface for the parser.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{parse_period, parse_separator, DEFAULT_SEPARATOR};
use crate::error::{ParserError, Result};
use crate::loader::{discover_inputs, load_document_text, parse_document};
use crate::members::collect_members;
use crate::output::{save_records, OutputFormat};
use crate::protocol::{collect_speeches, speeches_to_records};
use crate::record::Record;
use crate::types::{MemberQuery, OccupationFormat};

/// Bundestag parser - Normalize plenary protocols and member data into flat records.
#[derive(Parser)]
#[command(name = "bundestag-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract all speeches from plenary protocols.
    Speeches {
        /// Protocol XML file, or a directory of protocol XML files
        input: PathBuf,

        /// Output file ending in .csv, .json, .yaml or .yml
        #[arg(short, long)]
        output: PathBuf,

        /// Separator for CSV output
        #[arg(short, long, default_value_t = DEFAULT_SEPARATOR.to_string())]
        separator: String,

        /// Add location, date, period and session to every speech
        #[arg(short, long)]
        metadata: bool,
    },

    /// Extract members from the member master data file.
    Members {
        /// MDB_STAMMDATEN XML file, or a directory of such files
        input: PathBuf,

        /// Output file ending in .csv, .json, .yaml or .yml
        #[arg(short, long)]
        output: PathBuf,

        /// Separator for CSV output
        #[arg(short, long, default_value_t = DEFAULT_SEPARATOR.to_string())]
        separator: String,

        /// Only members of this legislative period, with period-specific data
        #[arg(short, long)]
        period: Option<String>,

        /// Add a membership flag for this institution (repeatable, requires --period)
        #[arg(short, long = "institution")]
        institutions: Vec<String>,

        /// Emit occupations as a list instead of a ';'-joined string
        #[arg(long)]
        occupation_list: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Speeches {
            input,
            output,
            separator,
            metadata,
        } => speeches_command(&input, &output, &separator, metadata),
        Commands::Members {
            input,
            output,
            separator,
            period,
            institutions,
            occupation_list,
        } => {
            let query = build_member_query(period, institutions)?;
            let occupation = if occupation_list {
                OccupationFormat::List
            } else {
                OccupationFormat::Joined
            };
            members_command(&input, &output, &separator, &query, occupation)
        }
    }
}

/// Build and validate the member query from command-line values.
fn build_member_query(period: Option<String>, institutions: Vec<String>) -> Result<MemberQuery> {
    let mut query = MemberQuery::new();

    if let Some(period) = period {
        query = query.with_period(parse_period(&period)?);
    }

    if !institutions.is_empty() {
        if query.period.is_none() {
            return Err(ParserError::InstitutionsWithoutPeriod);
        }
        query = query.with_institutions(institutions);
    }

    Ok(query)
}

/// Execute the speeches command.
fn speeches_command(input: &Path, output: &Path, separator: &str, metadata: bool) -> Result<()> {
    // Validate before touching any input
    OutputFormat::from_path(output)?;
    let separator = parse_separator(separator)?;
    let files = discover_inputs(input)?;

    println!(
        "{} {} protocol(s) from {}",
        style("Parsing").bold(),
        style(files.len()).cyan(),
        style(input.display()).green()
    );

    let records = process_files(&files, |text| {
        let doc = parse_document(text)?;
        Ok(speeches_to_records(&collect_speeches(&doc, metadata)))
    })?;

    save_records(output, &records, separator)?;
    print_summary("Speeches", records.len(), 0, output);
    Ok(())
}

/// Execute the members command.
fn members_command(
    input: &Path,
    output: &Path,
    separator: &str,
    query: &MemberQuery,
    occupation: OccupationFormat,
) -> Result<()> {
    OutputFormat::from_path(output)?;
    let separator = parse_separator(separator)?;
    let files = discover_inputs(input)?;

    println!(
        "{} {} member file(s) from {}",
        style("Parsing").bold(),
        style(files.len()).cyan(),
        style(input.display()).green()
    );

    let mut skipped = 0;
    let records = process_files(&files, |text| {
        let doc = parse_document(text)?;
        let batch = collect_members(&doc, query)?;
        skipped += batch.skipped;
        Ok(batch.to_records(occupation))
    })?;

    save_records(output, &records, separator)?;
    print_summary("Members", records.len(), skipped, output);
    Ok(())
}

/// Load and process files sequentially, aggregating their records.
fn process_files<F>(files: &[PathBuf], mut process: F) -> Result<Vec<Record>>
where
    F: FnMut(&str) -> Result<Vec<Record>>,
{
    let pb = ProgressBar::new(files.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan}] {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut records = Vec::new();
    for file in files {
        pb.set_message(
            file.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        let result = load_document_text(file).and_then(|text| process(&text));
        match result {
            Ok(mut file_records) => records.append(&mut file_records),
            Err(e) => {
                pb.finish_and_clear();
                tracing::warn!(path = %file.display(), error = %e, "Failed to process file");
                return Err(e);
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(records)
}

fn print_summary(label: &str, count: usize, skipped: usize, output: &Path) {
    println!("  {label}: {}", style(count).green());
    if skipped > 0 {
        println!(
            "  Skipped (not active in period): {}",
            style(skipped).yellow().bold()
        );
    }
    println!();
    println!("{} {}", style("Saved to:").green().bold(), output.display());
}
