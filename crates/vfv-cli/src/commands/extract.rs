//! Extract command - read the tracked fields from a document.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use console::style;
use tracing::info;

use vfv_core::{extract, Document, DocumentReader, FieldSet, FileDocumentReader};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (pdf, csv or xlsx)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<ExitCode> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let document = Document::open(&args.input)?;
    info!("Reading {} as {}", document.filename(), document.kind());

    let content = FileDocumentReader
        .read(&document)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", document.filename(), e))?;
    let fields = extract(&content);

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&fields)?,
        OutputFormat::Csv => format_csv(&fields)?,
        OutputFormat::Text => format_text(&fields),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(ExitCode::SUCCESS)
}

fn format_csv(fields: &FieldSet) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(fields.iter().map(|(field, _)| field.label()))?;
    wtr.write_record(fields.iter().map(|(_, value)| value.as_str()))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(fields: &FieldSet) -> String {
    let mut output = String::new();

    for (field, value) in fields.iter() {
        output.push_str(&format!("{:<16}{}\n", format!("{}:", field.label()), value));
    }

    let missing = fields.missing();
    if !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
        output.push_str(&format!("\nMissing: {}\n", labels.join(", ")));
    }

    output
}
