//! Validate command - check a single document against declared values.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info, warn};

use vfv_core::models::fields::{Field, FIELD_COUNT};
use vfv_core::pipeline::{evaluate, Evaluation};
use vfv_core::report::{DispatchReport, StepOutcome};
use vfv_core::{
    notifier_from_config, DirectoryArchiver, Document, FileDocumentReader, LogNotifier, Notifier,
    Reporter, Submission, UserDeclaration,
};

use super::config::load_config;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Document to validate (pdf, csv or xlsx)
    #[arg(required = true)]
    input: PathBuf,

    /// Expected name
    #[arg(long, default_value = "")]
    name: String,

    /// Expected branch
    #[arg(long, default_value = "")]
    branch: String,

    /// Expected vendor code
    #[arg(long, default_value = "")]
    vendor_code: String,

    /// Expected account number
    #[arg(long, default_value = "")]
    account_number: String,

    /// Expected date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    date: String,

    /// Address that receives the result notification
    #[arg(short, long)]
    email: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: ReportFormat,

    /// Only evaluate; do not archive or notify
    #[arg(long)]
    dry_run: bool,

    /// Archive directory (overrides config)
    #[arg(long)]
    archive_dir: Option<PathBuf>,

    /// SMTP sender address (overrides config)
    #[arg(long, env = "VFV_SENDER_EMAIL")]
    sender_email: Option<String>,

    /// SMTP password (overrides config)
    #[arg(long, env = "VFV_SENDER_PASSWORD", hide_env_values = true)]
    sender_password: Option<String>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report
    Text,
    /// JSON report
    Json,
}

/// JSON view of a validation run.
#[derive(Serialize)]
struct ValidationReport<'a> {
    file: &'a str,
    declared: &'a UserDeclaration,
    #[serde(flatten)]
    evaluation: &'a Evaluation,
    messages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dispatch: Option<&'a DispatchReport>,
}

pub async fn run(args: ValidateArgs, config_path: Option<&str>) -> anyhow::Result<ExitCode> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(sender) = &args.sender_email {
        config.smtp.sender_email = sender.clone();
    }
    if let Some(password) = &args.sender_password {
        config.smtp.sender_password = Some(password.clone());
    }
    if let Some(dir) = &args.archive_dir {
        config.archive.dir = dir.clone();
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Validating file: {}", args.input.display());

    let document = Document::open(&args.input)?;
    let declaration = UserDeclaration::new(
        args.name.as_str(),
        args.branch.as_str(),
        args.vendor_code.as_str(),
        args.account_number.as_str(),
        args.date.as_str(),
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Validating {}...", document.filename()));

    let (evaluation, dispatch) = if args.dry_run {
        (evaluate(&FileDocumentReader, &document, &declaration), None)
    } else {
        let notifier: Box<dyn Notifier> = match notifier_from_config(&config.smtp) {
            Ok(notifier) => notifier,
            Err(e) => {
                warn!("Email notifications unavailable ({}), logging instead", e);
                Box::new(LogNotifier)
            }
        };
        let reporter = Reporter::new(notifier, DirectoryArchiver::from_config(&config.archive))
            .with_config(config.report.clone());
        let submission = Submission::new(FileDocumentReader, reporter);

        pb.set_message("Dispatching result...");
        let outcome = submission.run(&document, &declaration, args.email.as_deref());
        (outcome.evaluation, Some(outcome.dispatch))
    };

    pb.finish_and_clear();

    match args.format {
        ReportFormat::Json => {
            let report = ValidationReport {
                file: document.filename(),
                declared: &declaration,
                evaluation: &evaluation,
                messages: evaluation.verdict.messages(),
                dispatch: dispatch.as_ref(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        ReportFormat::Text => print_text(&evaluation, dispatch.as_ref()),
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(if evaluation.verdict.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_text(evaluation: &Evaluation, dispatch: Option<&DispatchReport>) {
    println!("Extracted fields:");
    for (field, value) in evaluation.fields.iter() {
        println!("  {:<16}{}", format!("{}:", field.label()), value);
    }
    println!();

    let verdict = &evaluation.verdict;
    if verdict.passed {
        println!("{} File validated successfully!", style("✓").green());
    } else {
        println!(
            "{} Errors detected! Please check the details below.",
            style("✗").red()
        );

        let missing = evaluation.fields.missing();
        if !missing.is_empty() {
            let labels: Vec<&str> = missing.iter().map(|f| Field::label(*f)).collect();
            println!(
                "{} Missing values in file: {}",
                style("⚠").yellow(),
                labels.join(", ")
            );
        }

        for message in verdict.messages() {
            println!("  - {}", message);
        }
    }

    println!();
    println!("Total Fields: {}, Errors: {}", FIELD_COUNT, verdict.error_count());

    if let Some(dispatch) = dispatch {
        println!("Archive: {}", describe(&dispatch.archive));
        println!("Notification: {}", describe(&dispatch.notification));
    }
}

fn describe(outcome: &StepOutcome) -> String {
    match outcome {
        StepOutcome::Completed { detail } => format!("{} {}", style("done").green(), detail),
        StepOutcome::Skipped { reason } => format!("{} ({})", style("skipped").yellow(), reason),
        StepOutcome::Failed { error } => format!("{} ({})", style("failed").red(), error),
    }
}
