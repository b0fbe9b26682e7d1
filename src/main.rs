use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use submission_gen::{assemble, load_roster, render, RosterFormat, TEMPLATE_FILE};

#[derive(Parser)]
#[command(
    name = "submission-gen",
    about = "Generate fake student submission PDFs for grading-workflow testing",
    version
)]
struct Cli {
    /// Name of the assignment
    assignment_name: String,

    /// Path to the CSV file with the student roster
    csv_path: PathBuf,

    /// Format of the roster CSV
    #[arg(long, value_enum, default_value = "standard")]
    format: RosterFormat,

    /// Directory to save output PDFs
    #[arg(long = "output_dir", default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Validate the roster before any PDF work begins.
    let roster = load_roster(&cli.csv_path, cli.format)?;

    fs::create_dir_all(&cli.output_dir)?;

    let template_path = cli.output_dir.join(TEMPLATE_FILE);
    render::render_template(&cli.assignment_name, &template_path)?;
    println!("Template PDF created at: {}", template_path.display());

    let submissions = assemble(
        &cli.assignment_name,
        &roster,
        &template_path,
        &cli.output_dir,
    )?;
    println!("Submissions PDF created at: {}", submissions.display());

    Ok(())
}
