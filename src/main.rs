//! SisVet analysis report CLI

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::*;
use sisvet_report::{analysis_data, generate_analysis, render_analysis, GenerationOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sisvet-report")]
#[command(about = "Generate the SisVet business analysis HTML report", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory the report is written into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Print the HTML to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the report data as JSON
    Data,
}

/// Diagnostics go to stderr so `--stdout` output stays clean.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sisvet_report=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Commands::Data) => print_data(),
        None if cli.stdout => print_report(),
        None => generate(cli.output_dir),
    };

    if let Err(e) = outcome {
        eprintln!("{}", "❌ Report generation failed!".red().bold());
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn generate(output_dir: PathBuf) -> Result<()> {
    println!("{}", "🚀 Generando análisis completo del sistema veterinario...".bold().blue());
    println!("{}", "=".repeat(80).blue());

    let options = GenerationOptions { output_dir };
    let result = generate_analysis(&options, Local::now())?;

    println!(
        "{}",
        format!("✅ Análisis generado exitosamente: {}", result.output_path.display())
            .green()
            .bold()
    );
    println!(
        "📊 Tamaño del archivo: {} caracteres",
        sisvet_report::utils::format_thousands(result.summary.characters as u64)
    );

    println!();
    println!("{}", "📋 El documento incluye:".bold());
    for line in &result.summary.contents {
        println!("   {} {}", "✓".green(), line);
    }

    println!();
    println!("🌐 Abre el archivo HTML en tu navegador para ver el análisis completo.");
    println!("{}", "=".repeat(80).blue());

    Ok(())
}

fn print_report() -> Result<()> {
    let report = render_analysis(Local::now())?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.html.as_bytes())
        .context("failed to write report to stdout")?;
    Ok(())
}

fn print_data() -> Result<()> {
    let json = serde_json::to_string_pretty(&analysis_data()).context("failed to serialize report data")?;
    println!("{}", json);
    Ok(())
}
