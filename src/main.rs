//! # chatprep CLI
//!
//! Command-line interface for the chatprep library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatprep::PrepError;
use chatprep::cli::Args;
use chatprep::core::Preprocessor;
use chatprep::format::{MetadataFormat, RecordFormat};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), PrepError> {
    let total_start = Instant::now();
    let config = args.to_config()?;
    let paths = args.output_paths();

    println!("📦 chatprep v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:     {}", args.raw_data_filename.display());
    println!("💾 Records:   {}", paths.records.display());
    println!("🗂️  Metadata:  {}", paths.metadata.display());
    if let Some(ref name) = config.group_name {
        println!("🏷️  Group:     {}", name);
    }
    if !config.sender_map.is_empty() {
        println!("👤 Aliases:   {}", config.sender_map.len());
    }
    if config.strict {
        println!("🛑 Mode:      Strict");
    }
    println!();

    println!("⏳ Preprocessing...");
    let parse_start = Instant::now();
    let report = Preprocessor::new(config).run_path(&args.raw_data_filename)?;
    println!(
        "   Found {} messages in {} lines ({:.2}s)",
        report.records.len(),
        report.raw_lines,
        parse_start.elapsed().as_secs_f64()
    );

    if let Some(dir) = paths.records.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let records_format: RecordFormat = args.records_format.into();
    let metadata_format: MetadataFormat = args.metadata_format.into();
    println!("💾 Writing {} + {}...", records_format, metadata_format);
    let write_start = Instant::now();
    paths.write(&report.records, &report.group_info, records_format, metadata_format)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    let info = &report.group_info;
    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", paths.records.display());

    println!();
    println!("📊 Summary:");
    println!("   Group:     {}", info.group_name);
    println!("   Records:   {}", report.records.len());
    println!("   Merged:    {} continuation lines", report.merged_lines());
    println!("   Events:    {}", info.events.len());
    println!("   Members:   {}", info.members.len());
    if !report.skipped.is_empty() {
        println!("   Skipped:   {} malformed lines", report.skipped.len());
    }
    if let Some(ref sender) = info.most_active_sender {
        println!("   Top:       {}", sender);
    }

    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let lines_per_sec = report.raw_lines as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} lines/sec", lines_per_sec);

    Ok(())
}
