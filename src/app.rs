// Declare modules
pub mod cli;
pub mod formatter;
pub mod models;
pub mod output;
pub mod prompt;
pub mod scanner;

use anyhow::{bail, Result};
use chrono::Local;
use clap::Parser;
use std::path::{Path, PathBuf};

use self::cli::Cli;
use self::formatter::OutputGenerator;
use self::prompt::prompt;
use self::scanner::Scanner;

/// Drives one session: resolve the folder, validate it, print the report,
/// then offer to save it.
pub fn run() -> Result<()> {
    // 1. Resolve the folder path (CLI argument, else prompt)
    let args = Cli::parse();
    let folder = match args.path {
        Some(path) => path,
        None => PathBuf::from(prompt("Please enter the full path of the folder: ")?),
    };

    // 2. Validate. Both failures are fatal; no retry.
    if !folder.exists() {
        bail!("Folder '{}' not found.", folder.display());
    }
    if !folder.is_dir() {
        bail!("'{}' is not a directory.", folder.display());
    }

    // 3. Scan and print
    let entries = Scanner::new(folder.clone()).scan();
    let report = OutputGenerator::generate_report(&entries);
    log::debug!(
        "Visited {} folders, {} files total",
        entries.len(),
        report.total_files
    );

    println!("\nDirectory contents:\n");
    print!("{}", report.as_text());

    // 4. Offer to save
    let choice = prompt("\nWould you like to save the results to a text file? (y/n): ")?;
    if !choice.eq_ignore_ascii_case("y") {
        println!("\nResults not saved.");
        return Ok(());
    }

    // 5. Resolve the output name and write
    let suggestion = output::suggest_filename(&folder, Local::now());
    println!("\nSuggested output file name: '{}'", suggestion);

    let alternative =
        prompt("Enter an alternative filename (or press Enter to accept the suggestion): ")?;
    let output_file = output::resolve_filename(&alternative, &suggestion);

    // A write failure is not fatal; the report was already shown.
    match output::save_report(Path::new(&output_file), &report) {
        Ok(()) => println!("\nDirectory contents saved to: {}", output_file),
        Err(err) => eprintln!("Error saving file: {:#}", err),
    }

    Ok(())
}
