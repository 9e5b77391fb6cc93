use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use paint_catalog::SnapshotCache;
use paint_data::ProductSheetLoader;

/// Load a product price sheet from a CSV file into the catalog snapshot.
///
/// The CSV file should have the following columns:
/// - id: Unique product identifier
/// - brand, name: Display strings
/// - finish: Finish name (e.g., Flat/Matte, Satin, Semi-Gloss)
/// - coverage: Square feet per gallon
/// - interior, exterior: true/false applicability flags
/// - residential_price, commercial_price: Dollars per square foot
/// - primer: true when the product is self-priming
/// - primer_note: Free text (may be empty)
#[derive(Parser, Debug)]
#[command(name = "paint-data-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing the product price sheet
    #[arg(short, long)]
    file: PathBuf,

    /// Path of the catalog snapshot file to write
    #[arg(short, long, default_value = "catalog.json")]
    cache: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    println!("Loading product sheet from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = ProductSheetLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    println!("Parsed {} records from CSV", records.len());

    let cache = SnapshotCache::new(&args.cache);
    let written = ProductSheetLoader::load(&cache, records)
        .await
        .context("Failed to write the catalog snapshot")?;

    println!(
        "Successfully wrote {} products to {}.",
        written,
        args.cache.display()
    );

    Ok(())
}
