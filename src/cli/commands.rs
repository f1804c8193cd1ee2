//! Command execution for the kusari CLI.

use std::fs;
use std::sync::Arc;

use log::info;

use crate::analysis::unicode_word::UnicodeWordAnalyzer;
use crate::chain::builder::ChainBuilder;
use crate::chain::store::{ChainStore, PersistMode};
use crate::chain::triplet::dump;
use crate::cli::args::{BuildArgs, Command, KusariArgs, StatsArgs};
use crate::error::Result;

/// Execute the parsed CLI command.
pub fn execute_command(args: KusariArgs) -> Result<()> {
    match args.command {
        Command::Build(build_args) => execute_build(build_args),
        Command::Stats(stats_args) => execute_stats(stats_args),
    }
}

fn execute_build(args: BuildArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input)?;
    info!(
        "read corpus {} ({} bytes)",
        args.input.display(),
        text.len()
    );

    let builder = ChainBuilder::new(Arc::new(UnicodeWordAnalyzer::new()))?;
    let freqs = if args.parallel {
        builder.par_frequencies(&text)
    } else {
        builder.frequencies(&text)
    };

    let mode = if args.append {
        PersistMode::Append
    } else {
        PersistMode::Reinitialize
    };
    let store = ChainStore::new(&args.db, &args.schema);
    store.persist(&freqs, mode)?;

    println!(
        "Persisted {} distinct triplets into {}",
        freqs.len(),
        args.db.display()
    );
    if args.show {
        print!("{}", dump(&freqs));
    }
    Ok(())
}

fn execute_stats(args: StatsArgs) -> Result<()> {
    // The schema script is never touched on the read path.
    let store = ChainStore::new(&args.db, "schema.sql");
    let rows = store.rows()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let freqs = store.load()?;
    let total: u64 = rows.iter().map(|r| r.freq).sum();
    println!("Database:         {}", args.db.display());
    println!("Stored rows:      {}", rows.len());
    println!("Distinct triplets: {}", freqs.len());
    println!("Total frequency:  {}", total);
    Ok(())
}
