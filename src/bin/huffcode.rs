use std::fs;
use std::path::PathBuf;

use clap::Parser;
use huffcode::{compress_with_config, EncodeConfig, BITS_PER_SYMBOL};
use log::*;

/// Prints the huffman codes, the size comparison and optionally the tree of a text.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Text to encode
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    text: Option<String>,
    /// Read the text from a file
    #[arg(long)]
    file: Option<PathBuf>,
    /// Width of one uncoded symbol, the baseline of the size comparison
    #[arg(long, default_value_t = BITS_PER_SYMBOL)]
    bits_per_symbol: u32,
    /// Print the tree as graphviz dot
    #[arg(long)]
    dot: bool,
    /// Print the encoded bit sequence
    #[arg(long)]
    bits: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let text = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => args.text.clone().unwrap_or_default(),
    };
    info!("encoding {} chars", text.chars().count());

    let config = EncodeConfig {
        bits_per_symbol: args.bits_per_symbol,
    };
    let compressed = compress_with_config(&text, &config)?;

    println!("{:<10} {:>10}  {}", "Character", "Frequency", "Code");
    for row in compressed.codes.rows(&compressed.counts) {
        println!(
            "{:<10} {:>10}  {}",
            row.symbol.escape_debug().to_string(),
            row.count,
            row.code
        );
    }

    let stats = &compressed.result.stats;
    println!();
    println!(
        "Original size:   {} bits ({} chars * {} bits/char)",
        stats.original_bits, stats.num_symbols, stats.bits_per_symbol
    );
    println!(
        "Compressed size: {} bits (Savings: {} bits | {:.2}%)",
        stats.compressed_bits,
        stats.saved_bits(),
        stats.space_saving()
    );
    println!(
        "Average code length: {:.3} bits/char",
        stats.average_code_length()
    );

    if args.bits {
        println!();
        println!("{}", compressed.result.bits);
    }
    if args.dot {
        if let Some(tree) = &compressed.tree {
            println!();
            print!("{}", tree);
        }
    }
    Ok(())
}
