//! humanwords: command-line front end for the humanwords codec.
//!
//! Three modes:
//! - `encode`: file bytes (or generated sample) -> word string
//! - `decode`: word string file -> file bytes
//! - `demo`: generate sample data, round-trip it with a checksum, verify

mod config;
mod input_gen;

use config::{Config, Mode};
use humanwords_core::{decode_str, encode, DecodeOptions, EncodeOptions};
use std::fs;
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    let result = match config.mode {
        Mode::Encode => run_encode(&config),
        Mode::Decode => run_decode(&config),
        Mode::Demo => run_demo(&config),
    };

    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn encode_options(config: &Config) -> EncodeOptions {
    EncodeOptions {
        version: config.version,
        checksum: config.checksum,
        max_bytes: config.max_bytes,
    }
}

fn decode_options(config: &Config) -> DecodeOptions {
    DecodeOptions {
        version: config.version,
        max_words: config.max_words,
    }
}

fn run_encode(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let data = match &config.input_file {
        Some(path) => fs::read(path)?,
        None => {
            eprintln!(
                "no --in given, encoding {} generated sample bytes (seed {})",
                config.sample_bytes, config.seed
            );
            input_gen::generate_sample_data(config.seed, config.sample_bytes)
        }
    };

    let words = encode(&data, &encode_options(config))?;
    let rendered = words.join(" ");

    match &config.output_file {
        Some(path) => fs::write(path, format!("{rendered}\n"))?,
        None => println!("{rendered}"),
    }

    eprintln!("encoded {} bytes as {} words", data.len(), words.len());
    Ok(())
}

fn run_decode(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Presence of --in is enforced at argument parsing
    let input = config
        .input_file
        .as_deref()
        .ok_or("decode requires --in")?;
    let text = fs::read_to_string(input)?;

    let data = decode_str(&text, &decode_options(config))?;

    let output = config
        .output_file
        .clone()
        .unwrap_or_else(|| PathBuf::from("./out.bin"));
    fs::write(&output, &data)?;

    eprintln!("decoded {} bytes to {}", data.len(), output.display());
    Ok(())
}

fn run_demo(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== humanwords demo ===");
    println!("Seed: {}", config.seed);
    println!("Sample size: {} bytes", config.sample_bytes);
    println!();

    let data = input_gen::generate_sample_data(config.seed, config.sample_bytes);

    let options = EncodeOptions {
        version: config.version,
        checksum: true,
        max_bytes: config.max_bytes,
    };
    let words = encode(&data, &options)?;
    let rendered = words.join(" ");

    let preview: Vec<&str> = words.iter().take(12).copied().collect();
    println!("First words: {} ...", preview.join(" "));
    println!();
    println!("Input bytes:  {}", data.len());
    println!("Output words: {}", words.len());
    println!("Output chars: {}", rendered.len());
    println!(
        "Expansion:    {:.2}x",
        rendered.len() as f64 / data.len().max(1) as f64
    );

    let decode_opts = DecodeOptions {
        version: config.version,
        max_words: words.len(),
    };
    let decoded = decode_str(&rendered, &decode_opts)?;

    if decoded != data {
        return Err("round trip mismatch: decoded data differs from input".into());
    }

    println!();
    println!("Round trip verified: checksum and payload match");
    Ok(())
}
