//! Configuration for the humanwords command-line tool.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: it then runs the demo mode on
//! generated sample data with a time-based seed. All resolved settings can
//! be printed so runs are reproducible.

use humanwords_core::{DEFAULT_MAX_DECODE_WORDS, DEFAULT_MAX_ENCODE_BYTES, DEFAULT_WORDLIST_VERSION};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// What the tool should do this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Encode bytes (file or generated sample) to words
    Encode,
    /// Decode a word string file back to bytes
    Decode,
    /// Round-trip generated sample data and verify it
    Demo,
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Selected mode
    pub mode: Mode,

    // === Files ===
    /// Input file path (None = generate sample / not applicable)
    pub input_file: Option<PathBuf>,

    /// Output file path (None = stdout for encode, ./out.bin for decode)
    pub output_file: Option<PathBuf>,

    // === Codec ===
    /// Wordlist version
    pub version: u32,

    /// Whether encode appends a checksum frame
    pub checksum: bool,

    /// Encode size limit in bytes
    pub max_bytes: usize,

    /// Decode size limit in words
    pub max_words: usize,

    // === Sample generation ===
    /// Seed for sample data (explicit or time-based)
    pub seed: u64,

    /// Size of generated sample data in bytes
    pub sample_bytes: usize,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// The first argument may be a mode (`encode`, `decode`, `demo`);
    /// without one the tool runs the demo. If `--seed` is provided, sample
    /// generation is fully deterministic.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut mode = Mode::Demo;
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut version: Option<u32> = None;
        let mut checksum = false;
        let mut max_bytes: Option<usize> = None;
        let mut max_words: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_config = false;

        let mut i = 0;
        if let Some(first) = args.first() {
            match first.as_str() {
                "encode" => {
                    mode = Mode::Encode;
                    i = 1;
                }
                "decode" => {
                    mode = Mode::Decode;
                    i = 1;
                }
                "demo" => {
                    mode = Mode::Demo;
                    i = 1;
                }
                _ => {}
            }
        }

        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--version" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--version requires a number".to_string());
                    }
                    version = Some(args[i].parse().map_err(|_| "invalid version")?);
                }
                "--checksum" => {
                    checksum = true;
                }
                "--max-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--max-bytes requires a number".to_string());
                    }
                    max_bytes = Some(args[i].parse().map_err(|_| "invalid max-bytes")?);
                }
                "--max-words" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--max-words requires a number".to_string());
                    }
                    max_words = Some(args[i].parse().map_err(|_| "invalid max-words")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        if mode == Mode::Decode && input_file.is_none() {
            return Err("decode requires --in <PATH>".to_string());
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        // Randomized-but-reproducible sample size
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let config = Config {
            mode,
            input_file,
            output_file,
            version: version.unwrap_or(DEFAULT_WORDLIST_VERSION),
            checksum,
            max_bytes: max_bytes.unwrap_or(DEFAULT_MAX_ENCODE_BYTES),
            max_words: max_words.unwrap_or(DEFAULT_MAX_DECODE_WORDS),
            seed,
            sample_bytes: sample_bytes.unwrap_or_else(|| rng.gen_range(64..=2048)),
            print_config,
        };

        Ok(config)
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Mode: {:?}", self.mode);
        println!(
            "Input file:  {}",
            self.input_file
                .as_deref()
                .map_or("(generate sample)", |p| p.to_str().unwrap_or("?"))
        );
        println!(
            "Output file: {}",
            self.output_file
                .as_deref()
                .map_or("(stdout)", |p| p.to_str().unwrap_or("?"))
        );
        println!();
        println!("Wordlist version: {}", self.version);
        println!("Checksum: {}", self.checksum);
        println!("Max encode bytes: {}", self.max_bytes);
        println!("Max decode words: {}", self.max_words);
        println!();
        println!("Seed: {}", self.seed);
        println!("Sample size: {} bytes", self.sample_bytes);
        println!();
    }
}

fn print_help() {
    println!("humanwords: encode binary data as dictionary words, and back");
    println!();
    println!("USAGE:");
    println!("    humanwords [encode|decode|demo] [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>           Input file (encode default: generate sample)");
    println!("    --out <PATH>          Output file (encode default: stdout)");
    println!("    --version <N>         Wordlist version (default: 1)");
    println!("    --checksum            Append a CRC32 checksum frame when encoding");
    println!("    --max-bytes <N>       Encode size limit (default: 10240)");
    println!("    --max-words <N>       Decode size limit (default: 1024)");
    println!();
    println!("    --seed <N>            Random seed for sample data");
    println!("    --sample-bytes <N>    Sample size (default: random 64-2048)");
    println!();
    println!("    --print-config        Print resolved configuration");
    println!("    --help, -h            Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    humanwords                                 # Demo with random sample");
    println!("    humanwords demo --seed 42                  # Deterministic demo");
    println!("    humanwords encode --in file.bin --checksum # File to words on stdout");
    println!("    humanwords decode --in words.txt --out file.bin");
    println!();
}
