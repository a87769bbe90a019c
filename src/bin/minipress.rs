use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use minipress::frame::{self, CodecDetail};
use minipress::lz77::DEFAULT_WINDOW;
use minipress::Codec;

#[derive(Parser, Debug)]
#[command(name = "minipress")]
#[command(about = "Compress and decompress files with classical Huffman or LZ77 codecs")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CodecArg {
    Huffman,
    Lz77,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file into a self-contained frame
    Compress {
        /// Input file
        #[arg(short, long)]
        input: PathBuf,

        /// Output frame file
        #[arg(short, long)]
        output: PathBuf,

        /// Codec to use
        #[arg(short, long, value_enum, default_value = "huffman")]
        codec: CodecArg,

        /// LZ77 look-back window in bytes (1-65535)
        #[arg(long, default_value_t = DEFAULT_WINDOW)]
        window: usize,

        /// Show timing and ratio statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decompress a frame (codec auto-detected from magic bytes)
    Decompress {
        /// Input frame file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Show timing statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print a frame's header without decoding it
    Info {
        /// Input frame file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match args.command {
        Command::Compress { input, output, codec, window, verbose } => {
            let data = fs::read(&input)?;

            let start = std::time::Instant::now();
            let framed = match codec {
                CodecArg::Huffman => frame::compress_huffman(&data)?,
                CodecArg::Lz77 => frame::compress_lz77(&data, window)?,
            };
            let elapsed = start.elapsed();

            fs::write(&output, &framed)?;

            if verbose {
                eprintln!("Compression complete:");
                eprintln!("  Input bytes:      {}", data.len());
                eprintln!("  Output bytes:     {}", framed.len());
                eprintln!("  Ratio:            {:.3}", framed.len() as f64 / data.len() as f64);
                eprintln!("  Time:             {:.2?}", elapsed);
                eprintln!(
                    "  Throughput:       {:.1} MB/s",
                    data.len() as f64 / elapsed.as_secs_f64() / 1_000_000.0
                );
            }
        }

        Command::Decompress { input, output, verbose } => {
            let framed = fs::read(&input)?;

            let start = std::time::Instant::now();
            let data = match frame::detect(&framed) {
                Some(Codec::Huffman) => frame::decompress_huffman(&framed)?,
                Some(Codec::Lz77) => frame::decompress_lz77(&framed)?,
                None => return Err("input is not a minipress frame".into()),
            };
            let elapsed = start.elapsed();

            fs::write(&output, &data)?;

            if verbose {
                eprintln!("Decompression complete:");
                eprintln!("  Input bytes:      {}", framed.len());
                eprintln!("  Output bytes:     {}", data.len());
                eprintln!("  Time:             {:.2?}", elapsed);
                eprintln!(
                    "  Throughput:       {:.1} MB/s",
                    data.len() as f64 / elapsed.as_secs_f64() / 1_000_000.0
                );
            }
        }

        Command::Info { input } => {
            let framed = fs::read(&input)?;
            let info = frame::inspect(&framed)?;

            println!("Codec:            {}", info.codec);
            println!("Decoded length:   {} bytes", info.decoded_len);
            println!("Frame length:     {} bytes", framed.len());
            match info.detail {
                CodecDetail::Huffman { bit_len, distinct_symbols } => {
                    println!("Payload bits:     {}", bit_len);
                    println!("Distinct symbols: {}", distinct_symbols);
                }
                CodecDetail::Lz77 { token_count, window_size } => {
                    println!("Tokens:           {}", token_count);
                    println!("Window size:      {}", window_size);
                }
            }
        }
    }

    Ok(())
}
