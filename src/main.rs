use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use wavrev::{reverse_file, WavContainer, WavError, WavHeader};

#[derive(Parser)]
#[command(name = "wavrev", about = "Reverse the audio of a two-channel PCM WAV file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reverse a WAV file's audio and write it to a new file
    Reverse {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Show the header fields of a WAV file
    Info {
        input: PathBuf,
        /// Print the header as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {

        // ── Reverse ──────────────────────────────────────────────────────────
        Commands::Reverse { input, output } => {
            let summary = reverse_file(&input, &output)?;
            println!("Reversed {} → {}", input.display(), output.display());
            println!("  Sample rate {} Hz", summary.sample_rate);
            println!("  Channels    {}", summary.channels);
            println!("  File size   {} B", summary.file_size);
        }

        // ── Info ─────────────────────────────────────────────────────────────
        Commands::Info { input, json } => {
            let bytes = std::fs::read(&input).map_err(WavError::Read)?;
            let container = WavContainer::parse(bytes)?;
            container.validate()?;
            let report = HeaderReport::new(container.header(), container.file_size());

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("── WAV header ───────────────────────────────────────");
                println!("  Path            {}", input.display());
                println!("  File size       {} B", report.file_size);
                println!("  Chunk size      {} B", report.chunk_size);
                println!("  Format tag      {}", report.audio_format);
                println!("  Channels        {}", report.channels);
                println!("  Sample rate     {} Hz", report.sample_rate);
                println!("  Byte rate       {} B/s", report.byte_rate);
                println!("  Block align     {} B", report.block_align);
                println!("  Bits per sample {}", report.bits_per_sample);
                println!("  Data size       {} B", report.data_size);
            }
        }
    }

    Ok(())
}

// ── helpers ──────────────────────────────────────────────────────────────────

/// Display form of a decoded header, with four-byte ids as text.
#[derive(Serialize)]
struct HeaderReport {
    riff: String,
    chunk_size: u32,
    wave: String,
    fmt_id: String,
    fmt_size: u32,
    audio_format: u16,
    channels: u16,
    sample_rate: u32,
    byte_rate: u32,
    block_align: u16,
    bits_per_sample: u16,
    data_id: String,
    data_size: u32,
    file_size: u64,
}

impl HeaderReport {
    fn new(h: &WavHeader, file_size: u64) -> Self {
        Self {
            riff: fourcc(&h.riff),
            chunk_size: h.chunk_size,
            wave: fourcc(&h.wave),
            fmt_id: fourcc(&h.fmt_id),
            fmt_size: h.fmt_size,
            audio_format: h.audio_format,
            channels: h.channels,
            sample_rate: h.sample_rate,
            byte_rate: h.byte_rate,
            block_align: h.block_align,
            bits_per_sample: h.bits_per_sample,
            data_id: fourcc(&h.data_id),
            data_size: h.data_size,
            file_size,
        }
    }
}

fn fourcc(bytes: &[u8; 4]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
