/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Convert an animated image into banner frame files.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Source image: GIF, APNG or animated WebP (a still image gives one frame)
    source: PathBuf,

    /// Directory the frame files are written into
    #[arg(default_value = "banner_frames")]
    output_dir: PathBuf,

    /// Delay for frames that carry no timing metadata, in milliseconds
    #[arg(default_value_t = 100)]
    default_delay_ms: u32,
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let args = Args::parse();
    gif_to_banner::convert(&args.source, &args.output_dir, args.default_delay_ms)?;
    Ok(())
}
