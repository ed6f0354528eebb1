/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use banner::{BannerFrame, frame_file_name};
use image::Delay;
use log::info;

use crate::source;

/// Decodes `source_path` and writes one banner file per frame into
/// `output_dir`, named `banner_frame_000.bin` upward. Returns the number
/// of frames written.
///
/// The output directory is created only after the source has opened, so a
/// bad source leaves no directory behind. Frames written before a decode
/// failure stay on disk.
pub fn convert(
    source_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    default_delay_ms: u32,
) -> Result<usize> {
    let source_path = source_path.as_ref();
    let output_dir = output_dir.as_ref();

    let frames = source::open_frames(source_path)
        .with_context(|| format!("failed to open source image {}", source_path.display()))?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let mut written = 0;
    for (index, frame) in frames.enumerate() {
        let frame = frame.with_context(|| format!("failed to decode frame {index}"))?;
        let delay_ms = delay_to_ms(frame.delay()).unwrap_or(default_delay_ms);
        let image = frame.into_buffer();
        let (width, height) = image.dimensions();
        let banner_frame = BannerFrame::from_rgba(width, height, delay_ms, image.as_raw())
            .with_context(|| format!("failed to pack frame {index}"))?;

        let path = output_dir.join(frame_file_name(index));
        let file =
            File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        banner_frame
            .write_to(&mut writer)
            .and_then(|_| writer.flush())
            .with_context(|| format!("failed to write {}", path.display()))?;

        info!(
            "converted frame {index}: {width}x{height}, delay={delay_ms}ms -> {}",
            path.display()
        );
        written += 1;
    }

    info!("converted {written} frames to {}", output_dir.display());
    Ok(written)
}

/// A zero delay means the source carried no usable timing for the frame.
fn delay_to_ms(delay: Delay) -> Option<u32> {
    let ms = Duration::from(delay).as_millis();
    if ms == 0 {
        None
    } else {
        Some(u32::try_from(ms).unwrap_or(u32::MAX))
    }
}
