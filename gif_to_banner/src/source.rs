/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::iter;
use std::path::Path;

use anyhow::Result;
use image::codecs::gif::GifDecoder;
use image::codecs::png::PngDecoder;
use image::codecs::webp::WebPDecoder;
use image::{AnimationDecoder, DynamicImage, Frame, Frames, ImageFormat, ImageReader};

/// Opens `path` and returns its frames in display order.
///
/// The format is sniffed from the file contents. GIF, APNG and animated
/// WebP stream all their frames; every other decodable image yields a
/// single frame with no delay metadata. Frames are decoded lazily, so a
/// frame deep in a corrupt file only fails once the iterator reaches it.
pub fn open_frames(path: &Path) -> Result<Frames<'static>> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let frames = match reader.format() {
        Some(ImageFormat::Gif) => GifDecoder::new(reader.into_inner())?.into_frames(),
        Some(ImageFormat::Png) => {
            let decoder = PngDecoder::new(reader.into_inner())?;
            if decoder.is_apng()? {
                decoder.apng()?.into_frames()
            } else {
                still_frame(DynamicImage::from_decoder(decoder)?)
            }
        }
        Some(ImageFormat::WebP) => {
            let decoder = WebPDecoder::new(reader.into_inner())?;
            if decoder.has_animation() {
                decoder.into_frames()
            } else {
                still_frame(DynamicImage::from_decoder(decoder)?)
            }
        }
        _ => still_frame(reader.decode()?),
    };
    Ok(frames)
}

fn still_frame(image: DynamicImage) -> Frames<'static> {
    Frames::new(Box::new(iter::once(Ok(Frame::new(image.to_rgba8())))))
}
