//! Cover art embedding
//!
//! Finds the thumbnail the extractor wrote next to the audio file and stores
//! it as the container's front cover.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::ImageFormat;
use lofty::config::WriteOptions;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::Tag;

/// Thumbnail extensions the extractor may produce, in preference order
pub const THUMBNAIL_EXTENSIONS: &[&str] = &["jpg", "png", "webp"];

/// Find a thumbnail sharing the audio file's base name
pub fn find_thumbnail(audio_path: &Path) -> Option<PathBuf> {
    let parent = audio_path.parent()?;
    let stem = audio_path.file_stem()?.to_str()?;

    THUMBNAIL_EXTENSIONS
        .iter()
        .map(|ext| parent.join(format!("{stem}.{ext}")))
        .find(|path| path.exists())
}

/// Sweep for a sibling thumbnail; embed it and delete it when present.
///
/// Returns the thumbnail path that was consumed, if any. No thumbnail is
/// not an error.
pub fn attach_thumbnail(audio_path: &Path) -> Result<Option<PathBuf>> {
    let Some(thumbnail) = find_thumbnail(audio_path) else {
        return Ok(None);
    };

    embed_cover_art(audio_path, &thumbnail)?;
    std::fs::remove_file(&thumbnail)
        .with_context(|| format!("failed to remove thumbnail {}", thumbnail.display()))?;

    Ok(Some(thumbnail))
}

/// Embed `image_path` as the front cover of `audio_path`.
///
/// The cover slot is single-valued: an existing front cover is replaced,
/// not appended to.
pub fn embed_cover_art(audio_path: &Path, image_path: &Path) -> Result<()> {
    let data = encode_jpeg(image_path)?;
    let picture = Picture::new_unchecked(PictureType::CoverFront, Some(MimeType::Jpeg), None, data);

    let mut tagged_file = Probe::open(audio_path)
        .with_context(|| format!("failed to open {}", audio_path.display()))?
        .read()
        .context("not a taggable audio container")?;

    if let Some(tag) = tagged_file.primary_tag_mut() {
        tag.remove_picture_type(PictureType::CoverFront);
        tag.push_picture(picture);
        tag.save_to_path(audio_path, WriteOptions::default())
            .context("failed to write tag")?;
    } else {
        let mut tag = Tag::new(tagged_file.file_type().primary_tag_type());
        tag.push_picture(picture);
        tag.save_to_path(audio_path, WriteOptions::default())
            .context("failed to write tag")?;
    }

    Ok(())
}

/// Normalize the thumbnail to RGB and re-encode it as JPEG bytes
fn encode_jpeg(image_path: &Path) -> Result<Vec<u8>> {
    let img = image::open(image_path)
        .with_context(|| format!("failed to decode {}", image_path.display()))?;
    let rgb = image::DynamicImage::ImageRgb8(img.to_rgb8());

    let mut buf = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)
        .context("failed to encode cover as JPEG")?;
    Ok(buf)
}
