//! Image format signatures: GIF, ICO, PNG, and JPEG.

use std::path::Path;

use crate::error::InvalidArgument;
use crate::signature::SignatureRule;
use crate::validator::FormatValidator;
use crate::{Category, FileFormat};

/// GIF magic: "GIF8" (covers GIF87a and GIF89a).
const GIF_MAGIC: &[(usize, u8)] = &[(0, 0x47), (1, 0x49), (2, 0x46), (3, 0x38)];
/// ICO magic: reserved word 0x0000 then image type 1.
const ICO_MAGIC: &[(usize, u8)] = &[(0, 0x00), (1, 0x00), (2, 0x01)];
/// PNG magic: 0x89 "PNG".
const PNG_MAGIC: &[(usize, u8)] = &[(0, 0x89), (1, 0x50), (2, 0x4E), (3, 0x47)];
/// JPEG magic: SOI marker plus the next marker prefix.
const JPEG_MAGIC: &[(usize, u8)] = &[(0, 0xFF), (1, 0xD8), (2, 0xFF)];

/// Signature rules for the image category, one row per format.
pub const RULES: &[SignatureRule] = &[
    SignatureRule::magic(FileFormat::Gif, GIF_MAGIC),
    SignatureRule::magic(FileFormat::Ico, ICO_MAGIC),
    SignatureRule::magic(FileFormat::Png, PNG_MAGIC),
    SignatureRule::magic(FileFormat::Jpeg, JPEG_MAGIC),
];

/// Check if data starts with the GIF "GIF8" signature.
#[inline]
pub fn is_gif(data: &[u8]) -> bool {
    RULES[0].matches(data)
}

/// Check if data starts with the ICO header.
#[inline]
pub fn is_ico(data: &[u8]) -> bool {
    RULES[1].matches(data)
}

/// Check if data starts with the PNG signature.
#[inline]
pub fn is_png(data: &[u8]) -> bool {
    RULES[2].matches(data)
}

/// Check if data starts with the JPEG SOI marker.
#[inline]
pub fn is_jpeg(data: &[u8]) -> bool {
    RULES[3].matches(data)
}

/// Validate whether the referenced file is a supported image format,
/// excluding any formats named in `exclude`.
///
/// Returns [`InvalidArgument`] for a `None` file reference; I/O failures
/// degrade to `Ok(false)` with a diagnostic via the default sink.
pub fn is_valid_image(
    file: Option<&Path>,
    exclude: &[FileFormat],
) -> Result<bool, InvalidArgument> {
    FormatValidator::new(Category::Image).is_valid(file, exclude)
}
