//! Audio format signatures: MP3 (ID3 tag header) and WAV (RIFF).

use std::path::Path;

use crate::error::InvalidArgument;
use crate::signature::SignatureRule;
use crate::validator::FormatValidator;
use crate::{Category, FileFormat};

/// MP3 magic: "ID3" tag header.
const MP3_MAGIC: &[(usize, u8)] = &[(0, 0x49), (1, 0x44), (2, 0x33)];
/// WAV magic: "RIFF" chunk header.
const WAV_MAGIC: &[(usize, u8)] = &[(0, 0x52), (1, 0x49), (2, 0x46), (3, 0x46)];

/// Signature rules for the audio category, one row per format.
pub const RULES: &[SignatureRule] = &[
    SignatureRule::magic(FileFormat::Mp3, MP3_MAGIC),
    SignatureRule::magic(FileFormat::Wav, WAV_MAGIC),
];

/// Check if data starts with the MP3 "ID3" tag header.
#[inline]
pub fn is_mp3(data: &[u8]) -> bool {
    RULES[0].matches(data)
}

/// Check if data starts with the WAV "RIFF" header.
#[inline]
pub fn is_wav(data: &[u8]) -> bool {
    RULES[1].matches(data)
}

/// Validate whether the referenced file is a supported audio format,
/// excluding any formats named in `exclude`.
///
/// Returns [`InvalidArgument`] for a `None` file reference; I/O failures
/// degrade to `Ok(false)` with a diagnostic via the default sink.
pub fn is_valid_audio(
    file: Option<&Path>,
    exclude: &[FileFormat],
) -> Result<bool, InvalidArgument> {
    FormatValidator::new(Category::Audio).is_valid(file, exclude)
}
