//! # multiform
//!
//! Identify the true type of a file by inspecting its leading bytes ("magic
//! numbers") rather than trusting its extension, and report whether it matches
//! one of a small, closed set of formats. Callers can exclude specific formats
//! from consideration on a per-call basis.
//!
//! ## Supported formats
//!
//! - **Audio**: MP3 (ID3 tag header), WAV (RIFF)
//! - **Image**: GIF, ICO, PNG, JPEG
//! - **Document**: PDF, plain text (printable ASCII plus LF/CR)
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use multiform::{is_valid_image, FileFormat};
//!
//! // Accept any supported image format except ICO.
//! let ok = is_valid_image(Some(Path::new("logo.png")), &[FileFormat::Ico])?;
//! assert!(ok);
//! # Ok::<(), multiform::InvalidArgument>(())
//! ```
//!
//! ## Behavior notes
//!
//! - Signature matching is bounds-checked: a buffer shorter than a rule's
//!   minimum length fails that rule, it never panics.
//! - I/O failures while fetching a file degrade to `Ok(false)` plus one
//!   diagnostic message; only a missing (`None`) file reference is an error.
//! - An empty buffer counts as valid plain text (a zero-byte file trivially
//!   satisfies "every byte is printable").
//! - Exclusion is categorical: excluding `pdf` on the [`Category::Image`]
//!   validator is a no-op, not an error.
//!
//! For buffer-level checks without any I/O, use the per-format predicates
//! ([`audio::is_mp3`], [`image::is_png`], ...) or
//! [`FormatValidator::matches_bytes`].

pub mod audio;
pub mod document;
mod error;
pub mod image;
pub mod signature;
pub mod sink;
pub mod source;
mod validator;

pub use audio::is_valid_audio;
pub use document::{is_valid_document, is_valid_pdf, is_valid_txt};
pub use error::InvalidArgument;
pub use image::is_valid_image;
pub use signature::{Pattern, SignatureRule};
pub use sink::{DiagnosticSink, FnSink, NoopSink, TracingSink};
pub use source::ByteSource;
pub use validator::FormatValidator;

use std::fmt;
use std::str::FromStr;

/// One supported format, identified by its magic-byte signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FileFormat {
    Mp3,
    Wav,
    Gif,
    Ico,
    Png,
    Jpeg,
    Pdf,
    Txt,
}

impl FileFormat {
    /// Short tag naming this format (e.g. "mp3", "pdf"). Tags are lowercase
    /// and match exactly in exclusion lists and [`FromStr`].
    pub fn tag(self) -> &'static str {
        match self {
            FileFormat::Mp3 => "mp3",
            FileFormat::Wav => "wav",
            FileFormat::Gif => "gif",
            FileFormat::Ico => "ico",
            FileFormat::Png => "png",
            FileFormat::Jpeg => "jpeg",
            FileFormat::Pdf => "pdf",
            FileFormat::Txt => "txt",
        }
    }

    /// Longer label for display (e.g. "MP3 audio").
    pub fn label(self) -> &'static str {
        match self {
            FileFormat::Mp3 => "MP3 audio",
            FileFormat::Wav => "WAV audio",
            FileFormat::Gif => "GIF image",
            FileFormat::Ico => "ICO image",
            FileFormat::Png => "PNG image",
            FileFormat::Jpeg => "JPEG image",
            FileFormat::Pdf => "PDF document",
            FileFormat::Txt => "plain text",
        }
    }

    /// The category this format belongs to.
    pub fn category(self) -> Category {
        match self {
            FileFormat::Mp3 | FileFormat::Wav => Category::Audio,
            FileFormat::Gif | FileFormat::Ico | FileFormat::Png | FileFormat::Jpeg => {
                Category::Image
            }
            FileFormat::Pdf | FileFormat::Txt => Category::Document,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FileFormat {
    type Err = UnknownTag;

    /// Parses an exact lowercase tag ("mp3", "wav", "gif", "ico", "png",
    /// "jpeg", "pdf", "txt").
    fn from_str(s: &str) -> Result<Self, UnknownTag> {
        match s {
            "mp3" => Ok(FileFormat::Mp3),
            "wav" => Ok(FileFormat::Wav),
            "gif" => Ok(FileFormat::Gif),
            "ico" => Ok(FileFormat::Ico),
            "png" => Ok(FileFormat::Png),
            "jpeg" => Ok(FileFormat::Jpeg),
            "pdf" => Ok(FileFormat::Pdf),
            "txt" => Ok(FileFormat::Txt),
            _ => Err(UnknownTag(s.to_string())),
        }
    }
}

/// A string did not name any supported format tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format tag: {0:?}")]
pub struct UnknownTag(pub String);

/// A validation category grouping related formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Audio,
    Image,
    Document,
}

impl Category {
    /// The formats belonging to this category, in rule-table order.
    pub fn formats(self) -> &'static [FileFormat] {
        match self {
            Category::Audio => &[FileFormat::Mp3, FileFormat::Wav],
            Category::Image => &[
                FileFormat::Gif,
                FileFormat::Ico,
                FileFormat::Png,
                FileFormat::Jpeg,
            ],
            Category::Document => &[FileFormat::Pdf, FileFormat::Txt],
        }
    }

    /// The signature rule table for this category.
    pub fn rules(self) -> &'static [SignatureRule] {
        match self {
            Category::Audio => audio::RULES,
            Category::Image => image::RULES,
            Category::Document => document::RULES,
        }
    }

    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            Category::Audio => "audio",
            Category::Image => "image",
            Category::Document => "document",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Detect the format of a buffer from its magic bytes (no extension needed).
///
/// Fixed-offset signatures are tried first, across all categories; the plain
/// text rule runs last because it accepts any printable-ASCII buffer. Returns
/// `None` when nothing matches.
pub fn detect_format(data: &[u8]) -> Option<FileFormat> {
    for category in [Category::Audio, Category::Image, Category::Document] {
        for rule in category.rules() {
            if matches!(rule.pattern, Pattern::Text) {
                continue;
            }
            if rule.matches(data) {
                return Some(rule.format);
            }
        }
    }
    if document::is_txt(data) {
        return Some(FileFormat::Txt);
    }
    None
}
