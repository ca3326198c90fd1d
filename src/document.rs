//! Document format signatures: PDF and plain text.
//!
//! The text rule is whole-buffer: every byte must be printable ASCII, LF, or
//! CR. An empty buffer passes it, so a zero-byte file validates as text.

use std::path::Path;

use crate::error::InvalidArgument;
use crate::signature::{is_printable_text, SignatureRule};
use crate::validator::FormatValidator;
use crate::{Category, FileFormat};

/// PDF magic: "%PDF".
const PDF_MAGIC: &[(usize, u8)] = &[(0, 0x25), (1, 0x50), (2, 0x44), (3, 0x46)];

/// Signature rules for the document category, one row per format.
pub const RULES: &[SignatureRule] = &[
    SignatureRule::magic(FileFormat::Pdf, PDF_MAGIC),
    SignatureRule::text(FileFormat::Txt),
];

/// Check if data starts with the "%PDF" signature.
#[inline]
pub fn is_pdf(data: &[u8]) -> bool {
    RULES[0].matches(data)
}

/// Check if every byte is printable ASCII, LF, or CR. Empty input passes.
#[inline]
pub fn is_txt(data: &[u8]) -> bool {
    is_printable_text(data)
}

/// Validate whether the referenced file is a supported document format,
/// excluding any formats named in `exclude`.
///
/// Returns [`InvalidArgument`] for a `None` file reference; I/O failures
/// degrade to `Ok(false)` with a diagnostic via the default sink.
pub fn is_valid_document(
    file: Option<&Path>,
    exclude: &[FileFormat],
) -> Result<bool, InvalidArgument> {
    FormatValidator::new(Category::Document).is_valid(file, exclude)
}

/// Validate whether the referenced file is a PDF.
pub fn is_valid_pdf(file: Option<&Path>) -> Result<bool, InvalidArgument> {
    FormatValidator::new(Category::Document).is_valid(file, &[FileFormat::Txt])
}

/// Validate whether the referenced file is plain text.
///
/// This checks the text predicate alone: a printable-ASCII file that happens
/// to start with "%PDF" still counts as text here, unlike the category
/// validator, where binary signatures take precedence over the text rule.
pub fn is_valid_txt(file: Option<&Path>) -> Result<bool, InvalidArgument> {
    match FormatValidator::new(Category::Document).fetch(file)? {
        Some(bytes) => Ok(is_txt(&bytes)),
        None => Ok(false),
    }
}
