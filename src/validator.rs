//! Category validator: fetch bytes, filter excluded formats, OR the rules.

use crate::error::InvalidArgument;
use crate::signature::{Pattern, SignatureRule};
use crate::sink::{DiagnosticSink, TracingSink};
use crate::source::ByteSource;
use crate::{Category, FileFormat};

const ERROR_WHILE_READING_FILE: &str = "An error occurred while reading the file:";

/// Validates files against one category's signature rules.
///
/// The diagnostic sink is injected at construction; [`FormatValidator::new`]
/// uses [`TracingSink`], which drops events unless a tracing subscriber is
/// installed. Validators hold no per-call state, so one instance can serve
/// any number of concurrent calls (it is `Send + Sync` when its sink is).
#[derive(Debug, Clone)]
pub struct FormatValidator<S = TracingSink> {
    category: Category,
    sink: S,
}

impl FormatValidator {
    /// Validator for `category` reporting fetch failures via [`TracingSink`].
    pub fn new(category: Category) -> Self {
        FormatValidator {
            category,
            sink: TracingSink,
        }
    }
}

impl<S: DiagnosticSink> FormatValidator<S> {
    /// Validator for `category` with an explicit diagnostic sink.
    pub fn with_sink(category: Category, sink: S) -> Self {
        FormatValidator { category, sink }
    }

    /// The category this validator checks.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Check whether the referenced file matches any non-excluded format in
    /// this category.
    ///
    /// A `None` source is a programmer error and returns
    /// [`InvalidArgument`]. An I/O failure while fetching the bytes is not:
    /// it records one diagnostic (including the underlying error text) and
    /// yields `Ok(false)`.
    pub fn is_valid<B>(
        &self,
        source: Option<&B>,
        exclude: &[FileFormat],
    ) -> Result<bool, InvalidArgument>
    where
        B: ByteSource + ?Sized,
    {
        match self.fetch(source)? {
            Some(bytes) => Ok(self.matches_bytes(&bytes, exclude)),
            None => Ok(false),
        }
    }

    /// The pure aggregation step: OR together every rule in the category
    /// whose format is not excluded.
    ///
    /// Exclusion is categorical; tags from other categories are ignored.
    /// Excluding every format in the category yields `false` (a valid
    /// "excluded everything" outcome, not an error).
    ///
    /// The text rule acts as a fallback: a buffer that carries one of the
    /// category's binary signatures is classified as that format, not as
    /// text, even when that format is excluded. So a `%PDF` buffer with
    /// `pdf` excluded is invalid, while an empty buffer (no signature,
    /// trivially printable) is still valid text.
    pub fn matches_bytes(&self, data: &[u8], exclude: &[FileFormat]) -> bool {
        let rules = self.rules();
        rules
            .iter()
            .filter(|rule| !exclude.contains(&rule.format))
            .any(|rule| match rule.pattern {
                Pattern::Magic(_) => rule.matches(data),
                Pattern::Text => {
                    rule.matches(data)
                        && !rules.iter().any(|r| {
                            matches!(r.pattern, Pattern::Magic(_)) && r.matches(data)
                        })
                }
            })
    }

    /// Fetch the referenced bytes. `None` source is [`InvalidArgument`];
    /// an I/O failure records one diagnostic and yields `Ok(None)`.
    pub(crate) fn fetch<B>(&self, source: Option<&B>) -> Result<Option<Vec<u8>>, InvalidArgument>
    where
        B: ByteSource + ?Sized,
    {
        let source = source.ok_or(InvalidArgument)?;
        match source.read_all() {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) => {
                self.sink
                    .record(&format!("{ERROR_WHILE_READING_FILE} {err}"));
                Ok(None)
            }
        }
    }

    fn rules(&self) -> &'static [SignatureRule] {
        self.category.rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_source_is_invalid_argument() {
        let validator = FormatValidator::new(Category::Audio);
        let err = validator.is_valid(None::<&[u8]>, &[]).unwrap_err();
        assert_eq!(err.to_string(), "The input value cannot be null.");
    }

    #[test]
    fn excluding_everything_is_false_not_an_error() {
        let validator = FormatValidator::new(Category::Audio);
        let mp3 = b"ID3\x04\x00";
        assert!(!validator.matches_bytes(mp3, &[FileFormat::Mp3, FileFormat::Wav]));
    }

    #[test]
    fn foreign_category_tags_are_ignored() {
        let validator = FormatValidator::new(Category::Audio);
        let mp3 = b"ID3\x04\x00";
        assert!(validator.matches_bytes(mp3, &[FileFormat::Pdf, FileFormat::Png]));
    }

    #[test]
    fn duplicate_exclusions_are_irrelevant() {
        let validator = FormatValidator::new(Category::Audio);
        let wav = b"RIFF\x24\x00\x00\x00WAVE";
        assert!(validator.matches_bytes(wav, &[FileFormat::Mp3, FileFormat::Mp3]));
        assert!(!validator.matches_bytes(wav, &[FileFormat::Wav, FileFormat::Wav]));
    }
}
