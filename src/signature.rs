//! Data-driven signature rules: one record per format, evaluated by a single
//! bounds-checked loop instead of a hand-written predicate per format.

use crate::FileFormat;

/// The byte pattern a rule tests against a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Fixed-offset expectations: `(offset, expected byte)` pairs, all of
    /// which must hold.
    Magic(&'static [(usize, u8)]),
    /// Whole-buffer plain text: every byte printable ASCII (0x20..=0x7e),
    /// LF (0x0a), or CR (0x0d). An empty buffer trivially passes.
    Text,
}

/// One signature rule: a format tag, its pattern, and the minimum buffer
/// length needed to evaluate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureRule {
    pub format: FileFormat,
    pub pattern: Pattern,
    pub min_len: usize,
}

impl SignatureRule {
    /// Build a fixed-offset magic rule. `min_len` is the largest offset + 1.
    pub const fn magic(format: FileFormat, pairs: &'static [(usize, u8)]) -> Self {
        let mut min_len = 0;
        let mut i = 0;
        while i < pairs.len() {
            if pairs[i].0 + 1 > min_len {
                min_len = pairs[i].0 + 1;
            }
            i += 1;
        }
        SignatureRule {
            format,
            pattern: Pattern::Magic(pairs),
            min_len,
        }
    }

    /// Build the whole-buffer plain text rule.
    pub const fn text(format: FileFormat) -> Self {
        SignatureRule {
            format,
            pattern: Pattern::Text,
            min_len: 0,
        }
    }

    /// Check the rule against a buffer. A buffer shorter than `min_len` fails
    /// the rule; offsets past the buffer end are never read.
    #[inline]
    pub fn matches(&self, data: &[u8]) -> bool {
        if data.len() < self.min_len {
            return false;
        }
        match self.pattern {
            Pattern::Magic(pairs) => pairs.iter().all(|&(offset, expected)| data[offset] == expected),
            Pattern::Text => is_printable_text(data),
        }
    }
}

/// True when every byte is printable ASCII, LF, or CR. Empty input passes.
#[inline]
pub(crate) fn is_printable_text(data: &[u8]) -> bool {
    data.iter()
        .all(|&b| (0x20..=0x7e).contains(&b) || b == 0x0a || b == 0x0d)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULE: SignatureRule =
        SignatureRule::magic(FileFormat::Pdf, &[(0, 0x25), (1, 0x50), (2, 0x44), (3, 0x46)]);

    #[test]
    fn magic_min_len_is_max_offset_plus_one() {
        assert_eq!(RULE.min_len, 4);
        let sparse = SignatureRule::magic(FileFormat::Wav, &[(3, 0x46), (0, 0x52)]);
        assert_eq!(sparse.min_len, 4);
    }

    #[test]
    fn short_buffer_fails_without_panicking() {
        assert!(!RULE.matches(b""));
        assert!(!RULE.matches(b"%PD"));
        assert!(RULE.matches(b"%PDF"));
    }

    #[test]
    fn text_rule_has_zero_min_len() {
        let rule = SignatureRule::text(FileFormat::Txt);
        assert_eq!(rule.min_len, 0);
        assert!(rule.matches(b""));
        assert!(rule.matches(b"hello\r\nworld"));
        assert!(!rule.matches(&[0x00]));
        assert!(!rule.matches(&[0x7f]));
    }
}
