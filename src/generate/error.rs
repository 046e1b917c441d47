//! Generation error types.

use thiserror::Error;

use super::matcher::VariantOverflow;

/// Fatal conditions during a generation pass.
///
/// Everything else degrades gracefully (ineligible files are skipped,
/// malformed variant names stay plain entries); an overflowing variant
/// index means the matcher's digits-only guarantee was violated, so the
/// pass stops and nothing is written.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("variant index overflow in `{path}`: {source}")]
    VariantIndexOverflow {
        path: String,
        source: VariantOverflow,
    },
}

impl GenerateError {
    pub(crate) fn overflow(path: &str, source: VariantOverflow) -> Self {
        Self::VariantIndexOverflow {
            path: path.to_string(),
            source,
        }
    }
}
