use thiserror::Error;

/// Errors raised while building a sequence database.
///
/// Mining itself never fails; every parameter combination yields a
/// (possibly empty) result list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixSpanError {
    #[error("line {line}: invalid symbol {token:?}")]
    Parse { line: usize, token: String },

    #[error("matrix of {cells} cells cannot be split into rows of width {width}")]
    ShapeMismatch { cells: usize, width: usize },
}
