//! Error types for OBJ loading.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for OBJ loading operations.
pub type ObjResult<T> = Result<T, ObjError>;

/// Errors that can occur while loading an OBJ model.
///
/// Under the default strict options every variant aborts the whole
/// parse: the caller never receives a partially built model. The
/// record-scoped variants carry the 1-based line number of the offending
/// record, and where feasible the record text as it appeared in the
/// source.
#[derive(Debug, Error)]
pub enum ObjError {
    /// The source could not be opened or read.
    #[error("source unavailable: {source}")]
    SourceUnavailable {
        /// Path of the source, when it was opened from one.
        path: Option<PathBuf>,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A record field failed to parse, or a record is structurally invalid.
    #[error("line {line}: malformed record `{record}`")]
    MalformedRecord {
        /// 1-based line number of the offending record.
        line: usize,
        /// The record text as it appeared in the source.
        record: String,
    },

    /// A face record has a corner count other than three.
    #[error("line {line}: face has {corners} corners, only triangles are supported")]
    UnsupportedFaceArity {
        /// 1-based line number of the offending record.
        line: usize,
        /// Number of corners the face actually has.
        corners: usize,
    },

    /// A face corner references an attribute its pool does not hold.
    ///
    /// Pools grow strictly in file order, so this covers forward
    /// references as well as the out-of-range index 0.
    #[error("line {line}: {pool} index {index} is out of range (pool holds {len})")]
    DanglingReference {
        /// 1-based line number of the offending record.
        line: usize,
        /// Which attribute pool the reference points into.
        pool: PoolKind,
        /// The 1-based index as written in the source.
        index: usize,
        /// Entries the pool held when the face was read.
        len: usize,
    },
}

impl ObjError {
    /// Create a `MalformedRecord` error for the given line.
    pub(crate) fn malformed(line: usize, record: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            record: record.into(),
        }
    }

    /// Whether the error is scoped to a single record.
    ///
    /// Record-scoped errors can be skipped by a lenient parse; a source
    /// failure cannot, since nothing further can be read.
    #[must_use]
    pub fn is_record_error(&self) -> bool {
        !matches!(self, Self::SourceUnavailable { .. })
    }
}

/// The attribute pool a face corner references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKind {
    /// The `v` position pool.
    Position,
    /// The `vt` texture coordinate pool.
    Texcoord,
    /// The `vn` normal pool.
    Normal,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position => write!(f, "position"),
            Self::Texcoord => write!(f, "texture coordinate"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_line_numbers() {
        let error = ObjError::malformed(7, "v one two three");
        assert_eq!(
            error.to_string(),
            "line 7: malformed record `v one two three`"
        );

        let error = ObjError::UnsupportedFaceArity {
            line: 12,
            corners: 4,
        };
        assert_eq!(
            error.to_string(),
            "line 12: face has 4 corners, only triangles are supported"
        );
    }

    #[test]
    fn dangling_reference_names_the_pool() {
        let error = ObjError::DanglingReference {
            line: 3,
            pool: PoolKind::Texcoord,
            index: 9,
            len: 2,
        };
        assert_eq!(
            error.to_string(),
            "line 3: texture coordinate index 9 is out of range (pool holds 2)"
        );
    }

    #[test]
    fn record_errors_are_skippable() {
        assert!(ObjError::malformed(1, "vn x").is_record_error());
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = ObjError::SourceUnavailable {
            path: None,
            source,
        };
        assert!(!error.is_record_error());
    }
}
