use core::fmt;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, CarouselError>;

/// Which index space an invalid index was checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndexKind {
    /// Pagination dot (1-based).
    Dot,
    /// User-facing slide number (1-based).
    Slide,
    /// Track item index (0-based, includes clone padding).
    Item,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dot => "dot",
            Self::Slide => "slide",
            Self::Item => "item",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("{kind} index {index} is outside {min}..={max}")]
    InvalidIndex {
        kind: IndexKind,
        index: usize,
        min: usize,
        max: usize,
    },
    #[error("carousel has no items")]
    Empty,
}

impl CarouselError {
    pub(crate) fn invalid(kind: IndexKind, index: usize, min: usize, max: usize) -> Self {
        Self::InvalidIndex {
            kind,
            index,
            min,
            max,
        }
    }
}
