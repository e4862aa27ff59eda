use thiserror::Error;

/// Errors reported by the checked cursor operations.
///
/// The unchecked paths (`*cursor`, `cursor[k]`) panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("cursor position {position} is out of bounds for length {len}")]
    OutOfBounds { position: isize, len: usize },

    #[error("cursor range {start}..{end} is not within 0..={len}")]
    InvalidRange { start: isize, end: isize, len: usize },
}

pub type Result<T, E = CursorError> = core::result::Result<T, E>;
