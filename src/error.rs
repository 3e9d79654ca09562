/// Errors returned by the fallible operations of an [`ArrayList`](crate::ArrayList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// The requested position, after negative wraparound, does not address
    /// a valid slot for the operation.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    /// No element equal to the requested value was found.
    #[error("value not in the list")]
    ValueNotFound,
    /// The operation needs at least one element.
    #[error("list is empty")]
    Empty,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
