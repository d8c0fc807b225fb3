use thiserror::Error;

/// This error is raised by the positional-access methods of
/// [`Dataset`](crate::Dataset).
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The given offset is outside of the `[0, len)` range of the dataset.
    #[error("The index {index} is out of range for a dataset of size {len}")]
    IndexOutOfRange {
        /// The offending offset.
        index: usize,
        /// The size of the dataset at the time of the access.
        len: usize,
    },
}
