use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("invalid argument: length {n} exceeds sequence of {len} elements")]
    InvalidArgument { len: usize, n: usize },
}
