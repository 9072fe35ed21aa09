use std::collections::TryReserveError;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeapError {
    /// `remove_max` on a heap with no elements.
    Empty,
    /// Growing the backing storage failed. `requested` is the target slot count when known.
    AllocationFailure { requested: Option<usize> },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::AllocationFailure {
                requested: Some(requested),
            } => write!(f, "failed to grow heap storage to {} slots", requested),
            HeapError::AllocationFailure { requested: None } => {
                write!(f, "failed to grow heap storage")
            }
        }
    }
}

impl std::error::Error for HeapError {}

impl From<TryReserveError> for HeapError {
    // `TryReserveError` does not expose the requested size.
    fn from(_: TryReserveError) -> Self {
        HeapError::AllocationFailure { requested: None }
    }
}
