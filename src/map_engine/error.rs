use crate::map_engine::constants::MapInt;

/// Errors surfaced by table construction and the `put`/`get` operations.
///
/// Every failure is returned synchronously to the direct caller; nothing is
/// retried or swallowed inside the engine. Construction errors are fatal for
/// the table, per-call errors leave the block untouched.
#[derive(Debug)]
pub enum Error {
    /// Caller-declared block length does not match the handle's real length
    SizeMismatch { declared: usize, actual: usize },

    /// Block too small to hold even one slot
    InsufficientCapacity { len: usize },

    /// Key above the largest usable key (the type maximum is reserved)
    KeyAboveMax { max: MapInt },

    /// Key below the smallest usable key (the type minimum is reserved)
    KeyBelowMin { min: MapInt },

    /// No empty or matching slot exists across the entire probe sequence
    CapacityExhausted,

    /// Raw block access failed
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SizeMismatch { declared, actual } => write!(
                f,
                "declared block size {declared} does not match real size {actual}"
            ),
            Self::InsufficientCapacity { len } => {
                write!(f, "block of {len} bytes cannot hold a single slot")
            }
            Self::KeyAboveMax { max } => write!(f, "max usable key is {max}"),
            Self::KeyBelowMin { min } => write!(f, "min usable key is {min}"),
            Self::CapacityExhausted => write!(f, "table capacity is exhausted"),
            Self::Io(e) => write!(f, "block access failed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Table result
pub type Result<T> = std::result::Result<T, Error>;
