use thiserror::Error;

/// Failures reported by graph construction, loading and route queries.
///
/// An unreachable destination is not an error: queries return `Ok(None)`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("invalid weight {weight} on edge {from} -- {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("total edge weight overflows at edge {from} -- {to}")]
    WeightOverflow { from: String, to: String },

    #[error("self-loop on node {0}")]
    SelfLoop(String),

    #[error("unknown strategy: {0} (expected `scan` or `heap`)")]
    UnknownStrategy(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde_json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "bincode")]
    #[error(transparent)]
    Encode(#[from] bincode::error::EncodeError),

    #[cfg(feature = "bincode")]
    #[error(transparent)]
    Decode(#[from] bincode::error::DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn unknown_node<N: std::fmt::Debug>(node: &N) -> Self {
        Error::UnknownNode(format!("{node:?}"))
    }
}
