pub(crate) type DataregResult<T> = Result<T, DataregError>;

macro_rules! bail {
    ($($arg:tt)*) => {{
        return Err($crate::error::DataregError::Other(format!($($arg)*)));
    }};
}

pub(crate) use bail;

#[derive(Debug, thiserror::Error)]
pub(crate) enum DataregError {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),

    #[error("index {index} out of range (1..={len})")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid dataset record: {0}")]
    InvalidRecord(String),

    #[error("{0}")]
    Other(String),
}

impl DataregError {
    #[inline]
    pub(crate) fn other<T: ToString>(s: T) -> Self {
        Self::Other(s.to_string())
    }
}
