use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalogue answered with something other than 200.
    ///
    /// The body is kept verbatim; Terrascope puts its diagnostics there.
    #[error("catalogue returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
}
