use reqwest::StatusCode;
use thiserror::Error;

/// All the ways a request can fail.
///
/// The first three variants cover the transport: the request never
/// completed, completed with a status other than `200 OK`, or completed
/// with a body that is not JSON. The rest cover decoding: the envelope
/// key was absent, the payload was the wrong kind of JSON container, or
/// a field did not match its documented type.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure reported by `reqwest`.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The server replied with a status code other than `200 OK`.
    #[error("unexpected status code {0}")]
    UnexpectedStatus(StatusCode),

    /// The server replied with a content type other than
    /// `application/json; charset=utf-8`, or with none at all.
    #[error("unexpected content type {0:?}")]
    UnexpectedContentType(Option<String>),

    /// The response envelope does not carry the expected payload key.
    #[error("response envelope is missing the `{0}` key")]
    MissingEnvelope(&'static str),

    /// The payload is not the JSON container the route promises.
    #[error("expected the payload to be {expected}, found {found}")]
    UnexpectedShape {
        /// The container kind the route promises, `an object` or `an array`.
        expected: &'static str,
        /// The JSON kind that actually arrived.
        found: &'static str,
    },

    /// The payload did not decode into the typed model.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
