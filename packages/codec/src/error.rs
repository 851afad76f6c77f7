use thiserror::Error;

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Inbound message could not be turned into a well-formed value.
///
/// Decoding never returns a partial bundle: any nested failure fails the
/// whole call with the path of the offending item.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field `{field}` in {context}")]
    MissingField { context: String, field: String },

    #[error("Unknown element variant {0:?}")]
    UnknownVariant(String),

    #[error("Unknown event type {0:?}")]
    UnknownEventType(String),

    #[error("Unknown operation type {0:?}")]
    UnknownOperationType(String),

    #[error("Type mismatch at {path}: expected {expected}")]
    TypeMismatch { path: String, expected: &'static str },

    #[error("Invalid {context}: {source}")]
    Invalid {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub fn missing_field(context: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            context: context.into(),
            field: field.into(),
        }
    }

    pub fn type_mismatch(path: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected,
        }
    }

    pub fn invalid(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Invalid {
            context: context.into(),
            source,
        }
    }
}

/// Outbound value could not be written. Internally built records never
/// trigger this; seeing it means an invariant was broken upstream.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Cannot serialize {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl EncodeError {
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }
}
