//! Error taxonomy shared by the API client, validator, formatter and notifier.

/// Shape problems found while validating a decoded API response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("Response is {0}, but object expected.")]
    NotAMapping(&'static str),

    #[error("homeworks not in the response")]
    MissingHomeworks,

    #[error("homeworks is {0}, but list expected.")]
    HomeworksNotAList(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum HomeworkError {
    #[error("Missing tokens: {}", .0.join(", "))]
    CredentialMissing(Vec<String>),

    #[error("Connection failed: {0}")]
    ConnectionFailure(String),

    #[error("Failed get answer from API. Status code = {0}")]
    BadStatus(u16),

    #[error("Failed to decode JSON response: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("{0} not found while parsing homework.")]
    MissingField(&'static str),

    #[error("unknown status = {0}.")]
    UnknownStatus(String),

    #[error("Message delivery failed: {0}")]
    NotifyFailure(String),
}

impl HomeworkError {
    /// Stable label used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            HomeworkError::CredentialMissing(_) => "credential_missing",
            HomeworkError::ConnectionFailure(_) => "connection_failure",
            HomeworkError::BadStatus(_) => "bad_status",
            HomeworkError::MalformedBody(_) => "malformed_body",
            HomeworkError::Shape(_) => "shape_error",
            HomeworkError::MissingField(_) => "missing_field",
            HomeworkError::UnknownStatus(_) => "unknown_status",
            HomeworkError::NotifyFailure(_) => "notify_failure",
        }
    }
}

pub type HomeworkResult<T> = Result<T, HomeworkError>;

/// JSON type name for error messages
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_missing_lists_all_names() {
        let err = HomeworkError::CredentialMissing(vec![
            "PRACTICUM_TOKEN".to_string(),
            "TELEGRAM_CHAT_ID".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Missing tokens: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
        assert_eq!(err.kind(), "credential_missing");
    }

    #[test]
    fn test_shape_error_is_transparent() {
        let err: HomeworkError = ShapeError::HomeworksNotAList("object").into();
        assert_eq!(err.to_string(), "homeworks is object, but list expected.");
        assert_eq!(err.kind(), "shape_error");
    }

    #[test]
    fn test_bad_status_message() {
        let err = HomeworkError::BadStatus(503);
        assert_eq!(
            err.to_string(),
            "Failed get answer from API. Status code = 503"
        );
    }
}
