use homework_rust_core::{HomeworkError, HomeworkResult, HomeworkStatus};
use serde_json::Value;

/// Build the status-change notification for one homework record.
pub fn parse_status(homework: &Value) -> HomeworkResult<String> {
    let name = homework
        .get("homework_name")
        .ok_or(HomeworkError::MissingField("homework_name"))?;
    let status = homework
        .get("status")
        .ok_or(HomeworkError::MissingField("status"))?;

    let status: HomeworkStatus = match status.as_str() {
        Some(s) => s.parse().map_err(HomeworkError::UnknownStatus)?,
        None => return Err(HomeworkError::UnknownStatus(status.to_string())),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        display_name(name),
        status.verdict()
    ))
}

/// Text reported to the user when a poll iteration fails
pub fn format_failure(err: &HomeworkError) -> String {
    format!("Program failed: {err}")
}

fn display_name(name: &Value) -> String {
    match name {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_approved_message_is_exact() {
        let hw = json!({"homework_name": "hw1", "status": "approved"});
        assert_eq!(
            parse_status(&hw).unwrap(),
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_every_status_quotes_name_and_appends_verdict() {
        for status in HomeworkStatus::ALL {
            let hw = json!({
                "homework_name": "user__project.zip",
                "status": status.as_str(),
                "reviewer_comment": "ignored",
                "id": 7
            });
            let message = parse_status(&hw).unwrap();
            assert!(message.contains("\"user__project.zip\". "));
            assert!(message.ends_with(status.verdict()));
        }
    }

    #[test]
    fn test_missing_name() {
        let hw = json!({"status": "approved"});
        let err = parse_status(&hw).unwrap_err();
        assert!(matches!(err, HomeworkError::MissingField("homework_name")));
    }

    #[test]
    fn test_missing_status() {
        let hw = json!({"homework_name": "hw1"});
        let err = parse_status(&hw).unwrap_err();
        assert!(matches!(err, HomeworkError::MissingField("status")));
        assert_eq!(err.to_string(), "status not found while parsing homework.");
    }

    #[test]
    fn test_unknown_status() {
        let hw = json!({"homework_name": "hw1", "status": "lost"});
        let err = parse_status(&hw).unwrap_err();
        assert!(matches!(err, HomeworkError::UnknownStatus(ref s) if s == "lost"));
        assert_eq!(err.to_string(), "unknown status = lost.");
    }

    #[test]
    fn test_non_string_status_is_unknown() {
        let hw = json!({"homework_name": "hw1", "status": 3});
        let err = parse_status(&hw).unwrap_err();
        assert!(matches!(err, HomeworkError::UnknownStatus(ref s) if s == "3"));
    }

    #[test]
    fn test_record_that_is_not_an_object() {
        let err = parse_status(&json!("hw1")).unwrap_err();
        assert_eq!(err.kind(), "missing_field");
    }

    #[test]
    fn test_failure_text() {
        let err = HomeworkError::BadStatus(503);
        assert_eq!(
            format_failure(&err),
            "Program failed: Failed get answer from API. Status code = 503"
        );
    }
}
