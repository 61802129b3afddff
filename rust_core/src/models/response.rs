//! Shape checks for the homework API response body.

use serde_json::Value;

use crate::error::{json_type_name, ShapeError};

/// Check that the decoded body is an object carrying a `homeworks` list.
///
/// Returns the list without copying it.
pub fn check_response(response: &Value) -> Result<&[Value], ShapeError> {
    let map = response
        .as_object()
        .ok_or_else(|| ShapeError::NotAMapping(json_type_name(response)))?;

    let homeworks = map.get("homeworks").ok_or(ShapeError::MissingHomeworks)?;

    homeworks
        .as_array()
        .map(|list| list.as_slice())
        .ok_or_else(|| ShapeError::HomeworksNotAList(json_type_name(homeworks)))
}

/// Server timestamp to use as the next poll cursor, if present
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}
