use serde::{Deserialize, Serialize};

/// Form body for every instructor API action. Fields the action does not use
/// are omitted from the encoded body, matching the server's optional
/// parameters.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProblemActionPayload {
    pub problem_to_reset: String,
    pub unique_student_identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_module: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_if_higher: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
}

/// One dispatch's worth of page context: which panel to report into and the
/// message templates for either outcome. `{user}` in `success_msg` is
/// replaced with the resolved username.
#[derive(Debug, Clone, Default)]
pub struct ActionDescriptor {
    pub location_name: String,
    pub success_msg: Option<String>,
    pub error_msg: Option<String>,
}

/// Error detail the instructor API returns alongside a failure status.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unused_payload_fields_are_absent_from_form_encoding() {
        let payload = ProblemActionPayload {
            problem_to_reset: "i4x://edX/demo/problem/test_loc".to_string(),
            unique_student_identifier: "userman".to_string(),
            delete_module: Some(false),
            only_if_higher: None,
            score: None,
        };
        let encoded = serde_json::to_value(&payload).unwrap();
        let object = encoded.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["delete_module"], false);
        assert!(!object.contains_key("only_if_higher"));
        assert!(!object.contains_key("score"));
    }
}
