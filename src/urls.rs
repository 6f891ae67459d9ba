use crate::errors::StaffDebugError;

/// Derives the instructor API endpoint for `action` from the current page
/// URL, which must sit under a `/courseware` path segment.
pub fn action_url(current_url: &str, action: &str) -> Result<String, StaffDebugError> {
    let base = current_url
        .find("/courseware")
        .map(|idx| &current_url[..idx])
        .ok_or_else(|| StaffDebugError::MalformedPageUrl {
            url: current_url.to_string(),
        })?;
    Ok(format!("{base}/instructor/api/{action}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_courseware_path_to_instructor_api() {
        assert_eq!(
            action_url(
                "/courses/edX/Open_DemoX/edx_demo_course/courseware/stuff",
                "rescore_problem"
            )
            .unwrap(),
            "/courses/edX/Open_DemoX/edx_demo_course/instructor/api/rescore_problem"
        );
    }

    #[test]
    fn works_on_absolute_urls() {
        assert_eq!(
            action_url(
                "http://localhost:8000/courses/demo/courseware/week_1",
                "reset_student_attempts"
            )
            .unwrap(),
            "http://localhost:8000/courses/demo/instructor/api/reset_student_attempts"
        );
    }

    #[test]
    fn url_without_courseware_segment_is_rejected() {
        let err = action_url("/courses/demo/progress", "rescore_problem").unwrap_err();
        assert_eq!(
            err,
            StaffDebugError::MalformedPageUrl {
                url: "/courses/demo/progress".to_string()
            }
        );
    }
}
