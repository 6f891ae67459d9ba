use crate::errors::StaffDebugError;
use crate::fields::{get_score, get_user};
use crate::models::{ActionDescriptor, ApiErrorBody, ProblemActionPayload};
use crate::page::Page;
use crate::sanitize::sanitize_string;
use crate::urls::action_url;
use reqwest::Client;
use tracing::{debug, error, warn};

pub const RESET_STUDENT_ATTEMPTS: &str = "reset_student_attempts";
pub const RESCORE_PROBLEM: &str = "rescore_problem";
pub const OVERRIDE_PROBLEM_SCORE: &str = "override_problem_score";

/// Page-global element that receives failure messages. Successes go to the
/// per-problem result element instead; the asymmetry is intentional.
pub const GLOBAL_MSG_ID: &str = "idash_msg";

const USER_PLACEHOLDER: &str = "{user}";

/// Staff debug panel actions against the instructor API, bound to one page.
pub struct StaffDebug<P: Page> {
    page: P,
    http: Client,
}

impl<P: Page> StaffDebug<P> {
    pub fn new(page: P) -> Self {
        Self::with_client(page, Client::new())
    }

    pub fn with_client(page: P, http: Client) -> Self {
        Self { page, http }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Resets the student's attempt counter for one problem.
    pub async fn reset(&self, location_name: &str, location: &str) -> Result<(), StaffDebugError> {
        let mut payload = self.base_payload(location_name, location)?;
        payload.delete_module = Some(false);
        let action = ActionDescriptor {
            location_name: location_name.to_string(),
            success_msg: Some("Successfully reset the attempts for user {user}".to_string()),
            error_msg: Some("Failed to reset attempts for user.".to_string()),
        };
        self.do_instructor_dash_action(action, RESET_STUDENT_ATTEMPTS, payload)
            .await
    }

    /// Deletes the student's state for one problem entirely.
    pub async fn delete_student_state(
        &self,
        location_name: &str,
        location: &str,
    ) -> Result<(), StaffDebugError> {
        let mut payload = self.base_payload(location_name, location)?;
        payload.delete_module = Some(true);
        let action = ActionDescriptor {
            location_name: location_name.to_string(),
            success_msg: Some("Successfully deleted student state for user {user}".to_string()),
            error_msg: Some("Failed to delete student state for user.".to_string()),
        };
        self.do_instructor_dash_action(action, RESET_STUDENT_ATTEMPTS, payload)
            .await
    }

    /// Rescores the student's existing submission.
    pub async fn rescore(&self, location_name: &str, location: &str) -> Result<(), StaffDebugError> {
        let mut payload = self.base_payload(location_name, location)?;
        payload.only_if_higher = Some(false);
        let action = ActionDescriptor {
            location_name: location_name.to_string(),
            success_msg: Some("Successfully rescored problem for user {user}".to_string()),
            error_msg: Some("Failed to rescore problem for user.".to_string()),
        };
        self.do_instructor_dash_action(action, RESCORE_PROBLEM, payload)
            .await
    }

    /// Rescores the submission, keeping the new score only if it is higher.
    pub async fn rescore_if_higher(
        &self,
        location_name: &str,
        location: &str,
    ) -> Result<(), StaffDebugError> {
        let mut payload = self.base_payload(location_name, location)?;
        payload.only_if_higher = Some(true);
        let action = ActionDescriptor {
            location_name: location_name.to_string(),
            success_msg: Some(
                "Successfully rescored problem to improve the student score for user {user}"
                    .to_string(),
            ),
            error_msg: Some(
                "Failed to rescore problem to improve the student score for user.".to_string(),
            ),
        };
        self.do_instructor_dash_action(action, RESCORE_PROBLEM, payload)
            .await
    }

    /// Overrides the problem score with the value from the score field.
    pub async fn override_score(
        &self,
        location_name: &str,
        location: &str,
    ) -> Result<(), StaffDebugError> {
        let mut payload = self.base_payload(location_name, location)?;
        payload.score = Some(get_score(&self.page, location_name)?);
        let action = ActionDescriptor {
            location_name: location_name.to_string(),
            success_msg: Some("Successfully overrode problem score for {user}".to_string()),
            error_msg: Some("Failed to override problem score for user.".to_string()),
        };
        self.do_instructor_dash_action(action, OVERRIDE_PROBLEM_SCORE, payload)
            .await
    }

    fn base_payload(
        &self,
        location_name: &str,
        location: &str,
    ) -> Result<ProblemActionPayload, StaffDebugError> {
        Ok(ProblemActionPayload {
            problem_to_reset: location.to_string(),
            unique_student_identifier: get_user(&self.page, location_name)?,
            delete_module: None,
            only_if_higher: None,
            score: None,
        })
    }

    /// Posts one action and writes the outcome into the page: success into the
    /// panel's own `result_` element, failure into [`GLOBAL_MSG_ID`]. Server
    /// rejections and transport failures end up on the page, not in `Err`.
    async fn do_instructor_dash_action(
        &self,
        action: ActionDescriptor,
        endpoint: &str,
        payload: ProblemActionPayload,
    ) -> Result<(), StaffDebugError> {
        let url = action_url(&self.page.current_url(), endpoint)?;
        debug!("posting instructor dash action to {url}");

        match self.http.post(&url).form(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                let user = get_user(&self.page, &action.location_name)?;
                let message = action
                    .success_msg
                    .as_deref()
                    .unwrap_or_default()
                    .replace(USER_PLACEHOLDER, &user);
                let result_id = format!("result_{}", sanitize_string(&action.location_name));
                self.page.write_text(&result_id, &message);
                Ok(())
            }
            Ok(response) => {
                let status = response.status();
                warn!("instructor api rejected {endpoint} with status {status}");
                let detail = response
                    .json::<ApiErrorBody>()
                    .await
                    .unwrap_or_default()
                    .error;
                self.write_failure(&action, &detail);
                Ok(())
            }
            Err(err) => {
                error!("instructor api request to {url} failed: {err}");
                self.write_failure(&action, "");
                Ok(())
            }
        }
    }

    fn write_failure(&self, action: &ActionDescriptor, detail: &str) {
        let message = format!("{} {}", action.error_msg.as_deref().unwrap_or_default(), detail);
        self.page.write_text(GLOBAL_MSG_ID, &message);
    }
}
