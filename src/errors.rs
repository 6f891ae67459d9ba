use std::fmt;

/// Integration failures surfaced to the embedder. Server rejections and
/// transport failures are not errors at this level; the dispatcher reports
/// those through the page's message element instead.
#[derive(Debug, PartialEq, Eq)]
pub enum StaffDebugError {
    /// No input element with the expected id exists on the page.
    FieldNotFound { id: String },
    /// The current page URL has no `/courseware` segment to derive the
    /// instructor API base from.
    MalformedPageUrl { url: String },
}

impl fmt::Display for StaffDebugError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldNotFound { id } => {
                write!(f, "no input field with id '{id}' on the page")
            }
            Self::MalformedPageUrl { url } => {
                write!(f, "page url '{url}' has no courseware segment")
            }
        }
    }
}

impl std::error::Error for StaffDebugError {}
