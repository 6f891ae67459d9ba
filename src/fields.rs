use crate::errors::StaffDebugError;
use crate::page::Page;
use crate::sanitize::sanitize_string;

/// The per-problem input fields rendered next to each staff debug panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    User,
    Score,
}

impl Field {
    pub fn id_prefix(self) -> &'static str {
        match self {
            Field::User => "sd_fu_",
            Field::Score => "sd_fs_",
        }
    }

    /// Element id for this field on the panel named by `location_name`.
    /// Lookups always use the sanitized name; raw locations may contain
    /// selector-special characters.
    pub fn element_id(self, location_name: &str) -> String {
        format!("{}{}", self.id_prefix(), sanitize_string(location_name))
    }
}

/// Reads the field's current value, falling back to its placeholder when the
/// value is empty. A missing element is a template bug and fails hard.
pub fn read_field(
    page: &impl Page,
    field: Field,
    location_name: &str,
) -> Result<String, StaffDebugError> {
    let id = field.element_id(location_name);
    let input = page
        .input(&id)
        .ok_or(StaffDebugError::FieldNotFound { id })?;
    if input.value.is_empty() {
        Ok(input.placeholder)
    } else {
        Ok(input.value)
    }
}

pub fn get_user(page: &impl Page, location_name: &str) -> Result<String, StaffDebugError> {
    read_field(page, Field::User, location_name)
}

pub fn get_score(page: &impl Page, location_name: &str) -> Result<String, StaffDebugError> {
    read_field(page, Field::Score, location_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    #[test]
    fn empty_value_falls_back_to_placeholder() {
        let page = MemoryPage::default();
        page.add_input("sd_fu_test_loc", "", "userman");
        assert_eq!(get_user(&page, "test_loc").unwrap(), "userman");
    }

    #[test]
    fn filled_value_wins_over_placeholder() {
        let page = MemoryPage::default();
        page.add_input("sd_fu_test_loc", "", "userman");
        page.set_input_value("sd_fu_test_loc", "notuserman");
        assert_eq!(get_user(&page, "test_loc").unwrap(), "notuserman");
    }

    #[test]
    fn lookup_uses_sanitized_location_name() {
        let page = MemoryPage::default();
        page.add_input("sd_fu_test\\.\\*\\+\\?\\^\\:\\$\\{\\}\\(\\)\\|\\]\\[loc", "", "userman");
        assert_eq!(get_user(&page, "test.*+?^:${}()|][loc").unwrap(), "userman");
    }

    #[test]
    fn score_field_has_its_own_prefix() {
        let page = MemoryPage::default();
        page.add_input("sd_fs_test_loc", "1", "0");
        assert_eq!(get_score(&page, "test_loc").unwrap(), "1");
    }

    #[test]
    fn missing_element_is_an_error() {
        let page = MemoryPage::default();
        assert_eq!(
            get_user(&page, "test_loc"),
            Err(StaffDebugError::FieldNotFound {
                id: "sd_fu_test_loc".to_string()
            })
        );
    }
}
