use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Snapshot of a text input: its current value and its placeholder text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    pub value: String,
    pub placeholder: String,
}

/// The slice of the dashboard page this crate touches. Embedders bind this to
/// their real rendering surface; tests use [`MemoryPage`].
pub trait Page {
    /// Returns the input with the given element id, or `None` when the page
    /// has no such element.
    fn input(&self, id: &str) -> Option<InputField>;

    /// Replaces the text content of the element with the given id.
    fn write_text(&self, id: &str, text: &str);

    /// The URL of the page currently being displayed.
    fn current_url(&self) -> String;
}

#[derive(Debug, Default)]
struct PageContents {
    inputs: HashMap<String, InputField>,
    texts: HashMap<String, String>,
    url: String,
}

/// In-memory [`Page`] for tests and headless embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    contents: Arc<Mutex<PageContents>>,
}

impl MemoryPage {
    pub fn new(url: impl Into<String>) -> Self {
        let page = Self::default();
        page.set_current_url(url);
        page
    }

    pub fn set_current_url(&self, url: impl Into<String>) {
        self.contents.lock().unwrap().url = url.into();
    }

    pub fn add_input(&self, id: impl Into<String>, value: &str, placeholder: &str) {
        self.contents.lock().unwrap().inputs.insert(
            id.into(),
            InputField {
                value: value.to_string(),
                placeholder: placeholder.to_string(),
            },
        );
    }

    pub fn set_input_value(&self, id: &str, value: &str) {
        if let Some(input) = self.contents.lock().unwrap().inputs.get_mut(id) {
            input.value = value.to_string();
        }
    }

    /// Text most recently written into the element, if any.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.contents.lock().unwrap().texts.get(id).cloned()
    }
}

impl Page for MemoryPage {
    fn input(&self, id: &str) -> Option<InputField> {
        self.contents.lock().unwrap().inputs.get(id).cloned()
    }

    fn write_text(&self, id: &str, text: &str) {
        self.contents
            .lock()
            .unwrap()
            .texts
            .insert(id.to_string(), text.to_string());
    }

    fn current_url(&self) -> String {
        self.contents.lock().unwrap().url.clone()
    }
}
