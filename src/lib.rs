pub mod actions;
pub mod errors;
pub mod fields;
pub mod models;
pub mod page;
pub mod sanitize;
pub mod urls;

pub use actions::StaffDebug;
pub use errors::StaffDebugError;
pub use page::{InputField, MemoryPage, Page};
pub use sanitize::sanitize_string;
