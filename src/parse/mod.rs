mod description;
mod menu_section;
mod static_selector;
mod text_from_selection;

pub use description::{normalize, Description};
pub use menu_section::parse_sections;
