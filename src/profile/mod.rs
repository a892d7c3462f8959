//! Input profile data model and CSV loading

pub mod data;
pub mod loader;

pub use data::{Gender, PensionProfile};
pub use loader::{load_profiles, load_profiles_from_reader};
