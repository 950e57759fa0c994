//! Configuration module for Draagkracht
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DraagkrachtPaths;
pub use settings::Settings;
