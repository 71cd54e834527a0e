/// State management module
///
/// This module handles all application state, including:
/// - The session record and wire data structures (project.rs)
/// - The linear wizard step pointer and its transitions (wizard.rs)

pub mod project;
pub mod wizard;
