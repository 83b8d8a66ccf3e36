/// State management module
///
/// This module handles all session state, including:
/// - The key visual folder and candidate loading (library.rs)
/// - Shared data structures (data.rs)
/// - Prompt keyword rules for edits (edit.rs)
/// - The analyze/pick/edit state machine (workflow.rs)

pub mod library;
pub mod data;
pub mod edit;
pub mod workflow;

#[cfg(test)]
pub mod test_support;
