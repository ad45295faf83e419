//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or a server:
//! - dialogs: Input validation for the modal dialogs
//! - file: File kind detection and MIME guessing
//! - formatting: Human-readable sizes and timestamps
//! - navigation: Selection movement within the file list
//! - path: Remote path composition and breadcrumb segments
//! - ui: Toast timing

pub mod dialogs;
pub mod file;
pub mod formatting;
pub mod navigation;
pub mod path;
pub mod ui;
