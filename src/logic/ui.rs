//! UI timing logic
//!
//! Pure functions for time-based UI transitions.

/// How long a toast stays visible after its last `show_toast`
pub const TOAST_DURATION_MS: u128 = 3000;

/// Check whether a toast shown `elapsed_ms` ago should be hidden
///
/// # Examples
/// ```
/// use filetui::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(0));
/// assert!(!should_dismiss_toast(2999));
/// assert!(should_dismiss_toast(3000));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Width of the filled part of a progress bar
pub fn progress_cells(fraction: f64, width: u16) -> u16 {
    (fraction.clamp(0.0, 1.0) * width as f64).round() as u16
}
