// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Icon rendering (emoji and Nerd Fonts) with themes
// - layout: Calculates screen layout (breadcrumb, list, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - breadcrumb: Breadcrumb trail view model and painter
// - file_list: Directory listing view model and painter
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar with listing info
// - dialogs: Renders the modal dialogs (upload, new folder, rename, delete)
// - toast: Renders toast notifications (brief pop-up messages)
//
// Painters register a HitZone for every clickable region; the zones are
// rebuilt from scratch on each frame.

pub mod breadcrumb;
pub mod dialogs;
pub mod file_list;
pub mod icons;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod toast;

use crate::model::{HitZone, ViewAction};

// Re-export main render function for convenience
pub use render::render;

/// Action of the first zone containing the cell, if any
pub fn hit_test(zones: &[HitZone], column: u16, row: u16) -> Option<ViewAction> {
    zones
        .iter()
        .find(|zone| zone.contains(column, row))
        .map(|zone| zone.action.clone())
}
