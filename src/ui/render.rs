use crate::App;
use ratatui::Frame;

use super::{breadcrumb, dialogs, file_list, layout, legend, status_bar, toast};

/// Main render function - orchestrates all UI rendering
///
/// Also rebuilds the click targets of the frame: the hit zones and the
/// area of the open dialog are replaced wholesale on every call.
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let model = &mut app.model;

    let mut zones = Vec::new();

    let legend_height =
        legend::calculate_legend_height(size.width, model.ui.vim_mode, model.ui.dialog.as_ref());
    let layout_info = layout::calculate_layout(size, legend_height);

    // Breadcrumb bar
    let trail = breadcrumb::breadcrumb_trail(&model.navigation.current_path);
    breadcrumb::render_breadcrumb(
        f,
        layout_info.breadcrumb_area,
        &trail,
        "File Manager",
        &app.icon_renderer,
        &mut zones,
    );

    // Directory listing
    let rows = file_list::file_rows(&model.navigation.entries);
    file_list::render_file_list(
        f,
        layout_info.list_area,
        &rows,
        model.navigation.selected_index,
        model.navigation.loading,
        &app.icon_renderer,
        &mut zones,
    );

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        model.ui.dialog.as_ref(),
    );

    let status = status_bar::status_line(
        &model.navigation.current_path,
        &model.navigation.entries,
        model.navigation.selected_entry(),
        model.navigation.loading,
    );
    status_bar::render_status_bar(f, layout_info.status_area, &status, &model.ui.server_label);

    // Modal dialog on top of the view
    model.ui.dialog_area = model
        .ui
        .dialog
        .as_ref()
        .map(|dialog| dialogs::render_dialog(f, size, dialog));

    model.ui.hit_zones = zones;

    // Render toast notification if active
    if let Some(t) = &model.ui.toast {
        toast::render_toast(f, size, &t.message, t.is_error);
    }
}
