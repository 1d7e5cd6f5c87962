//! Panel placement - inspector and assets panel defaults
//!
//! Panels either push the canvas aside (docked) or float over it, on the
//! left or right. The photo editor docks both the inspector (effects and
//! overlay properties) and the assets panel to the left.

use crate::host::{PanelPosition, UiApi};

/// Inspector panel: photo effects and overlay properties.
pub const INSPECTOR_PANEL: &str = "panel/inspector";
/// Asset panel container.
pub const ASSETS_PANEL: &str = "panel/assets";
/// Shared asset-library panel opened by the dock library buttons.
pub const ASSET_LIBRARY_PANEL: &str = "panel/asset-library";

/// Inspector views toggled by the dock tool buttons.
pub const CROP_PANEL: &str = "panel/inspector/crop";
pub const ADJUSTMENTS_PANEL: &str = "panel/inspector/adjustments";
pub const FILTERS_PANEL: &str = "panel/inspector/filters";
pub const EFFECTS_PANEL: &str = "panel/inspector/effects";

/// Dock the inspector and assets panels to the left, non-floating.
pub fn install(ui: &dyn UiApi) {
    ui.set_panel_position(INSPECTOR_PANEL, PanelPosition::Left);
    ui.set_panel_floating(INSPECTOR_PANEL, false);

    ui.set_panel_position(ASSETS_PANEL, PanelPosition::Left);
    ui.set_panel_floating(ASSETS_PANEL, false);
}
