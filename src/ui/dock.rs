//! Dock configuration - the left-side photo tool strip
//!
//! The dock holds the photo editing tools (crop, adjust, filter, effects)
//! followed by the overlay asset libraries (text, shapes, stickers), centered
//! between spacers and split by a separator. Every button is declared as a
//! [`DockButton`] whose behavior lives in a command object; nothing here
//! touches the host at declaration time.

use super::component::{
    ComponentEntry, DockButton, LibraryOpenProbe, PanelOpenProbe, ToggleAssetLibrary,
    ToggleCropMode, ToggleInspectorPanel,
};
use super::panel::{
    ADJUSTMENTS_PANEL, ASSET_LIBRARY_PANEL, CROP_PANEL, EFFECTS_PANEL, FILTERS_PANEL,
};
use super::UiComposer;

/// Slot id of the dock.
pub const DOCK_SLOT: &str = "editor.dock";

/// Passthrough token: flexible space.
pub const SPACER: &str = "dock.spacer";
/// Passthrough token: thin divider.
pub const SEPARATOR: &str = "dock.separator";
/// Component id of dock buttons that open an asset-library view.
pub const ASSET_LIBRARY_BUTTON: &str = "dock.asset-library";

fn tool_button(key: &str, icon: &str, label: &str, panel: &str) -> DockButton {
    DockButton::new(ASSET_LIBRARY_BUTTON, key)
        .icon(icon)
        .label(label)
        .is_selected(PanelOpenProbe {
            panel: panel.to_string(),
        })
        .on_click(ToggleInspectorPanel {
            panel: panel.to_string(),
        })
}

fn library_button(key: &str, icon: &str, entry: &str) -> DockButton {
    let title = format!("libraries.{entry}.label");
    DockButton::new(ASSET_LIBRARY_BUTTON, key)
        .icon(icon)
        .label(title.clone())
        .entries([entry])
        .is_selected(LibraryOpenProbe {
            panel: ASSET_LIBRARY_PANEL.to_string(),
            entry: entry.to_string(),
            title: title.clone(),
        })
        .on_click(ToggleAssetLibrary {
            panel: ASSET_LIBRARY_PANEL.to_string(),
            entry: entry.to_string(),
            title,
        })
}

/// The default photo-editor dock order.
pub fn default_order() -> Vec<ComponentEntry> {
    vec![
        ComponentEntry::Passthrough(SPACER.to_string()),
        // Photo editing tools
        ComponentEntry::Button(
            DockButton::new(ASSET_LIBRARY_BUTTON, "editor.crop")
                .icon("icon/crop")
                .label("Crop")
                .is_selected(PanelOpenProbe {
                    panel: CROP_PANEL.to_string(),
                })
                .on_click(ToggleCropMode),
        ),
        ComponentEntry::Button(tool_button(
            "editor.adjustment",
            "icon/adjustments",
            "Adjust",
            ADJUSTMENTS_PANEL,
        )),
        ComponentEntry::Button(tool_button(
            "editor.filter",
            "icon/filter",
            "Filter",
            FILTERS_PANEL,
        )),
        ComponentEntry::Button(tool_button(
            "editor.effect",
            "icon/effects",
            "Effects",
            EFFECTS_PANEL,
        )),
        ComponentEntry::Passthrough(SEPARATOR.to_string()),
        // Overlay asset libraries
        ComponentEntry::Button(library_button("editor.text", "icon/text", "text")),
        ComponentEntry::Button(library_button("editor.shape", "icon/shapes", "shape")),
        ComponentEntry::Button(library_button("editor.sticker", "icon/sticker", "sticker")),
        ComponentEntry::Passthrough(SPACER.to_string()),
    ]
}

/// Declare the default dock order.
pub fn install(composer: &UiComposer) {
    composer.set_component_order(DOCK_SLOT, default_order());
}
