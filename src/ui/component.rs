//! Dock components and their command objects
//!
//! A dock entry is either an opaque passthrough token the host renders
//! directly (spacer, separator) or a [`DockButton`] descriptor. Buttons carry
//! command objects instead of inline closures: small structs holding only the
//! ids they need, evaluated against a borrowed [`HostContext`] at interaction
//! time. Declaration never touches the host; clicking does.
//!
//! Commands are deterministic given the same engine state, and their side
//! effects are limited to selecting a block, opening/closing panels and
//! switching the edit mode. When no current page exists the click is a
//! silent no-op - a missing host precondition is not an error.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::host::{EditMode, HostContext, PanelOptions, PanelPayload, ALL_PANELS};

/// What a dock button does when clicked.
pub trait DockCommand: Send + Sync {
    fn run(&self, ctx: &HostContext);
}

/// Whether a dock button renders as selected (or disabled).
pub trait SelectionProbe: Send + Sync {
    fn probe(&self, ctx: &HostContext) -> bool;
}

/// Button size accepted by the host dock renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Normal,
    Large,
}

/// Button rendering variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Regular,
    Plain,
}

/// Button accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    Accent,
    Danger,
}

/// Structured dock entry descriptor.
///
/// `key` must be unique within its slot; duplicates produce undefined
/// selection/highlight behavior in the host. That uniqueness is the caller's
/// contract - this layer does not validate it.
#[derive(Clone)]
pub struct DockButton {
    /// Host component id (which renderer draws this entry).
    pub id: String,
    /// Unique key of this entry within its slot.
    pub key: String,
    /// Label text or translation key.
    pub label: Option<String>,
    /// Icon name.
    pub icon: Option<String>,
    /// Asset source ids for library buttons.
    pub entries: Vec<String>,
    pub on_click: Option<Arc<dyn DockCommand>>,
    pub is_selected: Option<Arc<dyn SelectionProbe>>,
    pub is_disabled: Option<Arc<dyn SelectionProbe>>,
    pub size: Option<ButtonSize>,
    pub variant: Option<ButtonVariant>,
    pub color: Option<ButtonColor>,
}

impl DockButton {
    pub fn new(id: impl Into<String>, key: impl Into<String>) -> Self {
        DockButton {
            id: id.into(),
            key: key.into(),
            label: None,
            icon: None,
            entries: Vec::new(),
            on_click: None,
            is_selected: None,
            is_disabled: None,
            size: None,
            variant: None,
            color: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.entries = entries.into_iter().map(Into::into).collect();
        self
    }

    pub fn on_click(mut self, command: impl DockCommand + 'static) -> Self {
        self.on_click = Some(Arc::new(command));
        self
    }

    pub fn is_selected(mut self, probe: impl SelectionProbe + 'static) -> Self {
        self.is_selected = Some(Arc::new(probe));
        self
    }

    pub fn is_disabled(mut self, probe: impl SelectionProbe + 'static) -> Self {
        self.is_disabled = Some(Arc::new(probe));
        self
    }

    /// Run the click command, if any.
    pub fn click(&self, ctx: &HostContext) {
        if let Some(command) = &self.on_click {
            command.run(ctx);
        }
    }

    /// Evaluate the selected probe; buttons without one are never selected.
    pub fn selected(&self, ctx: &HostContext) -> bool {
        self.is_selected
            .as_ref()
            .is_some_and(|probe| probe.probe(ctx))
    }
}

impl fmt::Debug for DockButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DockButton")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

/// One entry of a slot's ordered component list.
#[derive(Debug, Clone)]
pub enum ComponentEntry {
    /// Opaque token the host renders directly, e.g. a spacer or separator.
    Passthrough(String),
    Button(DockButton),
}

impl ComponentEntry {
    /// The entry's key: the passthrough token, or the button key.
    pub fn key(&self) -> &str {
        match self {
            ComponentEntry::Passthrough(token) => token,
            ComponentEntry::Button(button) => &button.key,
        }
    }
}

// ============================================================================
// Photo tool commands
// ============================================================================

/// Toggle crop mode on the page: leave crop if active, otherwise close all
/// panels, select the page and enter crop mode.
pub struct ToggleCropMode;

impl DockCommand for ToggleCropMode {
    fn run(&self, ctx: &HostContext) {
        let Some(page) = ctx.engine.get_current_page() else {
            return;
        };
        if ctx.engine.get_edit_mode() == EditMode::Crop {
            ctx.engine.set_edit_mode(EditMode::Transform);
        } else {
            ctx.ui.close_panel(ALL_PANELS);
            ctx.engine.select(page);
            ctx.engine.set_edit_mode(EditMode::Crop);
        }
    }
}

/// Toggle a floating inspector panel (adjustments, filters, effects): close
/// it if open, otherwise close everything else, select the page in transform
/// mode and open the panel floating.
pub struct ToggleInspectorPanel {
    pub panel: String,
}

impl DockCommand for ToggleInspectorPanel {
    fn run(&self, ctx: &HostContext) {
        if ctx.ui.is_panel_open(&self.panel, None) {
            ctx.ui.close_panel(&self.panel);
            return;
        }
        let Some(page) = ctx.engine.get_current_page() else {
            return;
        };
        ctx.ui.close_panel(ALL_PANELS);
        ctx.engine.set_edit_mode(EditMode::Transform);
        ctx.engine.select(page);
        ctx.ui.open_panel(
            &self.panel,
            PanelOptions {
                floating: true,
                payload: None,
            },
        );
    }
}

/// Whether a panel is open, payload ignored.
pub struct PanelOpenProbe {
    pub panel: String,
}

impl SelectionProbe for PanelOpenProbe {
    fn probe(&self, ctx: &HostContext) -> bool {
        ctx.ui.is_panel_open(&self.panel, None)
    }
}

/// Toggle one asset-library view in the shared library panel.
pub struct ToggleAssetLibrary {
    pub panel: String,
    pub entry: String,
    pub title: String,
}

impl ToggleAssetLibrary {
    fn payload(&self) -> PanelPayload {
        PanelPayload {
            entries: vec![self.entry.clone()],
            title: self.title.clone(),
        }
    }
}

impl DockCommand for ToggleAssetLibrary {
    fn run(&self, ctx: &HostContext) {
        let payload = self.payload();
        if ctx.ui.is_panel_open(&self.panel, Some(&payload)) {
            ctx.ui.close_panel(&self.panel);
        } else {
            ctx.ui.close_panel(ALL_PANELS);
            ctx.ui.open_panel(
                &self.panel,
                PanelOptions {
                    floating: false,
                    payload: Some(payload),
                },
            );
        }
    }
}

/// Whether the shared library panel shows this library's payload.
pub struct LibraryOpenProbe {
    pub panel: String,
    pub entry: String,
    pub title: String,
}

impl SelectionProbe for LibraryOpenProbe {
    fn probe(&self, ctx: &HostContext) -> bool {
        let payload = PanelPayload {
            entries: vec![self.entry.clone()],
            title: self.title.clone(),
        };
        ctx.ui.is_panel_open(&self.panel, Some(&payload))
    }
}
