//! UI composition - ordered component lists per named slot
//!
//! The host renders UI surfaces (the dock, toolbars) from ordered component
//! lists declared here. Declaring a slot's order is a total overwrite: the
//! new list fully replaces whatever was associated with the slot before,
//! never an incremental patch.

mod component;
pub mod dock;
pub mod panel;

pub use component::{
    ButtonColor, ButtonSize, ButtonVariant, ComponentEntry, DockButton, DockCommand,
    LibraryOpenProbe, PanelOpenProbe, SelectionProbe, ToggleAssetLibrary, ToggleCropMode,
    ToggleInspectorPanel,
};

use std::sync::Mutex;

use indexmap::IndexMap;
use tracing::debug;

/// Per-slot ordered component lists consulted by the host renderer.
#[derive(Default)]
pub struct UiComposer {
    orders: Mutex<IndexMap<String, Vec<ComponentEntry>>>,
}

impl UiComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ordered entry list of `slot`.
    ///
    /// Entry keys must be unique within the list; duplicates are the caller's
    /// bug and produce undefined highlight behavior in the host.
    pub fn set_component_order(&self, slot: &str, entries: Vec<ComponentEntry>) {
        debug!(slot, entries = entries.len(), "component order declared");
        self.orders.lock().unwrap().insert(slot.to_string(), entries);
    }

    /// The current order of `slot`, if declared.
    pub fn component_order(&self, slot: &str) -> Option<Vec<ComponentEntry>> {
        self.orders.lock().unwrap().get(slot).cloned()
    }

    /// Slots with a declared order, in declaration order.
    pub fn slots(&self) -> Vec<String> {
        self.orders.lock().unwrap().keys().cloned().collect()
    }

    /// Drop every declared order.
    pub fn clear(&self) {
        self.orders.lock().unwrap().clear();
    }
}
