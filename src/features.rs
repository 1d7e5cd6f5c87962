//! Feature gate - enable/disable photo editing capabilities
//!
//! Capability flags control which UI elements and behaviors the host shows.
//! Identifiers are dot-namespaced (`editor.crop.rotation`) and declarations
//! accept trailing-wildcard globs (`editor.crop.*`) that are expanded against
//! the identifier catalog at declaration time. Once expanded, a glob-declared
//! flag is indistinguishable from an exactly-declared one.
//!
//! A flag is either enabled, disabled, or gated by a predicate over the
//! current selection. Predicates run lazily - the host asks once per UI
//! refresh via [`FeatureGate::is_enabled`] - never at declaration time.
//! A later declaration for the same identifier unconditionally replaces the
//! earlier one; there is no merging of predicate logic.

use std::sync::{Arc, Mutex};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::host::{EngineApi, PAGE_BLOCK_TYPE};

/// Read-only context handed to feature predicates on each evaluation.
pub struct FeatureContext<'a> {
    pub engine: &'a dyn EngineApi,
}

impl<'a> FeatureContext<'a> {
    pub fn new(engine: &'a dyn EngineApi) -> Self {
        FeatureContext { engine }
    }

    /// Whether any currently selected block has the given type.
    pub fn selection_has_type(&self, block_type: &str) -> bool {
        self.engine
            .find_all_selected()
            .into_iter()
            .any(|id| self.engine.get_type(id).as_deref() == Some(block_type))
    }
}

/// Predicate deciding a flag's state from the current selection.
pub type FeaturePredicate = Arc<dyn Fn(&FeatureContext<'_>) -> bool + Send + Sync>;

#[derive(Clone)]
enum FlagState {
    Enabled,
    Disabled,
    Predicate(FeaturePredicate),
}

/// Registry of capability flags.
///
/// Declarations are last-write-wins per identifier. Identifiers never
/// declared evaluate as disabled.
pub struct FeatureGate {
    catalog: Vec<String>,
    flags: Mutex<IndexMap<String, FlagState>>,
}

impl FeatureGate {
    /// Create a gate over the identifier catalog supplied by the host.
    /// Glob declarations only expand to identifiers in this catalog.
    pub fn new(catalog: impl IntoIterator<Item = impl Into<String>>) -> Self {
        FeatureGate {
            catalog: catalog.into_iter().map(Into::into).collect(),
            flags: Mutex::new(IndexMap::new()),
        }
    }

    /// Mark each identifier (or every catalog identifier matching a glob)
    /// as enabled with the default always-true behavior.
    pub fn enable(&self, ids: &[&str]) {
        self.declare(ids, FlagState::Enabled);
    }

    /// Mark identifiers as disabled. Same expansion rules as [`enable`].
    ///
    /// [`enable`]: FeatureGate::enable
    pub fn disable(&self, ids: &[&str]) {
        self.declare(ids, FlagState::Disabled);
    }

    /// Install a custom predicate for one identifier, replacing any earlier
    /// enable/disable/predicate declaration for it.
    pub fn set<F>(&self, id: &str, predicate: F)
    where
        F: Fn(&FeatureContext<'_>) -> bool + Send + Sync + 'static,
    {
        debug!(feature = id, "feature predicate installed");
        let mut flags = self.flags.lock().unwrap();
        flags.insert(id.to_string(), FlagState::Predicate(Arc::new(predicate)));
    }

    /// Evaluate one flag against the current selection. Called by the host
    /// once per UI refresh per active identifier.
    pub fn is_enabled(&self, id: &str, ctx: &FeatureContext<'_>) -> bool {
        // Clone the state out so a predicate can re-enter the gate.
        let state = self.flags.lock().unwrap().get(id).cloned();
        match state {
            None | Some(FlagState::Disabled) => false,
            Some(FlagState::Enabled) => true,
            Some(FlagState::Predicate(predicate)) => predicate(ctx),
        }
    }

    /// All identifiers with a declaration, in declaration order.
    pub fn declared(&self) -> Vec<String> {
        self.flags.lock().unwrap().keys().cloned().collect()
    }

    /// Drop every declaration. The catalog is retained.
    pub fn clear(&self) {
        self.flags.lock().unwrap().clear();
    }

    fn declare(&self, ids: &[&str], state: FlagState) {
        let mut flags = self.flags.lock().unwrap();
        for id in ids {
            if id.contains('*') {
                let mut matched = 0usize;
                for candidate in &self.catalog {
                    if glob_matches(id, candidate) {
                        flags.insert(candidate.clone(), state.clone());
                        matched += 1;
                    }
                }
                debug!(pattern = id, matched, "feature glob expanded");
            } else {
                flags.insert((*id).to_string(), state.clone());
            }
        }
    }
}

/// Segment-based glob match on dot-delimited identifiers.
///
/// Only a trailing `*` segment is supported: `a.b.*` matches identifiers
/// whose first segments are `a.b` and which have at least one more segment.
/// The bare pattern `*` matches every identifier. A pattern without `*`
/// matches only the identical identifier.
fn glob_matches(pattern: &str, id: &str) -> bool {
    match pattern.strip_suffix(".*") {
        Some(prefix) => {
            id.len() > prefix.len()
                && id.starts_with(prefix)
                && id.as_bytes()[prefix.len()] == b'.'
        }
        None => {
            if pattern == "*" {
                !id.is_empty()
            } else {
                pattern == id
            }
        }
    }
}

// ============================================================================
// Default photo-editor catalog
// ============================================================================

/// Every capability flag the photo editor knows about, grouped by area.
/// This is the catalog glob declarations expand against by default.
pub static DEFAULT_CATALOG: Lazy<Vec<String>> = Lazy::new(|| {
    [
        // Navigation bar
        "editor.navigation.bar",
        "editor.navigation.back",
        "editor.navigation.close",
        "editor.navigation.undo-redo",
        "editor.navigation.zoom",
        "editor.navigation.actions",
        // Text overlays
        "editor.text.edit",
        "editor.text.typeface",
        "editor.text.font-size",
        "editor.text.font-style",
        "editor.text.alignment",
        "editor.text.advanced",
        "editor.text.background",
        // Crop (core photo editing)
        "editor.crop",
        "editor.crop.size",
        "editor.crop.rotation",
        "editor.crop.flip",
        "editor.crop.fill-mode",
        "editor.crop.scale",
        "editor.crop.position",
        "editor.crop.panel-auto-open",
        // Enhancement tools
        "editor.filter",
        "editor.adjustment",
        "editor.effect",
        "editor.blur",
        "editor.shadow",
        // General editing
        "editor.delete",
        "editor.duplicate",
        "editor.group",
        "editor.replace",
        "editor.replace.fill",
        "editor.replace.shape",
        // Overlay styling
        "editor.fill",
        "editor.opacity",
        "editor.blend-mode",
        "editor.shape.options",
        "editor.combine",
        "editor.position",
        "editor.options",
        "editor.stroke",
        // Notifications
        "editor.notifications",
        "editor.notifications.undo",
        "editor.notifications.redo",
        // Dock and asset library
        "editor.dock",
        "editor.library.panel",
        // Context surfaces (predicate-gated below)
        "editor.canvas.menu",
        "editor.inspector.bar",
    ]
    .into_iter()
    .map(String::from)
    .collect()
});

/// True when no selected block is the page itself.
///
/// Strokes, the canvas menu and the inspector bar apply to overlays (text,
/// shapes, stickers), never to the photo page.
pub fn selection_excludes_page(ctx: &FeatureContext<'_>) -> bool {
    !ctx.selection_has_type(PAGE_BLOCK_TYPE)
}

/// Declare the default photo-editor feature set.
///
/// Enables the navigation, text, crop, enhancement, editing, styling,
/// notification and dock groups, then gates the overlay-only surfaces behind
/// [`selection_excludes_page`].
pub fn install(gate: &FeatureGate) {
    gate.enable(&[
        "editor.navigation.*",
        "editor.text.*",
        "editor.crop",
        "editor.crop.*",
        "editor.filter",
        "editor.adjustment",
        "editor.effect",
        "editor.blur",
        "editor.shadow",
        "editor.delete",
        "editor.duplicate",
        "editor.group",
        "editor.replace",
        "editor.replace.*",
        "editor.fill",
        "editor.opacity",
        "editor.blend-mode",
        "editor.shape.options",
        "editor.combine",
        "editor.position",
        "editor.options",
        "editor.notifications",
        "editor.notifications.*",
        "editor.dock",
        "editor.library.panel",
    ]);

    // Overlay-only surfaces: hidden while the page block is selected.
    gate.set("editor.stroke", selection_excludes_page);
    gate.set("editor.canvas.menu", selection_excludes_page);
    gate.set("editor.inspector.bar", selection_excludes_page);
}
