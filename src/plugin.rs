//! Composition root - the photo editor plugin
//!
//! [`Editor`] is the configurable surface: it owns the five configuration
//! units (features, actions, UI composition, translations, reset
//! coordination) plus the opaque host capability objects. [`PhotoEditorPlugin`]
//! drives them in a fixed order:
//!
//! 1. reset editor state (clean slate, previous session's cleanups run)
//! 2. features - they gate what UI and actions may reference
//! 3. UI - dock order and panel placement
//! 4. actions
//! 5. translations
//! 6. reset-cleanup hook registration
//! 7. engine settings, last, so nothing overwrites them
//!
//! Every step is a pure configuration call; no unit consumes another's
//! return value, only the declaration order matters. Initialization is
//! idempotent: running it again tears the previous configuration down and
//! reapplies it.

use std::sync::Arc;

use tracing::{debug, info};

use crate::actions::{self, ActionRegistry};
use crate::error::HostError;
use crate::features::{self, FeatureGate, DEFAULT_CATALOG};
use crate::host::{EngineApi, HostContext, TransferApi, UiApi, ALL_PANELS};
use crate::i18n::{self, TranslationStore};
use crate::reset::ResetCoordinator;
use crate::settings;
use crate::ui::{self, UiComposer};

/// The configured editor surface.
///
/// The host constructs one `Editor` per embedded editor instance and keeps it
/// for the instance's whole lifetime; plugins configure it through the public
/// unit fields.
pub struct Editor {
    host: HostContext,
    pub feature: FeatureGate,
    pub actions: ActionRegistry,
    pub ui: UiComposer,
    pub i18n: TranslationStore,
    reset: ResetCoordinator,
}

impl Editor {
    /// Build an editor over the host capability objects, with the given
    /// capability-flag catalog (globs expand against it).
    pub fn new(
        engine: Arc<dyn EngineApi>,
        ui: Arc<dyn UiApi>,
        transfer: Arc<dyn TransferApi>,
        feature_catalog: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Editor {
            host: HostContext::new(engine, ui, transfer),
            feature: FeatureGate::new(feature_catalog),
            actions: ActionRegistry::new(),
            ui: UiComposer::new(),
            i18n: TranslationStore::new(),
            reset: ResetCoordinator::new(),
        }
    }

    /// Build an editor with the default photo-editor feature catalog.
    pub fn with_default_catalog(
        engine: Arc<dyn EngineApi>,
        ui: Arc<dyn UiApi>,
        transfer: Arc<dyn TransferApi>,
    ) -> Self {
        Self::new(engine, ui, transfer, DEFAULT_CATALOG.iter().cloned())
    }

    /// The host capability bundle.
    pub fn host(&self) -> &HostContext {
        &self.host
    }

    /// Subscribe a cleanup callback for the current editor session. It runs
    /// exactly once, on the next reset.
    pub fn on_reset(&self, cleanup: impl FnOnce() + Send + 'static) {
        self.reset.subscribe(cleanup);
    }

    /// Number of cleanups waiting for the next reset.
    pub fn pending_cleanups(&self) -> usize {
        self.reset.pending()
    }

    /// Host-driven reset signal: drain the cleanup list.
    pub fn notify_reset(&self) {
        self.reset.run_reset_pass();
    }

    /// Reset to a clean slate: run the cleanup pass, then drop every unit's
    /// declarations (the feature catalog is retained).
    pub fn reset(&self) {
        debug!("editor reset");
        self.notify_reset();
        self.feature.clear();
        self.actions.clear();
        self.ui.clear();
        self.i18n.clear();
    }
}

/// Photo editor configuration plugin.
///
/// Applies a complete single-image editing configuration: crop, adjustments,
/// filters and effects tools, overlay asset libraries, export/scene/upload
/// actions and the matching labels and engine settings.
pub struct PhotoEditorPlugin;

impl PhotoEditorPlugin {
    /// Plugin identifier in the host plugin registry.
    pub const NAME: &'static str = "darkroom-photo-editor";

    pub fn new() -> Self {
        PhotoEditorPlugin
    }

    /// Apply the photo editor configuration to `editor`.
    ///
    /// Safe to call again: the editor is reset first, so a second
    /// initialization leaves the same configuration, not a doubled one.
    pub fn initialize(&self, editor: &Editor) -> Result<(), HostError> {
        info!(plugin = Self::NAME, "initializing");

        // Clean slate: tear down whatever an earlier session configured.
        editor.reset();

        // Features first - they gate what the UI and actions may reference.
        features::install(&editor.feature);

        // UI layout: dock order and panel placement.
        ui::dock::install(&editor.ui);
        ui::panel::install(editor.host().ui.as_ref());

        actions::install(&editor.actions);
        i18n::install(&editor.i18n);

        // Session teardown: close anything this configuration opened.
        let ui = editor.host().ui.clone();
        editor.on_reset(move || ui.close_panel(ALL_PANELS));

        // Engine settings last, so no earlier step overwrites them.
        settings::install(editor.host().engine.as_ref())?;

        info!(plugin = Self::NAME, "initialized");
        Ok(())
    }
}

impl Default for PhotoEditorPlugin {
    fn default() -> Self {
        Self::new()
    }
}
