//! Explicit host context passed to every configuration unit
//!
//! The engine and UI objects are shared mutable host state. Instead of a
//! module-level singleton, every unit takes a [`HostContext`] by reference
//! (or a cheap clone of it for async handlers).

use std::sync::Arc;

use super::{EngineApi, TransferApi, UiApi};

/// Bundle of host capability objects handed to configuration units, dock
/// commands and action handlers.
///
/// Cloning is cheap (three `Arc`s) and clones all refer to the same host.
#[derive(Clone)]
pub struct HostContext {
    pub engine: Arc<dyn EngineApi>,
    pub ui: Arc<dyn UiApi>,
    pub transfer: Arc<dyn TransferApi>,
}

impl HostContext {
    pub fn new(
        engine: Arc<dyn EngineApi>,
        ui: Arc<dyn UiApi>,
        transfer: Arc<dyn TransferApi>,
    ) -> Self {
        HostContext {
            engine,
            ui,
            transfer,
        }
    }
}

impl std::fmt::Debug for HostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostContext").finish_non_exhaustive()
    }
}
