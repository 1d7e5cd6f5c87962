//! darkroom - declarative configuration toolkit for an embeddable photo editor
//!
//! The rendering engine, scene graph and asset management live in an external
//! host; this crate owns the configuration layer between an embedder and that
//! host: capability flags, named async actions, dock/panel composition,
//! translation overrides, engine settings and session teardown.
//!
//! ```no_run
//! use std::sync::Arc;
//! use darkroom::{Editor, PhotoEditorPlugin};
//! # fn engine() -> Arc<dyn darkroom::host::EngineApi> { unimplemented!() }
//! # fn ui() -> Arc<dyn darkroom::host::UiApi> { unimplemented!() }
//! # fn transfer() -> Arc<dyn darkroom::host::TransferApi> { unimplemented!() }
//!
//! let editor = Editor::with_default_catalog(engine(), ui(), transfer());
//! PhotoEditorPlugin::new().initialize(&editor)?;
//! # Ok::<(), darkroom::HostError>(())
//! ```

pub mod actions;
pub mod error;
pub mod features;
pub mod host;
pub mod i18n;
pub mod plugin;
pub mod reset;
pub mod settings;
pub mod ui;

pub use error::{ActionError, HostError};
pub use plugin::{Editor, PhotoEditorPlugin};
