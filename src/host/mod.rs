//! Host capability surface
//!
//! The photo editor engine is an external, closed collaborator. Everything this
//! crate does ultimately delegates to it through the traits in this module:
//!
//! - [`EngineApi`] - scene graph queries, selection, edit mode, scalar settings
//! - [`UiApi`] - panel open/close/query and placement
//! - [`TransferApi`] - export, download, file picking and local uploads (async)
//!
//! The traits are consumed as `Arc<dyn _>` trait objects bundled into a
//! [`HostContext`]; configuration units never touch hidden globals. Test code
//! implements them with recording fakes (see `tests/common/harness.rs`).

mod context;

pub use context::HostContext;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::HostError;
use crate::settings::SettingValue;

/// Identifier of a block in the host scene graph.
pub type BlockId = u32;

/// Block type reported by the host for the page (root) block.
///
/// Feature predicates use this to tell overlay selections apart from the
/// photo page itself.
pub const PAGE_BLOCK_TYPE: &str = "page";

/// Wildcard panel id accepted by [`UiApi::close_panel`] to close every panel.
pub const ALL_PANELS: &str = "*";

/// Edit mode of the host canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditMode {
    /// Default mode: move/resize/rotate the selected block.
    Transform,
    /// Cropping the page image.
    Crop,
    /// Inline text editing.
    Text,
}

/// Side of the canvas a panel is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelPosition {
    Left,
    Right,
}

/// Payload identifying a concrete asset-library view inside the shared
/// asset-library panel. Two opens with different payloads are different views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelPayload {
    /// Asset source ids shown by the library view.
    pub entries: Vec<String>,
    /// Translation key for the panel title.
    pub title: String,
}

/// Options for opening a panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelOptions {
    /// Float over the canvas instead of pushing it aside.
    pub floating: bool,
    /// Library payload, when opening the asset-library panel.
    pub payload: Option<PanelPayload>,
}

/// Engine capability: scene graph queries and scalar settings.
///
/// All calls execute on the host's single UI/event thread; implementations are
/// expected to be cheap and non-blocking.
pub trait EngineApi: Send + Sync {
    /// Ids of all currently selected blocks.
    fn find_all_selected(&self) -> Vec<BlockId>;

    /// Block type of `block`, or `None` for an unknown id.
    fn get_type(&self, block: BlockId) -> Option<String>;

    /// The current page block, if a scene with a page exists.
    fn get_current_page(&self) -> Option<BlockId>;

    /// Replace the selection with `block`.
    fn select(&self, block: BlockId);

    /// Current canvas edit mode.
    fn get_edit_mode(&self) -> EditMode;

    /// Transition the canvas edit mode.
    fn set_edit_mode(&self, mode: EditMode);

    /// Store a scalar engine setting.
    fn set_setting(&self, key: &str, value: SettingValue) -> Result<(), HostError>;

    /// Serialize the current scene to the host's string format.
    fn save_scene(&self) -> Result<String, HostError>;

    /// Replace the current scene from a serialized string.
    fn load_scene(&self, scene: &str) -> Result<(), HostError>;
}

/// UI capability: panel management and placement.
pub trait UiApi: Send + Sync {
    /// Open a panel. Opening an already-open panel replaces its options.
    fn open_panel(&self, id: &str, options: PanelOptions);

    /// Close a panel; [`ALL_PANELS`] closes every open panel.
    fn close_panel(&self, id: &str);

    /// Whether a panel is open. With a payload, the open panel must also carry
    /// an equal payload to count as open.
    fn is_panel_open(&self, id: &str, payload: Option<&PanelPayload>) -> bool;

    /// Dock a panel to the left or right of the canvas.
    fn set_panel_position(&self, id: &str, position: PanelPosition);

    /// Float a panel over the canvas (or dock it back).
    fn set_panel_floating(&self, id: &str, floating: bool);
}

/// Requested representation of a picked file's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnKind {
    Text,
    Binary,
    ObjectUrl,
}

/// Options for [`TransferApi::load_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFileOptions {
    /// Accepted file extensions, e.g. `".scene"`.
    pub accept: String,
    pub return_kind: ReturnKind,
}

/// Content of a picked file, per the requested [`ReturnKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
    ObjectUrl(String),
}

/// Options for a design export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportOptions {
    pub mime_type: String,
    pub target_width: Option<u32>,
    pub target_height: Option<u32>,
    pub jpeg_quality: Option<f32>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            mime_type: "image/png".to_string(),
            target_width: None,
            target_height: None,
            jpeg_quality: None,
        }
    }
}

/// Result of a design export: one blob per exported page.
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub blobs: Vec<Vec<u8>>,
    /// The options the host actually exported with (defaults filled in).
    pub options: ExportOptions,
}

/// A file handed to [`TransferApi::local_upload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Upload context determining how the host resolves the uploaded asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadContext {
    Image,
    Video,
    Audio,
}

/// Export/download capability. Calls may suspend on network or file I/O, so
/// the whole trait is async; failures propagate unchanged as [`HostError`].
#[async_trait]
pub trait TransferApi: Send + Sync {
    /// Export the current design.
    async fn export(&self, options: &ExportOptions) -> Result<ExportResult, HostError>;

    /// Hand data to the user as a file download.
    async fn download(
        &self,
        data: &[u8],
        mime_type: &str,
        filename: Option<&str>,
    ) -> Result<(), HostError>;

    /// Open a file picker and return the chosen file's content.
    async fn load_file(&self, options: &LoadFileOptions) -> Result<FileContent, HostError>;

    /// Register a local file with the host and return a URL usable by the engine.
    async fn local_upload(
        &self,
        file: &UploadFile,
        context: UploadContext,
    ) -> Result<String, HostError>;
}
