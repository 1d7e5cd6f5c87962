//! Recording fakes for the host capability surface
//!
//! `FakeEngine`, `FakeUi` and `FakeTransfer` implement the host traits over
//! plain in-memory state and record every host call into a shared
//! [`Recorder`], so tests can assert both end state and call order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use darkroom::error::HostError;
use darkroom::host::{
    BlockId, EditMode, EngineApi, ExportOptions, ExportResult, FileContent, LoadFileOptions,
    PanelOptions, PanelPayload, PanelPosition, TransferApi, UiApi, UploadContext, UploadFile,
    ALL_PANELS,
};
use darkroom::settings::SettingValue;
use darkroom::Editor;

/// Shared log of host calls, in invocation order.
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    pub fn record(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    /// Index of the first recorded call starting with `prefix`.
    pub fn first_index_of(&self, prefix: &str) -> Option<usize> {
        self.calls().iter().position(|c| c.starts_with(prefix))
    }

    /// Index of the last recorded call starting with `prefix`.
    pub fn last_index_of(&self, prefix: &str) -> Option<usize> {
        self.calls().iter().rposition(|c| c.starts_with(prefix))
    }
}

// ============================================================================
// Engine fake
// ============================================================================

pub struct FakeEngine {
    pub page: Mutex<Option<BlockId>>,
    pub selected: Mutex<Vec<BlockId>>,
    pub types: Mutex<HashMap<BlockId, String>>,
    pub edit_mode: Mutex<EditMode>,
    pub settings: Mutex<Vec<(String, SettingValue)>>,
    pub scene: Mutex<String>,
    recorder: Recorder,
}

impl FakeEngine {
    pub fn new(recorder: Recorder) -> Self {
        FakeEngine {
            page: Mutex::new(None),
            selected: Mutex::new(Vec::new()),
            types: Mutex::new(HashMap::new()),
            edit_mode: Mutex::new(EditMode::Transform),
            settings: Mutex::new(Vec::new()),
            scene: Mutex::new(String::new()),
            recorder,
        }
    }

    /// Install a page block and make it the current page.
    pub fn with_page(&self, id: BlockId) {
        *self.page.lock().unwrap() = Some(id);
        self.types.lock().unwrap().insert(id, "page".to_string());
    }
}

impl EngineApi for FakeEngine {
    fn find_all_selected(&self) -> Vec<BlockId> {
        self.selected.lock().unwrap().clone()
    }

    fn get_type(&self, block: BlockId) -> Option<String> {
        self.types.lock().unwrap().get(&block).cloned()
    }

    fn get_current_page(&self) -> Option<BlockId> {
        *self.page.lock().unwrap()
    }

    fn select(&self, block: BlockId) {
        self.recorder.record(format!("engine.select {block}"));
        *self.selected.lock().unwrap() = vec![block];
    }

    fn get_edit_mode(&self) -> EditMode {
        *self.edit_mode.lock().unwrap()
    }

    fn set_edit_mode(&self, mode: EditMode) {
        self.recorder.record(format!("engine.set_edit_mode {mode:?}"));
        *self.edit_mode.lock().unwrap() = mode;
    }

    fn set_setting(&self, key: &str, value: SettingValue) -> Result<(), HostError> {
        self.recorder.record(format!("engine.set_setting {key}"));
        self.settings
            .lock()
            .unwrap()
            .push((key.to_string(), value));
        Ok(())
    }

    fn save_scene(&self) -> Result<String, HostError> {
        self.recorder.record("engine.save_scene");
        Ok(self.scene.lock().unwrap().clone())
    }

    fn load_scene(&self, scene: &str) -> Result<(), HostError> {
        self.recorder.record("engine.load_scene");
        *self.scene.lock().unwrap() = scene.to_string();
        Ok(())
    }
}

// ============================================================================
// UI fake
// ============================================================================

pub struct FakeUi {
    pub open: Mutex<HashMap<String, PanelOptions>>,
    pub positions: Mutex<HashMap<String, PanelPosition>>,
    pub floating: Mutex<HashMap<String, bool>>,
    recorder: Recorder,
}

impl FakeUi {
    pub fn new(recorder: Recorder) -> Self {
        FakeUi {
            open: Mutex::new(HashMap::new()),
            positions: Mutex::new(HashMap::new()),
            floating: Mutex::new(HashMap::new()),
            recorder,
        }
    }

    pub fn open_panels(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.open.lock().unwrap().keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl UiApi for FakeUi {
    fn open_panel(&self, id: &str, options: PanelOptions) {
        self.recorder.record(format!("ui.open_panel {id}"));
        self.open.lock().unwrap().insert(id.to_string(), options);
    }

    fn close_panel(&self, id: &str) {
        self.recorder.record(format!("ui.close_panel {id}"));
        let mut open = self.open.lock().unwrap();
        if id == ALL_PANELS {
            open.clear();
        } else {
            open.remove(id);
        }
    }

    fn is_panel_open(&self, id: &str, payload: Option<&PanelPayload>) -> bool {
        let open = self.open.lock().unwrap();
        match (open.get(id), payload) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(options), Some(expected)) => options.payload.as_ref() == Some(expected),
        }
    }

    fn set_panel_position(&self, id: &str, position: PanelPosition) {
        self.recorder
            .record(format!("ui.set_panel_position {id} {position:?}"));
        self.positions
            .lock()
            .unwrap()
            .insert(id.to_string(), position);
    }

    fn set_panel_floating(&self, id: &str, floating: bool) {
        self.recorder
            .record(format!("ui.set_panel_floating {id} {floating}"));
        self.floating
            .lock()
            .unwrap()
            .insert(id.to_string(), floating);
    }
}

// ============================================================================
// Transfer fake
// ============================================================================

pub struct FakeTransfer {
    /// Blob returned by every export.
    pub export_blob: Vec<u8>,
    /// When set, exports fail with this message.
    pub export_error: Mutex<Option<String>>,
    /// What `load_file` hands back.
    pub picked: Mutex<Option<FileContent>>,
    pub exports: Mutex<Vec<ExportOptions>>,
    pub downloads: Mutex<Vec<(Vec<u8>, String, Option<String>)>>,
    pub uploads: Mutex<Vec<(UploadFile, UploadContext)>>,
    recorder: Recorder,
}

impl FakeTransfer {
    pub fn new(recorder: Recorder) -> Self {
        FakeTransfer {
            export_blob: vec![0xCA, 0xFE],
            export_error: Mutex::new(None),
            picked: Mutex::new(None),
            exports: Mutex::new(Vec::new()),
            downloads: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
            recorder,
        }
    }
}

#[async_trait]
impl TransferApi for FakeTransfer {
    async fn export(&self, options: &ExportOptions) -> Result<ExportResult, HostError> {
        self.recorder.record("transfer.export");
        if let Some(message) = self.export_error.lock().unwrap().clone() {
            return Err(HostError::msg(message));
        }
        self.exports.lock().unwrap().push(options.clone());
        Ok(ExportResult {
            blobs: vec![self.export_blob.clone()],
            options: options.clone(),
        })
    }

    async fn download(
        &self,
        data: &[u8],
        mime_type: &str,
        filename: Option<&str>,
    ) -> Result<(), HostError> {
        self.recorder.record(format!("transfer.download {mime_type}"));
        self.downloads.lock().unwrap().push((
            data.to_vec(),
            mime_type.to_string(),
            filename.map(String::from),
        ));
        Ok(())
    }

    async fn load_file(&self, _options: &LoadFileOptions) -> Result<FileContent, HostError> {
        self.recorder.record("transfer.load_file");
        self.picked
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| HostError::msg("no file picked"))
    }

    async fn local_upload(
        &self,
        file: &UploadFile,
        context: UploadContext,
    ) -> Result<String, HostError> {
        self.recorder.record("transfer.local_upload");
        let url = format!("local://{}", file.name);
        self.uploads.lock().unwrap().push((file.clone(), context));
        Ok(url)
    }
}

// ============================================================================
// Harness
// ============================================================================

pub struct Fakes {
    pub engine: Arc<FakeEngine>,
    pub ui: Arc<FakeUi>,
    pub transfer: Arc<FakeTransfer>,
    pub recorder: Recorder,
}

/// Build an editor over fresh fakes with the default feature catalog.
pub fn editor_with_fakes() -> (Editor, Fakes) {
    super::tracing::init_tracing_from_env();

    let recorder = Recorder::default();
    let engine = Arc::new(FakeEngine::new(recorder.clone()));
    let ui = Arc::new(FakeUi::new(recorder.clone()));
    let transfer = Arc::new(FakeTransfer::new(recorder.clone()));

    let editor = Editor::with_default_catalog(
        engine.clone() as Arc<dyn EngineApi>,
        ui.clone() as Arc<dyn UiApi>,
        transfer.clone() as Arc<dyn TransferApi>,
    );
    let fakes = Fakes {
        engine,
        ui,
        transfer,
        recorder,
    };
    (editor, fakes)
}
