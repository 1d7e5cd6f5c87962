//! Action registry - named async handlers invocable by id
//!
//! Actions are how the host UI (and embedding code) triggers behavior:
//! buttons and menu items run actions by id, and embedders override the
//! defaults by re-registering the same id. Registration is last-write-wins;
//! entries persist until re-registration or [`ActionRegistry::clear`].
//!
//! Handlers are async (an export-then-download handler suspends on I/O) but
//! the registry imposes no concurrency limit and no cancellation: overlapping
//! `run` calls against the same id are the caller's responsibility.
//!
//! Arguments and results cross the boundary as JSON values, mirroring how the
//! host passes action payloads around.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ActionError, HostError};
use crate::host::{
    ExportOptions, FileContent, HostContext, LoadFileOptions, ReturnKind, UploadContext,
    UploadFile,
};

/// Outcome of running an action.
pub type ActionResult = Result<Value, ActionError>;

/// Boxed future returned by action handlers.
pub type ActionFuture = Pin<Box<dyn Future<Output = ActionResult> + Send + 'static>>;

/// Ordered argument list passed to a handler (the host's variadic call
/// arguments, as JSON).
#[derive(Debug, Clone, Default)]
pub struct ActionArgs(Vec<Value>);

impl ActionArgs {
    pub fn new(values: Vec<Value>) -> Self {
        ActionArgs(values)
    }

    /// Single-argument convenience.
    pub fn one(value: Value) -> Self {
        ActionArgs(vec![value])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Deserialize the argument at `index`, or produce `T::default()` when it
    /// is absent or `null`.
    pub fn decode_or_default<T>(&self, index: usize) -> Result<T, ActionError>
    where
        T: DeserializeOwned + Default,
    {
        match self.0.get(index) {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| ActionError::Failed(anyhow::Error::new(e))),
        }
    }

    /// Deserialize the argument at `index`, failing when it is absent.
    pub fn decode<T>(&self, index: usize) -> Result<T, ActionError>
    where
        T: DeserializeOwned,
    {
        let value = self
            .0
            .get(index)
            .ok_or_else(|| ActionError::failed(format!("missing action argument {index}")))?;
        serde_json::from_value(value.clone())
            .map_err(|e| ActionError::Failed(anyhow::Error::new(e)))
    }
}

impl From<Vec<Value>> for ActionArgs {
    fn from(values: Vec<Value>) -> Self {
        ActionArgs(values)
    }
}

/// An invocable action. [`handler`] wraps plain async closures; implement the
/// trait directly only when the handler carries its own state.
pub trait ActionHandler: Send + Sync {
    fn invoke(&self, ctx: HostContext, args: ActionArgs) -> ActionFuture;
}

struct FnHandler<F>(F);

impl<F, Fut> ActionHandler for FnHandler<F>
where
    F: Fn(HostContext, ActionArgs) -> Fut + Send + Sync,
    Fut: Future<Output = ActionResult> + Send + 'static,
{
    fn invoke(&self, ctx: HostContext, args: ActionArgs) -> ActionFuture {
        Box::pin((self.0)(ctx, args))
    }
}

/// Wrap an async closure as a registrable handler.
pub fn handler<F, Fut>(f: F) -> Arc<dyn ActionHandler>
where
    F: Fn(HostContext, ActionArgs) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ActionResult> + Send + 'static,
{
    Arc::new(FnHandler(f))
}

/// Mapping from action id to handler, preserving first-registration order.
#[derive(Default)]
pub struct ActionRegistry {
    handlers: Mutex<IndexMap<String, Arc<dyn ActionHandler>>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or override the handler for `id`. A re-registration replaces
    /// the handler but keeps the id's position in [`list`](Self::list).
    pub fn register(&self, id: &str, handler: Arc<dyn ActionHandler>) {
        debug!(action = id, "action registered");
        self.handlers
            .lock()
            .unwrap()
            .insert(id.to_string(), handler);
    }

    /// [`register`](Self::register) an async closure.
    pub fn register_fn<F, Fut>(&self, id: &str, f: F)
    where
        F: Fn(HostContext, ActionArgs) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ActionResult> + Send + 'static,
    {
        self.register(id, handler(f));
    }

    /// The handler for `id`, or `None` when nothing is registered. Never fails.
    pub fn get(&self, id: &str) -> Option<Arc<dyn ActionHandler>> {
        self.handlers.lock().unwrap().get(id).cloned()
    }

    /// Snapshot of all registered ids in registration order, recomputed on
    /// each call.
    pub fn list(&self) -> Vec<String> {
        self.handlers.lock().unwrap().keys().cloned().collect()
    }

    /// Look up and invoke the handler for `id`.
    ///
    /// Fails with [`ActionError::NotFound`] when nothing is registered;
    /// handler failures propagate unchanged.
    pub async fn run(&self, ctx: &HostContext, id: &str, args: ActionArgs) -> ActionResult {
        let handler = self
            .get(id)
            .ok_or_else(|| ActionError::NotFound(id.to_string()))?;
        debug!(action = id, "action run");
        handler.invoke(ctx.clone(), args).await
    }

    /// Drop every registration.
    pub fn clear(&self) {
        self.handlers.lock().unwrap().clear();
    }
}

// ============================================================================
// Built-in photo-editor actions
// ============================================================================

/// Arguments of the `export.image` action.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ImageExportArgs {
    width: u32,
    height: u32,
}

impl Default for ImageExportArgs {
    fn default() -> Self {
        ImageExportArgs {
            width: 1080,
            height: 1080,
        }
    }
}

/// Register the default photo-editor actions.
///
/// - `export.design` - export with the caller's options, then download
/// - `export.image` - export at fixed dimensions with a descriptive filename
/// - `scene.save` - serialize the scene and download it as a `.scene` file
/// - `scene.import` - pick a `.scene` file and load it into the engine
/// - `file.upload` - register a local file with the host, returns its URL
pub fn install(registry: &ActionRegistry) {
    registry.register_fn("export.design", |ctx, args| async move {
        let options: ExportOptions = args.decode_or_default(0)?;
        let result = ctx.transfer.export(&options).await?;
        let blob = first_blob(result.blobs)?;
        ctx.transfer
            .download(&blob, &result.options.mime_type, None)
            .await?;
        Ok(Value::Null)
    });

    registry.register_fn("export.image", |ctx, args| async move {
        let ImageExportArgs { width, height } = args.decode_or_default(0)?;
        let options = ExportOptions {
            mime_type: "image/png".to_string(),
            target_width: Some(width),
            target_height: Some(height),
            ..ExportOptions::default()
        };
        let result = ctx.transfer.export(&options).await?;
        let blob = first_blob(result.blobs)?;
        let filename = format!("photo-{width}x{height}.png");
        ctx.transfer
            .download(&blob, &result.options.mime_type, Some(&filename))
            .await?;
        Ok(Value::Null)
    });

    registry.register_fn("scene.save", |ctx, _args| async move {
        let scene = ctx.engine.save_scene()?;
        ctx.transfer
            .download(
                scene.as_bytes(),
                "text/plain;charset=UTF-8",
                Some("photo-edit.scene"),
            )
            .await?;
        Ok(Value::Null)
    });

    registry.register_fn("scene.import", |ctx, _args| async move {
        let options = LoadFileOptions {
            accept: ".scene".to_string(),
            return_kind: ReturnKind::Text,
        };
        match ctx.transfer.load_file(&options).await? {
            FileContent::Text(scene) => {
                ctx.engine.load_scene(&scene)?;
                Ok(Value::Null)
            }
            other => Err(ActionError::failed(format!(
                "expected text scene content, got {other:?}"
            ))),
        }
    });

    registry.register_fn("file.upload", |ctx, args| async move {
        let file: UploadFile = args.decode(0)?;
        let context = match args.get(1) {
            None | Some(Value::Null) => UploadContext::Image,
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| ActionError::Failed(anyhow::Error::new(e)))?,
        };
        let url = ctx.transfer.local_upload(&file, context).await?;
        Ok(Value::String(url))
    });
}

fn first_blob(blobs: Vec<Vec<u8>>) -> Result<Vec<u8>, ActionError> {
    blobs
        .into_iter()
        .next()
        .ok_or_else(|| ActionError::Host(HostError::msg("export produced no blobs")))
}
