use std::path::{Path, PathBuf};

use crate::assets::frame::{FrameAsset, builtin_frames};
use crate::foundation::error::{PrintframeError, PrintframeResult};

/// Key under which custom frames are persisted.
pub const FRAME_STORE_KEY: &str = "customFrames_v1";

type StoreDoc = serde_json::Map<String, serde_json::Value>;

/// Storage capability for user-uploaded frames.
///
/// Ordering contract: `list` returns the most recently saved frame first.
pub trait FrameRepository {
    /// Stored custom frames, newest first.
    fn list(&self) -> Vec<FrameAsset>;
    /// Insert `frame` at the front, replacing any stored frame with the same id.
    fn save(&mut self, frame: FrameAsset) -> PrintframeResult<()>;
    /// Remove the frame with `id`. Unknown ids are a no-op.
    fn remove(&mut self, id: &str) -> PrintframeResult<()>;
}

/// Built-in frames followed by the repository's custom frames.
pub fn all_frames(repo: &dyn FrameRepository) -> Vec<FrameAsset> {
    let mut out = builtin_frames();
    out.extend(repo.list());
    out
}

/// Look up a built-in or custom frame by id.
pub fn find_frame(repo: &dyn FrameRepository, id: &str) -> Option<FrameAsset> {
    all_frames(repo).into_iter().find(|f| f.id == id)
}

fn upsert_front(frames: &mut Vec<FrameAsset>, frame: FrameAsset) {
    frames.retain(|f| f.id != frame.id);
    frames.insert(0, frame);
}

/// Volatile repository for tests and single-process use.
#[derive(Debug, Default)]
pub struct InMemoryFrameRepository {
    frames: Vec<FrameAsset>,
}

impl InMemoryFrameRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameRepository for InMemoryFrameRepository {
    fn list(&self) -> Vec<FrameAsset> {
        self.frames.clone()
    }

    fn save(&mut self, frame: FrameAsset) -> PrintframeResult<()> {
        upsert_front(&mut self.frames, frame);
        Ok(())
    }

    fn remove(&mut self, id: &str) -> PrintframeResult<()> {
        self.frames.retain(|f| f.id != id);
        Ok(())
    }
}

/// Key-value JSON document on disk holding frames under [`FRAME_STORE_KEY`].
///
/// Other top-level keys in the document are preserved on write. The document is read once on
/// [`JsonFileFrameRepository::open`] and rewritten after every mutation.
#[derive(Debug)]
pub struct JsonFileFrameRepository {
    path: PathBuf,
    doc: StoreDoc,
    frames: Vec<FrameAsset>,
}

impl JsonFileFrameRepository {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> PrintframeResult<Self> {
        let path = path.as_ref().to_path_buf();
        let doc = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice::<StoreDoc>(&bytes).map_err(|e| {
                PrintframeError::serde(format!("parse frame store '{}': {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => serde_json::Map::new(),
            Err(e) => {
                return Err(PrintframeError::storage(format!(
                    "read frame store '{}': {e}",
                    path.display()
                )));
            }
        };

        let frames = match doc.get(FRAME_STORE_KEY) {
            Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
                PrintframeError::serde(format!("frame store key '{FRAME_STORE_KEY}': {e}"))
            })?,
            None => Vec::new(),
        };

        Ok(Self { path, doc, frames })
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&mut self) -> PrintframeResult<()> {
        let value = serde_json::to_value(&self.frames)
            .map_err(|e| PrintframeError::serde(format!("serialize frames: {e}")))?;
        self.doc.insert(FRAME_STORE_KEY.to_owned(), value);

        let bytes = serde_json::to_vec_pretty(&self.doc)
            .map_err(|e| PrintframeError::serde(format!("serialize frame store: {e}")))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                PrintframeError::storage(format!("create dir '{}': {e}", parent.display()))
            })?;
        }
        std::fs::write(&self.path, bytes).map_err(|e| {
            PrintframeError::storage(format!(
                "write frame store '{}': {e}",
                self.path.display()
            ))
        })?;
        tracing::debug!(
            path = %self.path.display(),
            frames = self.frames.len(),
            "frame store written"
        );
        Ok(())
    }
}

impl FrameRepository for JsonFileFrameRepository {
    fn list(&self) -> Vec<FrameAsset> {
        self.frames.clone()
    }

    fn save(&mut self, frame: FrameAsset) -> PrintframeResult<()> {
        upsert_front(&mut self.frames, frame);
        self.flush()
    }

    fn remove(&mut self, id: &str) -> PrintframeResult<()> {
        let before = self.frames.len();
        self.frames.retain(|f| f.id != id);
        if self.frames.len() == before {
            return Ok(());
        }
        self.flush()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/repository.rs"]
mod tests;
