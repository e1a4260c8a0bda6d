//! Directory-of-JSON-files document store.
//!
//! Directory structure:
//! ```text
//! base_dir/
//! ├── notes/
//! │   ├── 3f2a...json
//! │   └── 9c1e...json
//! └── profiles/
//!     └── <user id>.json
//! ```

use async_trait::async_trait;
use notekeep_core::document::Document;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::{DocumentStore, StoreError, generate_document_id};

/// Document store persisting one JSON file per document.
///
/// Writes go through a temporary file and an atomic rename, serialised by an
/// internal lock so that read-modify-write `update`s do not interleave.
pub struct JsonDirDocumentStore {
    base_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonDirDocumentStore {
    /// Creates the store, making sure `base_dir` exists.
    pub async fn new(base_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).await?;
        Ok(Self {
            base_dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn collection_dir(&self, collection: &str) -> Result<PathBuf, StoreError> {
        check_key(collection)?;
        Ok(self.base_dir.join(collection))
    }

    fn document_path(&self, collection: &str, id: &str) -> Result<PathBuf, StoreError> {
        check_key(id)?;
        Ok(self.collection_dir(collection)?.join(format!("{id}.json")))
    }

    async fn read_document(path: &Path) -> Result<Option<Document>, StoreError> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(Some(map)),
            other => Err(StoreError::Malformed(format!(
                "{} holds {} instead of an object",
                path.display(),
                json_kind(&other)
            ))),
        }
    }

    async fn write_document(path: &Path, document: &Document) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(document)?;
        let tmp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&tmp_path, path).await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonDirDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let path = self.document_path(collection, id)?;
        Self::read_document(&path).await
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<(String, Document)>, StoreError> {
        let dir = self.collection_dir(collection)?;
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut matches = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let id = id.to_string();
            if let Some(document) = Self::read_document(&path).await?
                && document.get(field) == Some(value)
            {
                matches.push((id, document));
            }
        }
        Ok(matches)
    }

    async fn add(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        let id = generate_document_id();
        let path = self.document_path(collection, &id)?;
        let _guard = self.write_lock.lock().await;
        Self::write_document(&path, &document).await?;
        Ok(id)
    }

    async fn set(&self, collection: &str, id: &str, document: Document) -> Result<(), StoreError> {
        let path = self.document_path(collection, id)?;
        let _guard = self.write_lock.lock().await;
        Self::write_document(&path, &document).await
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> Result<(), StoreError> {
        let path = self.document_path(collection, id)?;
        let _guard = self.write_lock.lock().await;
        let mut existing =
            Self::read_document(&path)
                .await?
                .ok_or_else(|| StoreError::NotFound {
                    collection: collection.to_string(),
                    id: id.to_string(),
                })?;
        existing.extend(fields);
        Self::write_document(&path, &existing).await
    }
}

/// Rejects keys that would escape their directory or collide with file naming.
fn check_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty()
        || key == "."
        || key == ".."
        || key.contains('/')
        || key.contains('\\')
        || key.contains('\0')
    {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
