//! Export entrypoints and the blob store boundary
//!
//! Both entrypoints compose synchronously, serialize on the blocking pool and
//! then hand the bytes to a [`BlobStore`]. Failures are not retried.

use std::collections::BTreeMap;
use std::future::Future;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;

use tabula_core::{CellValue, DocumentSink, XLSX_CONTENT_TYPE};
use tabula_xlsx::XlsxSink;

use crate::compose::SheetComposer;
use crate::layout::Workbook;
use crate::Result;

/// A named byte stream to persist
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub key: String,
    pub bucket: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Errors raised by a [`BlobStore`]
#[derive(Debug, Error)]
pub enum BlobError {
    /// Writing the object failed
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The key or bucket cannot name an object
    #[error("Invalid blob key: {0}")]
    InvalidKey(String),
}

/// Persists named byte streams
pub trait BlobStore {
    fn upload(&self, request: UploadRequest) -> impl Future<Output = std::result::Result<(), BlobError>> + Send;
}

/// Stores objects as files at `<root>/<bucket>/<key>`
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path an object is stored at
    pub fn object_path(&self, bucket: &str, key: &str) -> std::result::Result<PathBuf, BlobError> {
        let mut path = self.root.clone();
        for part in [bucket, key] {
            let relative = Path::new(part);
            let plain = !part.is_empty()
                && relative
                    .components()
                    .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
            if !plain {
                return Err(BlobError::InvalidKey(part.to_string()));
            }
            path.push(relative);
        }
        Ok(path)
    }
}

impl BlobStore for FsBlobStore {
    async fn upload(&self, request: UploadRequest) -> std::result::Result<(), BlobError> {
        let path = self.object_path(&request.bucket, &request.key)?;
        let io_err = |source| BlobError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        tokio::fs::write(&path, &request.body)
            .await
            .map_err(io_err)?;

        tracing::info!(
            "Stored {} bytes ({}) at {}",
            request.body.len(),
            request.content_type,
            path.display()
        );
        Ok(())
    }
}

/// An object held by [`MemoryBlobStore`]
#[derive(Debug, Clone, PartialEq)]
pub struct StoredBlob {
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Keeps objects in memory; clones share the same objects
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    objects: Arc<Mutex<BTreeMap<(String, String), StoredBlob>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored object
    pub fn get(&self, bucket: &str, key: &str) -> Option<StoredBlob> {
        let objects = self.objects.lock().unwrap_or_else(|e| e.into_inner());
        objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// Number of stored objects
    pub fn len(&self) -> usize {
        self.objects.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BlobStore for MemoryBlobStore {
    async fn upload(&self, request: UploadRequest) -> std::result::Result<(), BlobError> {
        if request.key.is_empty() {
            return Err(BlobError::InvalidKey(request.key));
        }
        let mut objects = self.objects.lock().unwrap_or_else(|e| e.into_inner());
        objects.insert(
            (request.bucket, request.key),
            StoredBlob {
                body: request.body,
                content_type: request.content_type,
            },
        );
        Ok(())
    }
}

/// Arguments of [`Exporter::write_basic`]
#[derive(Debug, Clone, Default)]
pub struct BasicExport {
    /// Titles of the single header row
    pub headers: Vec<String>,
    pub worksheet_name: String,
    /// Value rows, written from row 2
    pub rows: Vec<Vec<CellValue>>,
    pub bucket: String,
    pub key: String,
}

/// Arguments of [`Exporter::write_full`]
#[derive(Debug, Clone, Default)]
pub struct FullExport {
    pub bucket: String,
    /// Object key
    pub filename: String,
}

/// XLSX export entrypoints
pub struct Exporter;

impl Exporter {
    /// Render a flat table (one styled header row plus values) and upload it
    pub async fn write_basic<B: BlobStore>(args: BasicExport, store: &B) -> Result<()> {
        tracing::info!(
            "Exporting basic sheet {} ({} row(s)) to {}/{}",
            args.worksheet_name,
            args.rows.len(),
            args.bucket,
            args.key
        );

        let mut sink = XlsxSink::new();
        SheetComposer::new(&mut sink).compose_basic(
            &args.worksheet_name,
            &args.headers,
            &args.rows,
        )?;

        upload(sink, args.bucket, args.key, store).await
    }

    /// Render every sheet of `workbook` and upload the result
    pub async fn write_full<B: BlobStore>(
        workbook: &Workbook,
        args: FullExport,
        store: &B,
    ) -> Result<()> {
        tracing::info!(
            "Exporting {} sheet(s) to {}/{}",
            workbook.sheet_count(),
            args.bucket,
            args.filename
        );

        let mut sink = XlsxSink::new();
        SheetComposer::new(&mut sink).compose_workbook(workbook)?;

        upload(sink, args.bucket, args.filename, store).await
    }
}

async fn upload<S, B>(sink: S, bucket: String, key: String, store: &B) -> Result<()>
where
    S: DocumentSink + Send + 'static,
    B: BlobStore,
{
    let body = tokio::task::spawn_blocking(move || sink.serialize_to_bytes()).await??;
    let size = body.len();

    store
        .upload(UploadRequest {
            key,
            bucket,
            body,
            content_type: XLSX_CONTENT_TYPE.to_string(),
        })
        .await?;

    tracing::info!("Export finished ({size} bytes)");
    Ok(())
}
