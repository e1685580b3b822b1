//! Prelude module - common imports for tabula users
//!
//! ```rust
//! use tabula::prelude::*;
//! ```

pub use crate::{
    // Style types
    BorderLineStyle,
    CellValue,
    Color,
    // Layout model
    ColumnEntry,
    DocumentSink,
    // Errors
    Error,
    ErrorKind,
    // Export
    BasicExport,
    BlobStore,
    Exporter,
    FsBlobStore,
    FullExport,
    MemoryBlobStore,
    HorizontalAlignment,
    RecordingSink,
    Result,
    SheetComposer,
    SheetOptions,
    StylePatch,
    StyleSet,
    Workbook,
    WorkbookConfig,
    XlsxSink,
};
