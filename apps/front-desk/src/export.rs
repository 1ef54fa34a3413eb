//! # Invoice Export
//!
//! Turns a finished [`Invoice`] into a saved document.
//!
//! ```text
//! Invoice ──► InvoiceRenderer (mint-core) ──► InvoiceExporter ──► file
//!                                                 │
//!                                                 └─ TextFileExporter:
//!                                                    <exports_dir>/MintSalon-Invoice-<n>.txt
//! ```
//!
//! Exporters are synchronous; handlers call them through
//! `tokio::task::spawn_blocking`.

use mint_core::invoice::{Invoice, InvoiceRenderer, SalonInfo};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Export task failed: {0}")]
    Task(String),
}

/// Where an invoice ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedInvoice {
    pub file_name: String,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Writes invoices somewhere durable.
pub trait InvoiceExporter: Send + Sync {
    fn export(&self, invoice: &Invoice, salon: &SalonInfo) -> Result<ExportedInvoice, ExportError>;
}

/// Writes the 80-column text rendering into a directory.
#[derive(Debug, Clone)]
pub struct TextFileExporter {
    dir: PathBuf,
}

impl TextFileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        TextFileExporter { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl InvoiceExporter for TextFileExporter {
    fn export(&self, invoice: &Invoice, salon: &SalonInfo) -> Result<ExportedInvoice, ExportError> {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| ExportError::Io { path, source }
        };

        std::fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;

        let file_name = format!("{}.txt", invoice.file_stem());
        let path = self.dir.join(&file_name);
        let document = InvoiceRenderer::new(invoice, salon).render();

        // An existing invoice file is never replaced.
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(io_err(&path))?;
        file.write_all(document.as_bytes()).map_err(io_err(&path))?;

        info!(number = %invoice.display_number(), ?path, "Invoice exported");
        Ok(ExportedInvoice {
            file_name,
            path,
            bytes: document.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mint_core::invoice::{BillToDetails, InvoiceDraft};
    use mint_core::{Service, ServiceCategory, TaxRate};

    fn invoice() -> Invoice {
        let mut draft = InvoiceDraft::new();
        draft
            .add_service(&Service {
                id: "s1".to_string(),
                name: "Women's Haircut".to_string(),
                duration_min: 60,
                price_cents: 6500,
                category: ServiceCategory::Hair,
            })
            .unwrap();
        let now = Utc.timestamp_millis_opt(1_717_000_000_000).unwrap();
        Invoice::build(&draft, now, BillToDetails::walk_in(), TaxRate::default()).unwrap()
    }

    #[test]
    fn test_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = TextFileExporter::new(dir.path().join("invoices"));

        let exported = exporter.export(&invoice(), &SalonInfo::default()).unwrap();

        assert_eq!(exported.file_name, "MintSalon-Invoice-1717000000000.txt");
        let written = std::fs::read_to_string(&exported.path).unwrap();
        assert_eq!(written.len(), exported.bytes);
        assert!(written.contains("Women's Haircut"));
        assert!(written.contains("$70.20"));
    }

    #[test]
    fn test_unwritable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let exporter = TextFileExporter::new(blocker.join("invoices"));
        let err = exporter.export(&invoice(), &SalonInfo::default()).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }

    #[test]
    fn test_existing_file_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = TextFileExporter::new(dir.path());
        let first = exporter.export(&invoice(), &SalonInfo::default()).unwrap();

        let err = exporter.export(&invoice(), &SalonInfo::default()).unwrap_err();
        match err {
            ExportError::Io { path, source } => {
                assert_eq!(path, first.path);
                assert_eq!(source.kind(), std::io::ErrorKind::AlreadyExists);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(std::fs::read_to_string(&first.path).unwrap().contains("$70.20"));
    }
}
