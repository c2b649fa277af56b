//! Uploaded document → raw text.
//!
//! PDFs go through `pdf-extract` on the blocking pool; plain text is decoded
//! lossily. Every other format is rejected.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Kind of document detected from the content type or the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Content type wins; the file extension is used when the client sent a
    /// generic type.
    pub fn detect(filename: Option<&str>, content_type: Option<&str>) -> Option<Self> {
        let content_type = content_type
            .map(|ct| ct.split(';').next().unwrap_or_default().trim().to_lowercase())
            .unwrap_or_default();
        match content_type.as_str() {
            "application/pdf" => return Some(Self::Pdf),
            "text/plain" => return Some(Self::PlainText),
            _ => {}
        }

        let extension = filename
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_lowercase())?;
        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::PlainText),
            _ => None,
        }
    }
}

/// Extracts the raw text of an uploaded document.
pub async fn extract_text(
    data: Bytes,
    filename: Option<&str>,
    content_type: Option<&str>,
) -> Result<String, AppError> {
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let kind = DocumentKind::detect(filename, content_type).ok_or_else(|| {
        AppError::UnprocessableEntity(format!(
            "Unsupported document type: {}",
            content_type.or(filename).unwrap_or("unknown")
        ))
    })?;

    let text = match kind {
        DocumentKind::PlainText => String::from_utf8_lossy(&data).into_owned(),
        DocumentKind::Pdf => extract_pdf(data).await?,
    };

    debug!(?kind, bytes = text.len(), "Extracted document text");
    Ok(text)
}

async fn extract_pdf(data: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(join_error)?
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))
}

/// `pdf-extract` panics on some malformed files; that is the document's fault.
fn join_error(e: tokio::task::JoinError) -> AppError {
    if e.is_panic() {
        AppError::UnprocessableEntity(format!("PDF extraction aborted: {e}"))
    } else {
        AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
    }
}
