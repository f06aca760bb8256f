//! Text extraction from uploaded resume files.

use tokio::task::{self, JoinError};
use tracing::warn;

use crate::errors::AppError;

/// Upload formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Pdf,
    PlainText,
}

/// Decides the format from the declared content type, falling back to the file
/// extension for PDFs sent as `application/octet-stream`.
pub fn classify_upload(content_type: Option<&str>, file_name: &str) -> Result<UploadKind, AppError> {
    let mime = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase())
        .unwrap_or_default();

    if mime == "application/pdf" || file_name.to_ascii_lowercase().ends_with(".pdf") {
        Ok(UploadKind::Pdf)
    } else if mime == "text/plain" {
        Ok(UploadKind::PlainText)
    } else {
        Err(AppError::Validation(format!(
            "Unsupported file type '{mime}'. Upload a PDF or plain text file"
        )))
    }
}

/// Returns the document text, trimmed. Empty output, such as from an
/// image-only PDF, is an error.
pub async fn extract_text(kind: UploadKind, bytes: Vec<u8>) -> Result<String, AppError> {
    let text = match kind {
        UploadKind::PlainText => String::from_utf8(bytes)
            .map_err(|_| AppError::UnprocessableEntity("Text file is not valid UTF-8".into()))?,
        UploadKind::Pdf => task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(extraction_task_failed)?
            .map_err(|e| {
                warn!("PDF extraction error: {e}");
                AppError::UnprocessableEntity("Could not read PDF".into())
            })?,
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No readable text found in the uploaded file".into(),
        ));
    }
    Ok(text.to_string())
}

fn extraction_task_failed(e: JoinError) -> AppError {
    AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_content_type() {
        assert_eq!(
            classify_upload(Some("application/pdf"), "cv").unwrap(),
            UploadKind::Pdf
        );
        assert_eq!(
            classify_upload(Some("text/plain; charset=utf-8"), "cv.txt").unwrap(),
            UploadKind::PlainText
        );
    }

    #[test]
    fn test_classify_pdf_by_extension() {
        assert_eq!(
            classify_upload(Some("application/octet-stream"), "Resume.PDF").unwrap(),
            UploadKind::Pdf
        );
        assert_eq!(classify_upload(None, "cv.pdf").unwrap(), UploadKind::Pdf);
    }

    #[test]
    fn test_classify_rejects_other_types() {
        let err = classify_upload(Some("image/png"), "photo.png").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(classify_upload(None, "cv.docx").is_err());
    }

    #[tokio::test]
    async fn test_plain_text_is_trimmed() {
        let text = extract_text(UploadKind::PlainText, b"  Jane Doe\n".to_vec())
            .await
            .unwrap();
        assert_eq!(text, "Jane Doe");
    }

    #[tokio::test]
    async fn test_blank_text_is_unprocessable() {
        let err = extract_text(UploadKind::PlainText, b" \n\t".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_unprocessable() {
        let err = extract_text(UploadKind::Pdf, b"definitely not a pdf".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_failed_extraction_task_is_internal() {
        let join_error = task::spawn_blocking(|| panic!("extractor crashed"))
            .await
            .unwrap_err();
        let err = extraction_task_failed(join_error);
        assert!(matches!(err, AppError::Internal(_)));
    }
}
