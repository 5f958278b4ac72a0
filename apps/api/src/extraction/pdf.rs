//! Text extractor — PDF bytes to concatenated page text.

use std::io::Write;

use tracing::info;

use crate::errors::AppError;

/// Extracts the text of every page, in order, from an uploaded PDF payload.
///
/// The bytes are spooled to a request-local named temporary file so the PDF
/// reader can work from a path. The guard removes the file on every exit
/// path, including the error ones, so repeated requests never leak disk.
pub fn extract_text(data: &[u8]) -> Result<String, AppError> {
    let mut temp_file = tempfile::Builder::new()
        .prefix("cvparse-upload-")
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| AppError::Extraction(format!("failed to create temporary file: {e}")))?;

    temp_file
        .write_all(data)
        .and_then(|_| temp_file.flush())
        .map_err(|e| AppError::Extraction(format!("failed to write temporary file: {e}")))?;

    let text = pdf_extract::extract_text(temp_file.path())
        .map_err(|e| AppError::Extraction(e.to_string()))?;

    info!("Extracted {} characters from PDF", text.len());
    Ok(text)
}

/// Builds a one-page PDF containing `text`, with xref offsets computed from
/// the actual byte positions so the file is valid by construction.
#[cfg(test)]
pub(crate) fn minimal_pdf(text: &str) -> Vec<u8> {
    pdf_with_padding(text, 0)
}

/// Same, with an unreferenced padding stream so tests can produce valid
/// files of arbitrary size.
#[cfg(test)]
pub(crate) fn pdf_with_padding(text: &str, padding: usize) -> Vec<u8> {
    let content_stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
    let filler = " ".repeat(padding);
    let objects = [
        "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n".to_string(),
        "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n".to_string(),
        "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>\nendobj\n"
            .to_string(),
        format!(
            "4 0 obj\n<< /Length {} >>\nstream\n{content_stream}\nendstream\nendobj\n",
            content_stream.len()
        ),
        "5 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n".to_string(),
        format!(
            "6 0 obj\n<< /Length {} >>\nstream\n{filler}\nendstream\nendobj\n",
            filler.len()
        ),
    ];

    let mut buf: Vec<u8> = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::new();
    for obj in &objects {
        offsets.push(buf.len());
        buf.extend_from_slice(obj.as_bytes());
    }

    let xref_pos = buf.len();
    buf.extend_from_slice(b"xref\n0 7\n0000000000 65535 f \n");
    for off in &offsets {
        buf.extend_from_slice(format!("{off:010} 00000 n \n").as_bytes());
    }
    buf.extend_from_slice(
        format!("trailer\n<< /Size 7 /Root 1 0 R >>\nstartxref\n{xref_pos}\n%%EOF\n").as_bytes(),
    );
    buf
}
