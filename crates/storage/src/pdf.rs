use kraftlog_import_domain::{DocumentError, TextExtractor};
use log::debug;

pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_lines(&self, document: &[u8]) -> Result<Vec<String>, DocumentError> {
        let text = pdf_extract::extract_text_from_mem(document)
            .map_err(|err| DocumentError::Pdf(err.to_string()))?;
        let lines = split_lines(&text);
        debug!("extracted {} lines from PDF document", lines.len());
        Ok(lines)
    }
}

/// Split extracted text into lines, treating page breaks as line breaks.
fn split_lines(text: &str) -> Vec<String> {
    text.split(['\n', '\x0C'])
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}
