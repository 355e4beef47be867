/// Accepts an upload when either the declared content type mentions PDF or
/// the filename carries a `.pdf` suffix, case-insensitively.
pub fn is_pdf_upload(content_type: &str, filename: &str) -> bool {
    content_type.to_ascii_lowercase().contains("pdf")
        || filename.to_ascii_lowercase().ends_with(".pdf")
}
