use std::path::PathBuf;

/// A file-like conversion input: a name, a declared content type, and the
/// whole content readable into memory.
#[async_trait::async_trait]
pub trait IInputFile: Send + Sync {
    fn name(&self) -> &str;
    fn content_type(&self) -> &str;
    async fn read_bytes(&self) -> Result<Vec<u8>, &'static str>;
}

pub struct DiskInputFile {
    pub name: String,
    pub content_type: String,
    pub path: PathBuf,
}

#[async_trait::async_trait]
impl IInputFile for DiskInputFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, &'static str> {
        tokio::fs::read(&self.path).await.map_err(|_| "Could not read file.")
    }
}

/// Upload already held in memory, e.g. received over the wire.
pub struct BytesInputFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[async_trait::async_trait]
impl IInputFile for BytesInputFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, &'static str> {
        Ok(self.bytes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disk_input_reads_the_whole_file() {
        let path = std::env::temp_dir().join("pdfpreview-disk-input-test.pdf");
        tokio::fs::write(&path, b"%PDF-1.7").await.unwrap();
        let file = DiskInputFile {
            name: "report.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            path: path.clone(),
        };
        assert_eq!(file.name(), "report.pdf");
        assert_eq!(file.content_type(), "application/pdf");
        assert_eq!(file.read_bytes().await.unwrap(), b"%PDF-1.7");
        _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn missing_disk_input_is_an_error() {
        let file = DiskInputFile {
            name: "missing.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            path: std::env::temp_dir().join("pdfpreview-missing-input.pdf"),
        };
        assert_eq!(file.read_bytes().await, Err("Could not read file."));
    }
}
