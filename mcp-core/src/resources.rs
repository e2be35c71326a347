//! Resource registry
//!
//! A static two-entry table mapping `file:///` URIs to backing files under
//! the configured resources directory. Content is read fresh on every call,
//! so edits to the backing files are observable immediately.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{McpCoreError, Result};
use crate::protocol::{McpContent, McpResource};

struct ResourceEntry {
    file: &'static str,
    descriptor: McpResource,
}

/// Registry of the built-in resources
pub struct ResourceRegistry {
    root: PathBuf,
    entries: Vec<ResourceEntry>,
}

impl ResourceRegistry {
    /// Create a registry backed by files under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let entries = vec![
            ResourceEntry {
                file: "sample.txt",
                descriptor: McpResource {
                    uri: "file:///sample.txt".to_string(),
                    name: "Sample Text File".to_string(),
                    description: "A sample text file for demonstration".to_string(),
                    mime_type: "text/plain".to_string(),
                },
            },
            ResourceEntry {
                file: "data.json",
                descriptor: McpResource {
                    uri: "file:///data.json".to_string(),
                    name: "Sample JSON Data".to_string(),
                    description: "Sample JSON data for testing".to_string(),
                    mime_type: "application/json".to_string(),
                },
            },
        ];

        Self {
            root: root.into(),
            entries,
        }
    }

    /// All resource descriptors, in stable order
    pub fn list_resources(&self) -> Vec<&McpResource> {
        self.entries.iter().map(|e| &e.descriptor).collect()
    }

    /// Read a resource by URI, wrapping its content as one text block
    /// tagged with the descriptor's mime type
    pub fn read_resource(&self, uri: &str) -> Result<Vec<McpContent>> {
        debug!("Reading resource: {}", uri);

        let entry = self
            .entries
            .iter()
            .find(|e| e.descriptor.uri == uri)
            .ok_or_else(|| McpCoreError::NotFound(uri.to_string()))?;

        let content = self.read_backing_file(entry.file)?;
        Ok(vec![McpContent::text_with_mime(
            content,
            entry.descriptor.mime_type.clone(),
        )])
    }

    /// Raw bytes of a backing file by name, with a content type negotiated
    /// from the filename extension
    pub fn download(&self, file_name: &str) -> Result<(Vec<u8>, &'static str)> {
        debug!("Downloading resource file: {}", file_name);

        let entry = self
            .entries
            .iter()
            .find(|e| e.file == file_name)
            .ok_or_else(|| McpCoreError::NotFound(file_name.to_string()))?;

        let bytes = std::fs::read(self.root.join(entry.file))
            .map_err(|_| McpCoreError::NotFound(file_name.to_string()))?;

        Ok((bytes, content_type_for(entry.file)))
    }

    fn read_backing_file(&self, file: &str) -> Result<String> {
        std::fs::read_to_string(self.root.join(file))
            .map_err(|_| McpCoreError::NotFound(file.to_string()))
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some("txt") => "text/plain",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}
