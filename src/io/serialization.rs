// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project document loading and page metadata export.
//!
//! Documents and exports come in YAML and JSON; the format is picked from
//! the file extension.

use crate::models::metadata::PageMetadata;
use crate::models::project::ProjectDocument;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Project document compiled into the binary.
const BUNDLED_PROJECTS: &str = include_str!("../../assets/projects.json");

/// Parse the bundled project document.
pub fn bundled_document() -> Result<ProjectDocument> {
    serde_json::from_str(BUNDLED_PROJECTS).context("Bundled project document is invalid")
}

/// Import a project document from YAML or JSON.
pub fn import_document(path: &Path) -> Result<ProjectDocument> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let extension = path.extension().and_then(|s| s.to_str());
    let document = match extension {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("Invalid YAML in {}", path.display()))?,
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?,
        _ => bail!("Unsupported file extension: {:?}", extension),
    };
    Ok(document)
}

/// Export page metadata to YAML format.
pub fn export_metadata_yaml(metadata: &PageMetadata, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(metadata)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export page metadata to JSON format.
pub fn export_metadata_json(metadata: &PageMetadata, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(metadata)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Export page metadata in the format implied by the extension.
pub fn export_metadata(metadata: &PageMetadata, path: &Path) -> Result<()> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => export_metadata_yaml(metadata, path),
        Some("json") => export_metadata_json(metadata, path),
        _ => bail!("Unsupported file extension: {:?}", extension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::models::catalog::Catalog;

    #[test]
    fn test_bundled_document_loads() {
        let document = bundled_document().unwrap();
        let catalog = Catalog::from_document(document);
        assert!(!catalog.is_empty());
        assert!(catalog.projects().iter().all(|p| p.media_list().len() >= 1));
    }

    #[test]
    fn test_import_yaml_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.yaml");
        std::fs::write(
            &path,
            "project:\n  - _id: y1\n    title: From YAML\n    image: cover.png\n    tags: [rust]\n",
        )
        .unwrap();

        let document = import_document(&path).unwrap();
        assert_eq!(document.project.len(), 1);
        assert_eq!(document.project[0].title, "From YAML");
        assert_eq!(document.project[0].tags, vec!["rust"]);
    }

    #[test]
    fn test_import_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(import_document(&path).is_err());
    }

    #[test]
    fn test_import_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(import_document(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_export_metadata_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = PageMetadata::for_project(None, "x", &SiteConfig::default());

        let json_path = dir.path().join("meta.json");
        export_metadata(&metadata, &json_path).unwrap();
        let back: PageMetadata =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(back, metadata);

        let yaml_path = dir.path().join("meta.yml");
        export_metadata(&metadata, &yaml_path).unwrap();
        let back: PageMetadata =
            serde_yaml::from_str(&std::fs::read_to_string(&yaml_path).unwrap()).unwrap();
        assert_eq!(back, metadata);

        assert!(export_metadata(&metadata, &dir.path().join("meta.txt")).is_err());
    }
}
