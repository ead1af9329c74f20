// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command line arguments and site settings.

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Browse portfolio projects with image and video slideshows.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Project document (JSON or YAML). Uses the bundled projects if omitted.
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Site settings file (JSON or YAML).
    #[arg(long, value_name = "PATH")]
    pub site: Option<PathBuf>,

    /// Open directly on the detail page of this project id.
    #[arg(long, value_name = "ID")]
    pub project: Option<String>,
}

/// Site identity used for page metadata and listing layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub base_url: String,
    pub twitter_site: String,
    pub default_title: String,
    pub default_description: String,
    pub default_image: String,
    pub default_keywords: Vec<String>,
    /// Number of cards on the home page.
    pub preview_count: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Md Ranju Portfolio".to_string(),
            base_url: "https://mdranju.xyz".to_string(),
            twitter_site: "@muhammad_ranju".to_string(),
            default_title: "Default Project Title".to_string(),
            default_description: "Default Project Description".to_string(),
            default_image: "https://res.cloudinary.com/nodelove/image/upload/f_auto,q_auto/v1/mdranju/ngpfp5vkd5ky5wfst2ec".to_string(),
            default_keywords: vec![
                "projects".to_string(),
                "portfolio".to_string(),
                "example".to_string(),
            ],
            preview_count: 6,
        }
    }
}

impl SiteConfig {
    /// Load settings from a YAML or JSON file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read site config {}", path.display()))?;
        let extension = path.extension().and_then(|s| s.to_str());
        let config = match extension {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
                .with_context(|| format!("Invalid YAML in {}", path.display()))?,
            Some("json") => serde_json::from_str(&text)
                .with_context(|| format!("Invalid JSON in {}", path.display()))?,
            _ => bail!("Unsupported site config extension: {:?}", extension),
        };
        Ok(config)
    }

    /// Canonical address of a project's detail page.
    pub fn project_url(&self, id: &str) -> String {
        format!("{}/project/{}", self.base_url.trim_end_matches('/'), id)
    }
}
