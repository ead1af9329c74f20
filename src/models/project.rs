// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project records.
//!
//! `ProjectRecord` mirrors the JSON document field for field. `Project` is
//! the cleaned-up shape the rest of the application works with; converting
//! one into the other is the only place record fields are interpreted.

use super::media::MediaList;
use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level project document: `{ "project": [ ... ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDocument {
    #[serde(default)]
    pub project: Vec<ProjectRecord>,
}

/// One project exactly as stored in the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub details: String,
    pub long_details: String,
    pub category: String,
    pub author: String,
    pub avatar: String,
    pub image: String,
    pub slideshow_images: Option<Vec<String>>,
    pub live_link: Option<String>,
    pub source_code: String,
    pub backend_source_code: Option<String>,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "__v")]
    pub version: u32,
}

/// A validated project ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub details: String,
    /// HTML markup.
    pub long_details: Option<String>,
    pub category: String,
    pub author: String,
    pub avatar: String,
    pub image: String,
    pub slideshow_images: Vec<String>,
    pub live_link: Option<String>,
    pub source_code: String,
    pub backend_source_code: Option<String>,
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Media shown in the slideshow, falling back to the primary image.
    pub fn media_list(&self) -> MediaList {
        MediaList::with_fallback(&self.slideshow_images, &self.image)
    }
}

impl TryFrom<ProjectRecord> for Project {
    type Error = anyhow::Error;

    fn try_from(record: ProjectRecord) -> Result<Self> {
        if record.id.trim().is_empty() {
            bail!("project \"{}\" has no id", record.title);
        }
        if record.title.trim().is_empty() {
            bail!("project {} has no title", record.id);
        }

        let created_at = parse_timestamp(&record.id, "createdAt", &record.created_at);
        let updated_at = parse_timestamp(&record.id, "updatedAt", &record.updated_at);

        Ok(Self {
            id: record.id,
            title: record.title,
            details: record.details,
            long_details: non_blank(Some(record.long_details)),
            category: record.category,
            author: record.author,
            avatar: record.avatar,
            image: record.image,
            slideshow_images: record.slideshow_images.unwrap_or_default(),
            live_link: non_blank(record.live_link),
            source_code: record.source_code,
            backend_source_code: non_blank(record.backend_source_code),
            tags: record
                .tags
                .iter()
                .map(|tag| tag.trim())
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
            created_at,
            updated_at,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_timestamp(id: &str, field: &str, value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }
    match DateTime::parse_from_rfc3339(value) {
        Ok(timestamp) => Some(timestamp.with_timezone(&Utc)),
        Err(e) => {
            log::debug!("Project {id}: unreadable {field} {value:?}: {e}");
            None
        }
    }
}
