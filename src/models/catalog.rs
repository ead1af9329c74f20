// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The loaded set of projects and detail page lookup.

use super::metadata::PageMetadata;
use super::project::{Project, ProjectDocument};
use crate::config::SiteConfig;

/// Projects in document order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

/// Outcome of resolving a detail page.
#[derive(Debug, Clone)]
pub enum DetailPage {
    Found {
        project: Project,
        metadata: PageMetadata,
    },
    NotFound {
        id: String,
        metadata: PageMetadata,
    },
}

impl DetailPage {
    pub fn metadata(&self) -> &PageMetadata {
        match self {
            DetailPage::Found { metadata, .. } | DetailPage::NotFound { metadata, .. } => metadata,
        }
    }
}

impl Catalog {
    /// Map every record of the document, skipping the ones that fail validation.
    pub fn from_document(document: ProjectDocument) -> Self {
        let total = document.project.len();
        let projects: Vec<Project> = document
            .project
            .into_iter()
            .filter_map(|record| match Project::try_from(record) {
                Ok(project) => Some(project),
                Err(e) => {
                    log::warn!("Skipping project record: {e}");
                    None
                }
            })
            .collect();

        log::info!("Loaded {} of {} projects", projects.len(), total);
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// The first `count` projects, for the home page.
    pub fn preview(&self, count: usize) -> &[Project] {
        &self.projects[..count.min(self.projects.len())]
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Resolve the detail page for `id` together with its metadata.
    pub fn assemble_page(&self, id: &str, site: &SiteConfig) -> DetailPage {
        let project = self.find(id);
        let metadata = PageMetadata::for_project(project, id, site);
        match project {
            Some(project) => DetailPage::Found {
                project: project.clone(),
                metadata,
            },
            None => {
                log::info!("Project {id} not found");
                DetailPage::NotFound {
                    id: id.to_string(),
                    metadata,
                }
            }
        }
    }
}
