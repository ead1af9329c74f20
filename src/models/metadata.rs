// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Search and social preview metadata for detail pages.

use super::project::Project;
use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};

/// An image shown in link previews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewImage {
    pub url: String,
    pub alt: String,
}

/// Open Graph tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub images: Vec<PreviewImage>,
    pub site_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// Twitter card tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterCard {
    pub title: String,
    pub description: String,
    pub images: Vec<PreviewImage>,
    pub card: String,
    pub site: String,
}

/// Everything a page advertises about itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

impl PageMetadata {
    /// Build metadata for the detail page of `id`.
    ///
    /// Missing projects, and projects with blank fields, fall back to the
    /// site defaults so a page always has a title and a preview image.
    pub fn for_project(project: Option<&Project>, id: &str, site: &SiteConfig) -> Self {
        let title = field_or(project.map(|p| p.title.as_str()), &site.default_title);
        let description = field_or(project.map(|p| p.details.as_str()), &site.default_description);
        let image = field_or(project.map(|p| p.image.as_str()), &site.default_image);
        let keywords = match project {
            Some(p) => p.tags.clone(),
            None => site.default_keywords.clone(),
        };

        let images = vec![PreviewImage {
            url: image,
            alt: title.clone(),
        }];

        Self {
            open_graph: OpenGraph {
                title: title.clone(),
                description: description.clone(),
                images: images.clone(),
                site_name: site.site_name.clone(),
                kind: "website".to_string(),
                url: site.project_url(id),
            },
            twitter: TwitterCard {
                title: title.clone(),
                description: description.clone(),
                images,
                card: "summary_large_image".to_string(),
                site: site.twitter_site.clone(),
            },
            title,
            description,
            keywords,
        }
    }
}

fn field_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: "p1".to_string(),
            title: "Chat App".to_string(),
            details: "Realtime chat".to_string(),
            long_details: None,
            category: "Web".to_string(),
            author: "Md Ranju".to_string(),
            avatar: String::new(),
            image: "https://x/chat.jpg".to_string(),
            slideshow_images: Vec::new(),
            live_link: None,
            source_code: "https://github.com/x/chat".to_string(),
            backend_source_code: None,
            tags: vec!["socket.io".to_string(), "react".to_string()],
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_metadata_from_project() {
        let site = SiteConfig::default();
        let meta = PageMetadata::for_project(Some(&project()), "p1", &site);

        assert_eq!(meta.title, "Chat App");
        assert_eq!(meta.description, "Realtime chat");
        assert_eq!(meta.keywords, vec!["socket.io", "react"]);
        assert_eq!(meta.open_graph.url, "https://mdranju.xyz/project/p1");
        assert_eq!(meta.open_graph.kind, "website");
        assert_eq!(meta.open_graph.images[0].url, "https://x/chat.jpg");
        assert_eq!(meta.open_graph.images[0].alt, "Chat App");
        assert_eq!(meta.twitter.card, "summary_large_image");
        assert_eq!(meta.twitter.site, site.twitter_site);
    }

    #[test]
    fn test_metadata_defaults_without_project() {
        let site = SiteConfig::default();
        let meta = PageMetadata::for_project(None, "missing", &site);

        assert_eq!(meta.title, site.default_title);
        assert_eq!(meta.description, site.default_description);
        assert_eq!(meta.keywords, site.default_keywords);
        assert_eq!(meta.twitter.images[0].url, site.default_image);
        assert_eq!(meta.open_graph.url, "https://mdranju.xyz/project/missing");
    }

    #[test]
    fn test_metadata_blank_fields_use_defaults() {
        let site = SiteConfig::default();
        let mut bare = project();
        bare.image.clear();
        let meta = PageMetadata::for_project(Some(&bare), "p1", &site);

        assert_eq!(meta.open_graph.images[0].url, site.default_image);
    }

    #[test]
    fn test_found_project_without_tags_keeps_empty_keywords() {
        let site = SiteConfig::default();
        let mut untagged = project();
        untagged.tags.clear();

        let meta = PageMetadata::for_project(Some(&untagged), "p1", &site);
        assert!(meta.keywords.is_empty());

        let missing = PageMetadata::for_project(None, "p1", &site);
        assert_eq!(missing.keywords, site.default_keywords);
    }

    #[test]
    fn test_metadata_serializes_with_web_keys() {
        let meta = PageMetadata::for_project(Some(&project()), "p1", &SiteConfig::default());
        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["openGraph"]["siteName"], "Md Ranju Portfolio");
        assert_eq!(json["openGraph"]["type"], "website");
        assert_eq!(json["twitter"]["card"], "summary_large_image");
    }
}
