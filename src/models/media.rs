// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media references and their classification.
//!
//! A media reference is an opaque string pointing either at a picture or at
//! a video hosted on YouTube. Whether it is one or the other is derived from
//! the string alone; nothing here touches the network.

use regex::Regex;
use std::sync::LazyLock;

/// Host fragments that mark a reference as a hosted video.
const VIDEO_HOSTS: [&str; 2] = ["youtube.com", "youtu.be"];

/// Length of a YouTube video identifier.
const VIDEO_ID_LEN: usize = 11;

static VIDEO_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("video id pattern is valid")
});

/// How a media reference should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Classify a reference by looking for a known video host in it.
pub fn classify(reference: &str) -> MediaKind {
    if VIDEO_HOSTS.iter().any(|host| reference.contains(host)) {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

/// Extract the 11-character video identifier from a video reference.
///
/// Understands short links (`youtu.be/ID`), embed links (`/embed/ID`),
/// watch links (`watch?v=ID`, `&v=ID`) and the older `v/ID` and `u/x/ID`
/// shapes. Returns `None` when nothing of the right length is found.
pub fn extract_video_id(reference: &str) -> Option<&str> {
    let captures = VIDEO_ID_PATTERN.captures(reference)?;
    let id = captures.get(2)?.as_str();
    (id.len() == VIDEO_ID_LEN).then_some(id)
}

/// Thumbnail picture YouTube serves for a video.
pub fn video_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}

/// Page that plays a video in the browser.
pub fn video_watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Ordered, never-empty list of media references for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaList {
    items: Vec<String>,
}

impl MediaList {
    /// Build a list from the given references, or `None` if there are none.
    pub fn new(items: Vec<String>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Use the slideshow references, or fall back to the primary image alone.
    pub fn with_fallback(slideshow: &[String], primary: &str) -> Self {
        Self::new(slideshow.to_vec()).unwrap_or_else(|| Self {
            items: vec![primary.to_string()],
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: a list holds at least one reference.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the reference at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_video_hosts() {
        assert_eq!(
            classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            MediaKind::Video
        );
        assert_eq!(classify("https://youtu.be/dQw4w9WgXcQ"), MediaKind::Video);
    }

    #[test]
    fn test_classify_everything_else_is_image() {
        assert_eq!(
            classify("https://res.cloudinary.com/demo/image/upload/sample.jpg"),
            MediaKind::Image
        );
        assert_eq!(classify(""), MediaKind::Image);
        assert_eq!(classify("https://vimeo.com/12345"), MediaKind::Image);
    }

    #[test]
    fn test_classify_is_stable() {
        let reference = "https://youtu.be/dQw4w9WgXcQ";
        assert_eq!(classify(reference), classify(reference));
    }

    #[test]
    fn test_extract_video_id_known_shapes() {
        let id = Some("dQw4w9WgXcQ");
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            id
        );
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), id);
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            id
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"),
            id
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1#t=10"),
            id
        );
    }

    #[test]
    fn test_extract_video_id_rejects_malformed() {
        assert_eq!(extract_video_id("https://www.youtube.com/"), None);
        assert_eq!(extract_video_id("https://youtu.be/short"), None);
        assert_eq!(extract_video_id("not a url at all"), None);
    }

    #[test]
    fn test_media_list_fallback_to_primary_image() {
        let list = MediaList::with_fallback(&[], "https://x/img.jpg");
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
        assert_eq!(list.get(0), Some("https://x/img.jpg"));
    }

    #[test]
    fn test_media_list_keeps_slideshow_order() {
        let slides = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        let list = MediaList::with_fallback(&slides, "primary.jpg");
        assert_eq!(list.get(0), Some("a.jpg"));
        assert_eq!(list.get(1), Some("b.jpg"));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn test_media_list_rejects_empty() {
        assert!(MediaList::new(Vec::new()).is_none());
        assert!(MediaList::new(vec!["a.jpg".to_string()]).is_some());
    }
}
