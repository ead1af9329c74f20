// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Slideshow navigation state.
//!
//! One `Slideshow` belongs to one detail view. It tracks which media item is
//! shown and whether the renderer has reported that a video started playing.
//! Every navigation drops back to `Idle`: the next video needs a fresh play
//! signal even if the renderer keeps playing the old one.

use super::media::{classify, MediaKind, MediaList};

/// Whether the current item is a video the renderer reported as playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
}

/// Cyclic navigation over a project's media list.
#[derive(Debug, Clone)]
pub struct Slideshow {
    media: MediaList,
    current: usize,
    playback: PlaybackState,
}

impl Slideshow {
    /// Start at the first item, idle.
    pub fn new(media: MediaList) -> Self {
        Self {
            media,
            current: 0,
            playback: PlaybackState::Idle,
        }
    }

    /// Advance one item, wrapping from the last back to the first.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.media.len();
        self.stop_tracking_playback();
    }

    /// Step back one item, wrapping from the first to the last.
    pub fn previous(&mut self) {
        let len = self.media.len();
        self.current = (self.current + len - 1) % len;
        self.stop_tracking_playback();
    }

    /// Jump straight to `index`.
    ///
    /// `index` must be below [`Slideshow::len`]. Callers get indices by
    /// enumerating the list, so this is asserted in debug builds only.
    pub fn go_to(&mut self, index: usize) {
        debug_assert!(index < self.media.len(), "slide index out of range");
        self.current = index.min(self.media.len() - 1);
        self.stop_tracking_playback();
    }

    /// Record that the renderer started playing the current video.
    ///
    /// Ignored when the current item is not a video, so `Playing` always
    /// refers to a video on screen.
    pub fn notify_playback_started(&mut self) {
        if classify(self.current_item()) != MediaKind::Video {
            log::warn!(
                "Playback signal for non-video slide {} ignored",
                self.current
            );
            return;
        }
        self.playback = PlaybackState::Playing;
        log::debug!("Slide {} playing", self.current);
    }

    /// The reference currently on screen.
    pub fn current_item(&self) -> &str {
        self.media.get(self.current).unwrap_or_default()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    pub fn len(&self) -> usize {
        self.media.len()
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    /// Navigation controls only make sense with more than one item.
    pub fn has_controls(&self) -> bool {
        self.media.len() > 1
    }

    /// One-based position badge, e.g. `2/5`.
    pub fn position_label(&self) -> String {
        format!("{}/{}", self.current + 1, self.media.len())
    }

    fn stop_tracking_playback(&mut self) {
        self.playback = PlaybackState::Idle;
        log::debug!("Slide {} of {}", self.current + 1, self.media.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEO: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    fn slideshow(items: &[&str]) -> Slideshow {
        let media = MediaList::new(items.iter().map(|s| s.to_string()).collect())
            .expect("test list is not empty");
        Slideshow::new(media)
    }

    #[test]
    fn test_new_starts_idle_at_first_item() {
        let show = slideshow(&["a.jpg", "b.jpg"]);
        assert_eq!(show.current_index(), 0);
        assert!(!show.is_playing());
        assert_eq!(show.current_item(), "a.jpg");
    }

    #[test]
    fn test_next_is_modular() {
        for len in 1..=5 {
            let items: Vec<String> = (0..len).map(|i| format!("{i}.jpg")).collect();
            let mut show = Slideshow::new(MediaList::new(items).unwrap());
            for k in 1..=12 {
                show.next();
                assert_eq!(show.current_index(), k % len);
            }
        }
    }

    #[test]
    fn test_previous_from_first_wraps_to_last() {
        for len in 1..=5 {
            let items: Vec<String> = (0..len).map(|i| format!("{i}.jpg")).collect();
            let mut show = Slideshow::new(MediaList::new(items).unwrap());
            show.previous();
            assert_eq!(show.current_index(), len - 1);
        }
    }

    #[test]
    fn test_three_image_scenario() {
        let mut show = slideshow(&["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(show.current_index(), 0);

        show.next();
        show.next();
        show.next();
        assert_eq!(show.current_index(), 0);

        show.previous();
        assert_eq!(show.current_index(), 2);
        assert_eq!(show.current_item(), "c.jpg");
        assert_eq!(show.position_label(), "3/3");
    }

    #[test]
    fn test_play_then_navigate_returns_to_idle() {
        let mut show = slideshow(&[VIDEO, "b.jpg", VIDEO]);
        show.notify_playback_started();
        assert!(show.is_playing());

        show.next();
        assert!(!show.is_playing());

        show.next();
        show.notify_playback_started();
        assert!(show.is_playing());
        show.previous();
        assert!(!show.is_playing());
    }

    #[test]
    fn test_go_to_same_index_resets_playback() {
        let mut show = slideshow(&["a.jpg", VIDEO]);
        show.go_to(1);
        show.notify_playback_started();
        assert!(show.is_playing());

        show.go_to(1);
        assert_eq!(show.current_index(), 1);
        assert!(!show.is_playing());
    }

    #[test]
    fn test_go_to_every_index_from_playing() {
        for target in 0..3 {
            let mut show = slideshow(&[VIDEO, VIDEO, VIDEO]);
            show.notify_playback_started();
            show.go_to(target);
            assert_eq!(show.current_index(), target);
            assert!(!show.is_playing());
        }
    }

    #[test]
    fn test_playback_signal_keeps_index() {
        let mut show = slideshow(&["a.jpg", VIDEO]);
        show.next();
        show.notify_playback_started();
        assert_eq!(show.current_index(), 1);
    }

    #[test]
    fn test_playback_signal_on_image_is_ignored() {
        let mut show = slideshow(&["a.jpg", VIDEO]);
        show.notify_playback_started();
        assert!(!show.is_playing());
    }

    #[test]
    fn test_single_item_has_no_controls() {
        let show = slideshow(&["only.jpg"]);
        assert!(!show.has_controls());
        assert!(!show.is_empty());
        assert!(slideshow(&["a.jpg", "b.jpg"]).has_controls());
    }
}
