// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the aspect-ratio arithmetic used to place pictures
//! inside slideshow and card frames.

/// Largest size with the picture's aspect ratio that fits in the frame.
pub fn fit_within(img_width: u32, img_height: u32, frame_width: f32, frame_height: f32) -> (f32, f32) {
    if img_width == 0 || img_height == 0 || frame_height <= 0.0 {
        return (frame_width, frame_height);
    }
    let img_aspect = img_width as f32 / img_height as f32;
    let frame_aspect = frame_width / frame_height;

    if img_aspect > frame_aspect {
        // Image is wider - fit to width
        (frame_width, frame_width / img_aspect)
    } else {
        // Image is taller - fit to height
        (frame_height * img_aspect, frame_height)
    }
}

/// Normalized texture region that fills the frame and crops the overflow.
///
/// Returns `(min_u, min_v, max_u, max_v)` centered on the picture.
pub fn cover_uv(img_width: u32, img_height: u32, frame_width: f32, frame_height: f32) -> (f32, f32, f32, f32) {
    if img_width == 0 || img_height == 0 || frame_width <= 0.0 || frame_height <= 0.0 {
        return (0.0, 0.0, 1.0, 1.0);
    }
    let img_aspect = img_width as f32 / img_height as f32;
    let frame_aspect = frame_width / frame_height;

    if img_aspect > frame_aspect {
        let visible = frame_aspect / img_aspect;
        let margin = (1.0 - visible) / 2.0;
        (margin, 0.0, 1.0 - margin, 1.0)
    } else {
        let visible = img_aspect / frame_aspect;
        let margin = (1.0 - visible) / 2.0;
        (0.0, margin, 1.0, 1.0 - margin)
    }
}
