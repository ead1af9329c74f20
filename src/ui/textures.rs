// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Picture textures for cards, avatars and slides.
//!
//! Pictures load on background threads and arrive over a channel that is
//! polled whenever the picture is asked for. Until then the caller gets
//! `Picture::Loading` and draws a placeholder.

use crate::io::media::{load_reference, LoadedImage};
use crate::util::geometry::{cover_uv, fit_within};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};

/// Current state of one picture.
pub enum Picture {
    Loading,
    Ready {
        texture: egui::TextureHandle,
        width: u32,
        height: u32,
    },
    Unavailable,
}

/// How a picture fills its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Whole picture visible, letterboxed.
    Contain,
    /// Frame filled, overflow cropped.
    Cover,
}

enum Slot {
    Pending(Receiver<Result<LoadedImage, String>>),
    Ready(egui::TextureHandle, u32, u32),
    Failed,
}

/// Decoded pictures keyed by their reference.
pub struct TextureCache {
    /// Directory relative references resolve against
    base_dir: Option<PathBuf>,
    slots: HashMap<String, Slot>,
}

impl TextureCache {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self {
            base_dir,
            slots: HashMap::new(),
        }
    }

    /// Point relative references somewhere else and forget everything loaded.
    pub fn set_base_dir(&mut self, base_dir: Option<PathBuf>) {
        self.base_dir = base_dir;
        self.slots.clear();
    }

    /// Get the picture for `reference`, starting a load on first request.
    pub fn picture(&mut self, ctx: &egui::Context, reference: &str) -> Picture {
        let reference = reference.trim();
        if reference.is_empty() {
            return Picture::Unavailable;
        }

        if !self.slots.contains_key(reference) {
            let receiver = self.spawn_load(reference.to_string());
            self.slots.insert(reference.to_string(), Slot::Pending(receiver));
        }

        let Some(slot) = self.slots.get_mut(reference) else {
            return Picture::Unavailable;
        };

        if let Slot::Pending(receiver) = slot {
            match receiver.try_recv() {
                Ok(Ok(loaded)) => {
                    let size = [loaded.width as usize, loaded.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                    let texture = ctx.load_texture(reference, color_image, egui::TextureOptions::LINEAR);
                    *slot = Slot::Ready(texture, loaded.width, loaded.height);
                }
                Ok(Err(e)) => {
                    log::warn!("{e}");
                    *slot = Slot::Failed;
                }
                Err(TryRecvError::Empty) => {
                    ctx.request_repaint();
                    return Picture::Loading;
                }
                Err(TryRecvError::Disconnected) => *slot = Slot::Failed,
            }
        }

        match slot {
            Slot::Ready(texture, width, height) => Picture::Ready {
                texture: texture.clone(),
                width: *width,
                height: *height,
            },
            Slot::Pending(_) => Picture::Loading,
            Slot::Failed => Picture::Unavailable,
        }
    }

    fn spawn_load(&self, reference: String) -> Receiver<Result<LoadedImage, String>> {
        let (sender, receiver) = channel();
        let base_dir = self.base_dir.clone();

        std::thread::spawn(move || {
            let result = load_reference(&reference, base_dir.as_deref())
                .map_err(|e| format!("Failed to load image {reference}: {e:#}"));
            if result.is_ok() {
                log::info!("Loaded image: {reference}");
            }
            let _ = sender.send(result);
        });

        receiver
    }
}

/// Draw `picture` into `rect`, or a placeholder while it is unavailable.
pub fn paint(ui: &egui::Ui, rect: egui::Rect, picture: &Picture, fit: Fit, rounding: f32) {
    let painter = ui.painter();
    painter.rect_filled(rect, rounding, ui.visuals().extreme_bg_color);

    match picture {
        Picture::Ready {
            texture,
            width,
            height,
        } => match fit {
            Fit::Contain => {
                let (w, h) = fit_within(*width, *height, rect.width(), rect.height());
                let image_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(w, h));
                painter.image(
                    texture.id(),
                    image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            Fit::Cover => {
                let (min_u, min_v, max_u, max_v) = cover_uv(*width, *height, rect.width(), rect.height());
                painter.image(
                    texture.id(),
                    rect,
                    egui::Rect::from_min_max(egui::pos2(min_u, min_v), egui::pos2(max_u, max_v)),
                    egui::Color32::WHITE,
                );
            }
        },
        Picture::Loading => {
            let time = ui.input(|i| i.time);
            let pulse = (((time * 2.0).sin() + 1.0) / 2.0) as f32;
            let shade = ui.visuals().faint_bg_color.gamma_multiply(0.5 + pulse * 0.5);
            painter.rect_filled(rect.shrink(1.0), rounding, shade);
        }
        Picture::Unavailable => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "🖼",
                egui::FontId::proportional(rect.height().min(48.0) * 0.6),
                ui.visuals().weak_text_color(),
            );
        }
    }
}
