// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Slideshow media display.
//!
//! Draws the current slide of a `Slideshow` with its navigation controls.
//! Pictures are drawn directly. Videos show their thumbnail with a play
//! button; playing hands the video to the system browser and reports the
//! start back to the slideshow.

use super::textures::{self, Fit, Picture, TextureCache};
use crate::models::media::{classify, extract_video_id, video_thumbnail_url, video_watch_url, MediaKind};
use crate::models::slideshow::Slideshow;

const NAV_BUTTON_SIZE: f32 = 36.0;
const DOT_SIZE: f32 = 12.0;
const ACTIVE_DOT_WIDTH: f32 = 24.0;
const DOT_GAP: f32 = 8.0;

/// Display the current slide and its controls.
pub fn show(ui: &mut egui::Ui, slideshow: &mut Slideshow, title: &str, textures: &mut TextureCache) {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, width * 9.0 / 16.0), egui::Sense::hover());

    let current = slideshow.current_item().to_string();
    match classify(&current) {
        MediaKind::Image => {
            let picture = textures.picture(ui.ctx(), &current);
            textures::paint(ui, rect, &picture, Fit::Contain, 8.0);
            response.on_hover_text(format!("{} - {}", title, slideshow.current_index() + 1));
        }
        MediaKind::Video => match extract_video_id(&current) {
            Some(video_id) => show_video(ui, rect, slideshow, video_id, textures),
            None => {
                textures::paint(ui, rect, &Picture::Unavailable, Fit::Contain, 8.0);
                ui.painter().text(
                    rect.center() + egui::vec2(0.0, 40.0),
                    egui::Align2::CENTER_CENTER,
                    "Video unavailable",
                    egui::FontId::proportional(14.0),
                    ui.visuals().weak_text_color(),
                );
            }
        },
    }

    if slideshow.has_controls() {
        show_controls(ui, rect, slideshow);
    }
}

fn show_video(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    slideshow: &mut Slideshow,
    video_id: &str,
    textures: &mut TextureCache,
) {
    let thumbnail = textures.picture(ui.ctx(), &video_thumbnail_url(video_id));
    textures::paint(ui, rect, &thumbnail, Fit::Cover, 8.0);

    if slideshow.is_playing() {
        badge(
            ui,
            egui::pos2(rect.min.x + 16.0, rect.min.y + 16.0),
            egui::Align2::LEFT_TOP,
            "● Playing in browser",
        );
        return;
    }

    let play_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(72.0, 52.0));
    let play = egui::Button::new(egui::RichText::new("▶").size(28.0).color(egui::Color32::WHITE))
        .fill(egui::Color32::from_rgb(220, 30, 30))
        .rounding(12.0);
    if ui.put(play_rect, play).on_hover_text("Play video").clicked() {
        let url = video_watch_url(video_id);
        log::info!("Playing {url}");
        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
        slideshow.notify_playback_started();
    }
}

fn show_controls(ui: &mut egui::Ui, rect: egui::Rect, slideshow: &mut Slideshow) {
    let nav_size = egui::vec2(NAV_BUTTON_SIZE, NAV_BUTTON_SIZE);
    let overlay = egui::Color32::from_black_alpha(80);

    let prev_rect = egui::Rect::from_center_size(
        egui::pos2(rect.min.x + 8.0 + NAV_BUTTON_SIZE / 2.0, rect.center().y),
        nav_size,
    );
    let prev = egui::Button::new(egui::RichText::new("◀").color(egui::Color32::WHITE))
        .fill(overlay)
        .rounding(NAV_BUTTON_SIZE / 2.0);
    if ui.put(prev_rect, prev).on_hover_text("Previous slide").clicked() {
        slideshow.previous();
    }

    let next_rect = egui::Rect::from_center_size(
        egui::pos2(rect.max.x - 8.0 - NAV_BUTTON_SIZE / 2.0, rect.center().y),
        nav_size,
    );
    let next = egui::Button::new(egui::RichText::new("▶").color(egui::Color32::WHITE))
        .fill(overlay)
        .rounding(NAV_BUTTON_SIZE / 2.0);
    if ui.put(next_rect, next).on_hover_text("Next slide").clicked() {
        slideshow.next();
    }

    // Dot indicators, centered along the bottom edge
    let count = slideshow.len();
    let current = slideshow.current_index();
    let total_width =
        DOT_SIZE * (count as f32 - 1.0) + ACTIVE_DOT_WIDTH + DOT_GAP * (count as f32 - 1.0);
    let mut x = rect.center().x - total_width / 2.0;
    let y = rect.max.y - 16.0 - DOT_SIZE / 2.0;

    let mut target = None;
    for index in 0..count {
        let dot_width = if index == current { ACTIVE_DOT_WIDTH } else { DOT_SIZE };
        let dot_rect = egui::Rect::from_min_size(egui::pos2(x, y - DOT_SIZE / 2.0), egui::vec2(dot_width, DOT_SIZE));
        let fill = if index == current {
            egui::Color32::WHITE
        } else {
            egui::Color32::from_white_alpha(128)
        };
        let dot = egui::Button::new("").fill(fill).rounding(DOT_SIZE / 2.0);
        if ui
            .put(dot_rect, dot)
            .on_hover_text(format!("Go to slide {}", index + 1))
            .clicked()
        {
            target = Some(index);
        }
        x += dot_width + DOT_GAP;
    }
    if let Some(index) = target {
        slideshow.go_to(index);
    }

    badge(
        ui,
        egui::pos2(rect.max.x - 16.0, rect.max.y - 16.0),
        egui::Align2::RIGHT_BOTTOM,
        &slideshow.position_label(),
    );
}

fn badge(ui: &egui::Ui, anchor_pos: egui::Pos2, anchor: egui::Align2, text: &str) {
    let painter = ui.painter();
    let galley = painter.layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
    let padding = egui::vec2(12.0, 4.0);
    let rect = anchor.anchor_size(anchor_pos, galley.size() + padding * 2.0);
    painter.rect_filled(rect, rect.height() / 2.0, egui::Color32::from_black_alpha(180));
    painter.galley(rect.min + padding, galley, egui::Color32::WHITE);
}
