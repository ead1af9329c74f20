// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project card grid and loading skeletons.

use super::textures::{self, Fit, TextureCache};
use crate::models::project::Project;
use crate::util::text::{category_label, format_date, truncate};

const CARD_SPACING: f32 = 24.0;
const MAX_COLUMNS: usize = 3;
const SKELETON_COUNT: usize = 6;

/// Which listing a card is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Home page preview: shorter text, no author row.
    Compact,
    /// Full project listing with author and date.
    Full,
}

impl CardStyle {
    fn title(self, title: &str) -> String {
        match self {
            CardStyle::Compact => truncate(title, 40, 30),
            CardStyle::Full => truncate(title, 40, 38),
        }
    }

    fn details(self, details: &str) -> String {
        match self {
            CardStyle::Compact => truncate(details, 150, 80),
            CardStyle::Full => truncate(details, 150, 150),
        }
    }
}

/// Result of card interaction.
pub enum CardAction {
    None,
    OpenProject(String),
}

/// Columns that fit the available width, like the web layout breakpoints.
fn column_count(width: f32) -> usize {
    if width >= 1024.0 {
        MAX_COLUMNS
    } else if width >= 768.0 {
        2
    } else {
        1
    }
}

fn card_width(ui: &egui::Ui, columns: usize) -> f32 {
    let width = ui.available_width();
    ((width - CARD_SPACING * (columns as f32 - 1.0)) / columns as f32).max(200.0)
}

/// Display a grid of project cards.
pub fn show_grid(
    ui: &mut egui::Ui,
    projects: &[Project],
    style: CardStyle,
    textures: &mut TextureCache,
) -> CardAction {
    let mut action = CardAction::None;
    let columns = column_count(ui.available_width());
    let width = card_width(ui, columns);

    egui::Grid::new(("project_cards", style == CardStyle::Full))
        .num_columns(columns)
        .spacing([CARD_SPACING, CARD_SPACING])
        .show(ui, |ui| {
            for (i, project) in projects.iter().enumerate() {
                if let CardAction::OpenProject(id) = show_card(ui, project, style, width, textures) {
                    action = CardAction::OpenProject(id);
                }
                if (i + 1) % columns == 0 {
                    ui.end_row();
                }
            }
        });

    action
}

fn show_card(
    ui: &mut egui::Ui,
    project: &Project,
    style: CardStyle,
    width: f32,
    textures: &mut TextureCache,
) -> CardAction {
    let mut action = CardAction::None;

    egui::Frame::group(ui.style())
        .rounding(12.0)
        .inner_margin(0.0)
        .show(ui, |ui| {
            ui.set_width(width);
            ui.vertical(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(width, width * 9.0 / 16.0), egui::Sense::hover());
                let picture = textures.picture(ui.ctx(), &project.image);
                textures::paint(ui, rect, &picture, Fit::Cover, 12.0);

                egui::Frame::none().inner_margin(12.0).show(ui, |ui| {
                    ui.label(egui::RichText::new(category_label(&project.category)).small().strong());
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(style.title(&project.title)).strong().size(16.0))
                        .on_hover_text(project.title.as_str());
                    ui.label(style.details(&project.details))
                        .on_hover_text(project.details.as_str());

                    if style == CardStyle::Full {
                        ui.add_space(8.0);
                        show_author(ui, project, textures);
                    }

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.hyperlink_to("GitHub", &project.source_code);
                        if let Some(live) = &project.live_link {
                            ui.hyperlink_to("↗ Live", live);
                        }
                        if ui.button("▦ Details").clicked() {
                            action = CardAction::OpenProject(project.id.clone());
                        }
                    });
                });
            });
        });

    action
}

fn show_author(ui: &mut egui::Ui, project: &Project, textures: &mut TextureCache) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(32.0, 32.0), egui::Sense::hover());
        let avatar = textures.picture(ui.ctx(), &project.avatar);
        textures::paint(ui, rect, &avatar, Fit::Cover, 6.0);

        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&project.author).small().strong());
            ui.label(
                egui::RichText::new(format!("Added: {}", format_date(project.created_at.as_ref())))
                    .small(),
            );
        });
    });
}

/// Display placeholder cards while projects load.
pub fn show_skeletons(ui: &mut egui::Ui) {
    let columns = column_count(ui.available_width());
    let width = card_width(ui, columns);
    let time = ui.input(|i| i.time);
    let pulse = (((time * 2.0).sin() + 1.0) / 2.0) as f32;
    let shade = ui.visuals().widgets.inactive.bg_fill.gamma_multiply(0.4 + pulse * 0.6);

    egui::Grid::new("project_skeletons")
        .num_columns(columns)
        .spacing([CARD_SPACING, CARD_SPACING])
        .show(ui, |ui| {
            for i in 0..SKELETON_COUNT {
                let height = width * 9.0 / 16.0 + 140.0;
                let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
                let painter = ui.painter();
                painter.rect_stroke(rect, 12.0, ui.visuals().widgets.noninteractive.bg_stroke);

                let cover = egui::Rect::from_min_size(rect.min, egui::vec2(width, width * 9.0 / 16.0));
                painter.rect_filled(cover, 12.0, shade);

                let mut y = cover.max.y + 16.0;
                for fraction in [0.3, 0.8, 0.95, 0.6] {
                    let line = egui::Rect::from_min_size(
                        egui::pos2(rect.min.x + 12.0, y),
                        egui::vec2((width - 24.0) * fraction, 14.0),
                    );
                    painter.rect_filled(line, 4.0, shade);
                    y += 28.0;
                }

                if (i + 1) % columns == 0 {
                    ui.end_row();
                }
            }
        });

    ui.ctx().request_repaint();
}
