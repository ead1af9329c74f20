// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project detail page.
//!
//! A `DetailView` is built each time a project route is entered and owns
//! that page's slideshow, so leaving the page drops its slideshow state.

use super::slideshow;
use super::textures::{self, Fit, TextureCache};
use crate::models::catalog::DetailPage;
use crate::models::metadata::PageMetadata;
use crate::models::project::Project;
use crate::models::slideshow::Slideshow;
use crate::util::markup::{self, Block, BlockKind, Span};
use crate::util::text::format_date;

/// State of one open detail page.
pub struct DetailView {
    page: DetailPage,
    slideshow: Option<Slideshow>,
    description: Vec<Block>,
}

/// Result of detail page interaction.
pub enum DetailAction {
    None,
    Back,
}

impl DetailView {
    pub fn new(page: DetailPage) -> Self {
        let (slideshow, description) = match &page {
            DetailPage::Found { project, .. } => (
                Some(Slideshow::new(project.media_list())),
                project
                    .long_details
                    .as_deref()
                    .map(markup::parse)
                    .unwrap_or_default(),
            ),
            DetailPage::NotFound { .. } => (None, Vec::new()),
        };
        Self {
            page,
            slideshow,
            description,
        }
    }

    pub fn metadata(&self) -> &PageMetadata {
        self.page.metadata()
    }

    pub fn slideshow_mut(&mut self) -> Option<&mut Slideshow> {
        self.slideshow.as_mut()
    }
}

/// Display the detail page.
pub fn show(ui: &mut egui::Ui, view: &mut DetailView, textures: &mut TextureCache) -> DetailAction {
    let mut action = DetailAction::None;

    if ui.button("◀ Back").clicked() {
        action = DetailAction::Back;
    }
    ui.add_space(12.0);

    match &view.page {
        DetailPage::NotFound { .. } => {
            ui.label("Project not found.");
        }
        DetailPage::Found { project, .. } => {
            if let Some(slideshow) = view.slideshow.as_mut() {
                slideshow::show(ui, slideshow, &project.title, textures);
            }
            ui.add_space(16.0);
            show_details(ui, project, &view.description, textures);
        }
    }

    action
}

fn show_details(ui: &mut egui::Ui, project: &Project, description: &[Block], textures: &mut TextureCache) {
    egui::Frame::none()
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .rounding(12.0)
        .inner_margin(egui::vec2(8.0, 4.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(format!("#{}", project.category)).small());
        });

    ui.add_space(8.0);
    ui.heading(egui::RichText::new(&project.title).strong().size(26.0));
    ui.label(project.details.as_str());

    if !description.is_empty() {
        ui.add_space(8.0);
        show_description(ui, description);
    }

    if !project.tags.is_empty() {
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("Tags:").strong());
            for tag in &project.tags {
                egui::Frame::none()
                    .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                    .rounding(10.0)
                    .inner_margin(egui::vec2(10.0, 2.0))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(tag).small());
                    });
            }
        });
    }

    ui.add_space(16.0);
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(48.0, 48.0), egui::Sense::hover());
        let avatar = textures.picture(ui.ctx(), &project.avatar);
        textures::paint(ui, rect, &avatar, Fit::Cover, 8.0);
        ui.vertical(|ui| {
            ui.label(project.author.as_str());
            ui.label(
                egui::RichText::new(format!("Added At: {}", format_date(project.created_at.as_ref())))
                    .small(),
            );
            if project.updated_at.is_some() && project.updated_at != project.created_at {
                ui.label(
                    egui::RichText::new(format!("Updated: {}", format_date(project.updated_at.as_ref())))
                        .small()
                        .weak(),
                );
            }
        });
    });

    ui.add_space(16.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 20.0;
        ui.hyperlink_to("GitHub", &project.source_code);
        if let Some(backend) = &project.backend_source_code {
            ui.hyperlink_to("Backend", backend);
        }
        if let Some(live) = &project.live_link {
            ui.hyperlink_to(egui::RichText::new("↗ Live Demo").strong(), live);
        }
    });
}

fn show_description(ui: &mut egui::Ui, blocks: &[Block]) {
    for block in blocks {
        match block.kind {
            BlockKind::Heading(level) => {
                ui.add_space(6.0);
                let size = match level {
                    1 => 24.0,
                    2 => 21.0,
                    3 => 18.0,
                    _ => 16.0,
                };
                ui.label(egui::RichText::new(block.text()).strong().size(size));
            }
            BlockKind::Paragraph => show_spans(ui, None, &block.spans),
            BlockKind::Bullet => show_spans(ui, Some("•".to_string()), &block.spans),
            BlockKind::Numbered(n) => show_spans(ui, Some(format!("{n}.")), &block.spans),
            BlockKind::Quote => {
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.vertical(|ui| show_spans(ui, None, &block.spans));
                });
            }
            BlockKind::Code => {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new(block.text()).monospace());
                });
            }
        }
        ui.add_space(4.0);
    }
}

fn show_spans(ui: &mut egui::Ui, marker: Option<String>, spans: &[Span]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        if let Some(marker) = marker {
            ui.add_space(12.0);
            ui.label(format!("{marker} "));
        }
        for span in spans {
            let mut text = egui::RichText::new(&span.text);
            if span.bold {
                text = text.strong();
            }
            if span.italic {
                text = text.italics();
            }
            if span.code {
                text = text.code();
            }
            match &span.link {
                Some(url) => {
                    ui.hyperlink_to(text, url);
                }
                None => {
                    ui.label(text);
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::models::catalog::Catalog;
    use crate::models::project::{ProjectDocument, ProjectRecord};

    fn catalog() -> Catalog {
        Catalog::from_document(ProjectDocument {
            project: vec![ProjectRecord {
                id: "p1".to_string(),
                title: "Gallery".to_string(),
                image: "https://x/img.jpg".to_string(),
                slideshow_images: Some(vec![
                    "https://x/1.jpg".to_string(),
                    "https://youtu.be/dQw4w9WgXcQ".to_string(),
                ]),
                long_details: "<p>Hello <b>there</b></p>".to_string(),
                ..Default::default()
            }],
        })
    }

    #[test]
    fn test_found_page_gets_fresh_slideshow() {
        let mut view = DetailView::new(catalog().assemble_page("p1", &SiteConfig::default()));
        let show = view.slideshow_mut().expect("found page has a slideshow");
        assert_eq!(show.len(), 2);
        assert_eq!(show.current_index(), 0);
        assert!(!show.is_playing());
        assert_eq!(view.description.len(), 1);
        assert_eq!(view.metadata().title, "Gallery");
    }

    #[test]
    fn test_not_found_page_has_no_slideshow() {
        let mut view = DetailView::new(catalog().assemble_page("nope", &SiteConfig::default()));
        assert!(view.slideshow_mut().is_none());
        assert!(view.description.is_empty());
    }
}
