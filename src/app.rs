// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It owns the loaded catalog, the current route with
//! its browsing history, and the open detail view, and it dispatches the
//! actions reported by the UI components.

use crate::config::SiteConfig;
use crate::io::serialization;
use crate::models::catalog::Catalog;
use crate::ui::cards::{self, CardAction, CardStyle};
use crate::ui::detail::{self, DetailAction, DetailView};
use crate::ui::textures::TextureCache;
use crate::ui::toolbar::{self, ToolbarAction};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

const CONTENT_MAX_WIDTH: f32 = 1200.0;

/// A page of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    Project(String),
}

/// Where the project document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Bundled,
    File(PathBuf),
}

impl DataSource {
    /// Directory that relative picture references resolve against.
    fn base_dir(&self) -> Option<PathBuf> {
        match self {
            DataSource::Bundled => None,
            DataSource::File(path) => path.parent().map(|p| p.to_path_buf()),
        }
    }

    fn load(&self) -> Result<Catalog, String> {
        let document = match self {
            DataSource::Bundled => serialization::bundled_document(),
            DataSource::File(path) => serialization::import_document(path),
        }
        .map_err(|e| format!("{e:#}"))?;
        Ok(Catalog::from_document(document))
    }
}

/// Browsing history for back/forward navigation.
struct History {
    /// Routes visited before the current one
    back_stack: Vec<Route>,
    /// Routes left by going back
    forward_stack: Vec<Route>,
    /// Maximum history size
    max_size: usize,
}

impl History {
    fn new() -> Self {
        Self {
            back_stack: Vec::new(),
            forward_stack: Vec::new(),
            max_size: 50, // Keep last 50 routes
        }
    }

    /// Remember the route being left for a new one
    fn push(&mut self, route: Route) {
        self.back_stack.push(route);
        if self.back_stack.len() > self.max_size {
            self.back_stack.remove(0);
        }
        // A new route invalidates the forward history
        self.forward_stack.clear();
    }

    /// Back: restore the previous route
    fn back(&mut self, current: Route) -> Option<Route> {
        let previous = self.back_stack.pop()?;
        self.forward_stack.push(current);
        Some(previous)
    }

    /// Forward: restore the route left by going back
    fn forward(&mut self, current: Route) -> Option<Route> {
        let next = self.forward_stack.pop()?;
        self.back_stack.push(current);
        Some(next)
    }

    fn can_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    fn can_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }
}

/// Result of page interaction.
enum PageAction {
    None,
    Navigate(Route),
    Back,
}

/// Main application state.
pub struct FolioApp {
    /// Site identity and listing settings
    site: SiteConfig,

    /// Where projects are loaded from
    source: DataSource,

    /// Page currently shown
    route: Route,

    /// Back/forward history
    history: History,

    /// Loaded projects (once the loader finishes)
    catalog: Option<Catalog>,

    /// Receiver for background document loading
    loader: Option<Receiver<Result<Catalog, String>>>,

    /// Last loading failure
    load_error: Option<String>,

    /// Open detail page, when the route is a project
    detail: Option<DetailView>,

    /// Decoded pictures
    textures: TextureCache,

    /// Title last sent to the window
    window_title: String,

    show_about: bool,
}

impl FolioApp {
    /// Create the application and start loading projects.
    pub fn new(site: SiteConfig, source: DataSource, route: Route) -> Self {
        let mut app = Self {
            textures: TextureCache::new(source.base_dir()),
            site,
            source,
            route,
            history: History::new(),
            catalog: None,
            loader: None,
            load_error: None,
            detail: None,
            window_title: String::new(),
            show_about: false,
        };
        app.start_loading();
        app
    }

    /// Load the project document on a background thread.
    fn start_loading(&mut self) {
        let (sender, receiver) = channel();
        self.loader = Some(receiver);
        self.catalog = None;
        self.load_error = None;
        self.detail = None;

        let source = self.source.clone();
        std::thread::spawn(move || {
            let result = source.load();
            let _ = sender.send(result);
        });
    }

    /// Switch to another project document.
    fn open_document(&mut self, path: PathBuf) {
        log::info!("Opening project document {}", path.display());
        self.source = DataSource::File(path);
        self.textures.set_base_dir(self.source.base_dir());
        self.start_loading();
    }

    /// Pick up a finished background load.
    fn poll_loader(&mut self) {
        let Some(receiver) = &self.loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };
        self.loader = None;

        match result {
            Ok(catalog) => {
                log::info!("Projects loaded from {:?}", self.source);
                self.catalog = Some(catalog);
                self.enter_route();
            }
            Err(e) => {
                log::error!("Failed to load projects: {}", e);
                self.load_error = Some(e);
            }
        }
    }

    fn is_loading(&self) -> bool {
        self.loader.is_some()
    }

    /// Go to `route`, recording the current one in history.
    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        let previous = std::mem::replace(&mut self.route, route);
        self.history.push(previous);
        log::info!("Navigated to {:?}", self.route);
        self.enter_route();
    }

    fn go_back(&mut self) {
        if let Some(previous) = self.history.back(self.route.clone()) {
            self.route = previous;
            log::info!("Back to {:?}", self.route);
            self.enter_route();
        }
    }

    fn go_forward(&mut self) {
        if let Some(next) = self.history.forward(self.route.clone()) {
            self.route = next;
            log::info!("Forward to {:?}", self.route);
            self.enter_route();
        }
    }

    /// Build the per-page state for the current route.
    fn enter_route(&mut self) {
        self.detail = match (&self.route, &self.catalog) {
            (Route::Project(id), Some(catalog)) => {
                Some(DetailView::new(catalog.assemble_page(id, &self.site)))
            }
            _ => None,
        };
    }

    /// Export the open page's metadata to a file.
    fn export_metadata(&self, path: PathBuf) {
        if let Some(ref view) = self.detail {
            match serialization::export_metadata(view.metadata(), &path) {
                Ok(_) => log::info!("Exported page metadata to {}", path.display()),
                Err(e) => log::error!("Failed to export page metadata: {}", e),
            }
        }
    }

    /// Keep the window title in step with the page.
    fn update_title(&mut self, ctx: &egui::Context) {
        let title = match &self.detail {
            Some(view) => format!("{} | {}", view.metadata().title, self.site.site_name),
            None => self.site.site_name.clone(),
        };
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (alt, left, right) = ctx.input(|i| {
            (
                i.modifiers.alt,
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });

        if alt {
            if left {
                self.go_back();
            } else if right {
                self.go_forward();
            }
        } else if let Some(slideshow) = self.detail.as_mut().and_then(|v| v.slideshow_mut()) {
            if left {
                slideshow.previous();
            } else if right {
                slideshow.next();
            }
        }
    }

    fn show_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Project Data...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Projects", &["json", "yaml", "yml"])
                            .pick_file()
                        {
                            self.open_document(path);
                        }
                        ui.close_menu();
                    }
                    if ui.add_enabled(!self.is_loading(), egui::Button::new("Reload")).clicked() {
                        self.start_loading();
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.add_enabled_ui(self.detail.is_some(), |ui| {
                        ui.menu_button("Export Page Metadata", |ui| {
                            if ui.button("Export as JSON...").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("JSON", &["json"])
                                    .set_file_name("metadata.json")
                                    .save_file()
                                {
                                    self.export_metadata(path);
                                }
                                ui.close_menu();
                            }
                            if ui.button("Export as YAML...").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("YAML", &["yaml", "yml"])
                                    .set_file_name("metadata.yaml")
                                    .save_file()
                                {
                                    self.export_metadata(path);
                                }
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Go", |ui| {
                    if ui.add_enabled(self.history.can_back(), egui::Button::new("Back (Alt+←)")).clicked() {
                        self.go_back();
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(self.history.can_forward(), egui::Button::new("Forward (Alt+→)"))
                        .clicked()
                    {
                        self.go_forward();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Home").clicked() {
                        self.navigate(Route::Home);
                        ui.close_menu();
                    }
                    if ui.button("All Projects").clicked() {
                        self.navigate(Route::Projects);
                        ui.close_menu();
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn show_home(&mut self, ui: &mut egui::Ui) -> PageAction {
        let mut action = PageAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.heading(egui::RichText::new("My Projects").size(36.0).strong());
            ui.label("Here are some of my projects I have done.");
            ui.add_space(16.0);
        });

        if self.catalog.as_ref().is_some_and(Catalog::is_empty) {
            ui.vertical_centered(|ui| ui.label("No projects yet."));
        } else if let Some(catalog) = &self.catalog {
            let preview = catalog.preview(self.site.preview_count);
            if let CardAction::OpenProject(id) =
                cards::show_grid(ui, preview, CardStyle::Compact, &mut self.textures)
            {
                action = PageAction::Navigate(Route::Project(id));
            }
        } else {
            self.show_loading_state(ui);
        }

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            if ui.button(egui::RichText::new("More Projects").size(16.0)).clicked() {
                action = PageAction::Navigate(Route::Projects);
            }
        });

        action
    }

    fn show_projects(&mut self, ui: &mut egui::Ui) -> PageAction {
        let mut action = PageAction::None;

        ui.add_space(24.0);
        ui.heading(egui::RichText::new("Projects & Products").size(36.0).strong());
        ui.separator();
        let count = self.catalog.as_ref().map_or(0, Catalog::len);
        ui.label(
            egui::RichText::new(format!("Here is some kind of {count} project's I have finished."))
                .size(18.0),
        );
        ui.add_space(16.0);

        if self.catalog.as_ref().is_some_and(Catalog::is_empty) {
            ui.label("No projects yet.");
        } else if let Some(catalog) = &self.catalog {
            if let CardAction::OpenProject(id) =
                cards::show_grid(ui, catalog.projects(), CardStyle::Full, &mut self.textures)
            {
                action = PageAction::Navigate(Route::Project(id));
            }
        } else {
            self.show_loading_state(ui);
        }

        action
    }

    fn show_project(&mut self, ui: &mut egui::Ui) -> PageAction {
        if let Some(view) = self.detail.as_mut() {
            return match detail::show(ui, view, &mut self.textures) {
                DetailAction::Back => PageAction::Back,
                DetailAction::None => PageAction::None,
            };
        }

        if self.load_error.is_some() {
            self.show_loading_state(ui);
        } else {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.spinner();
                ui.add_space(10.0);
                ui.label("Loading project...");
            });
        }
        PageAction::None
    }

    /// Skeleton cards while loading, or the load failure.
    fn show_loading_state(&self, ui: &mut egui::Ui) {
        match &self.load_error {
            Some(e) => {
                ui.label("Failed to load projects.");
                ui.label(egui::RichText::new(e).weak());
            }
            None => cards::show_skeletons(ui),
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for a completed document load
        self.poll_loader();
        if self.is_loading() {
            ctx.request_repaint();
        }

        self.update_title(ctx);
        self.handle_keyboard(ctx);
        self.show_menu(ctx);

        // Navigation bar
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(ui, &self.route, self.history.can_back(), self.history.can_forward())
            })
            .inner;

        match toolbar_action {
            ToolbarAction::Back => self.go_back(),
            ToolbarAction::Forward => self.go_forward(),
            ToolbarAction::Navigate(route) => self.navigate(route),
            ToolbarAction::None => {}
        }

        if self.show_about {
            egui::Window::new("About")
                .open(&mut self.show_about)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(format!("folio {}", env!("CARGO_PKG_VERSION")));
                    ui.label(env!("CARGO_PKG_DESCRIPTION"));
                });
        }

        // Page content (center)
        let page_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let margin = ((ui.available_width() - CONTENT_MAX_WIDTH) / 2.0).max(16.0);
                        egui::Frame::none()
                            .inner_margin(egui::Margin::symmetric(margin, 16.0))
                            .show(ui, |ui| match self.route {
                                Route::Home => self.show_home(ui),
                                Route::Projects => self.show_projects(ui),
                                Route::Project(_) => self.show_project(ui),
                            })
                            .inner
                    })
                    .inner
            })
            .inner;

        // Handle page actions
        match page_action {
            PageAction::Navigate(route) => self.navigate(route),
            // Opened straight onto a project: there is nothing to go back to
            PageAction::Back if !self.history.can_back() => self.navigate(Route::Home),
            PageAction::Back => self.go_back(),
            PageAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_back_and_forward() {
        let mut history = History::new();
        history.push(Route::Home);
        history.push(Route::Projects);

        let current = Route::Project("a".to_string());
        let back = history.back(current.clone());
        assert_eq!(back, Some(Route::Projects));
        assert!(history.can_forward());

        let forward = history.forward(Route::Projects);
        assert_eq!(forward, Some(current));
        assert!(!history.can_forward());
    }

    #[test]
    fn test_history_push_clears_forward() {
        let mut history = History::new();
        history.push(Route::Home);
        history.back(Route::Projects);
        assert!(history.can_forward());

        history.push(Route::Home);
        assert!(!history.can_forward());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = History::new();
        for i in 0..60 {
            history.push(Route::Project(i.to_string()));
        }
        assert_eq!(history.back_stack.len(), 50);
        assert_eq!(history.back_stack[0], Route::Project("10".to_string()));
    }

    #[test]
    fn test_empty_history_cannot_go_back() {
        let mut history = History::new();
        assert!(!history.can_back());
        assert_eq!(history.back(Route::Home), None);
    }

    #[test]
    fn test_bundled_source_loads_catalog() {
        let catalog = DataSource::Bundled.load().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(DataSource::Bundled.base_dir(), None);
    }

    #[test]
    fn test_file_source_reports_errors() {
        let source = DataSource::File(PathBuf::from("/nonexistent/projects.json"));
        assert!(source.load().is_err());
        assert_eq!(source.base_dir(), Some(PathBuf::from("/nonexistent")));
    }

    #[test]
    fn test_entering_project_route_builds_fresh_detail() {
        let mut app = FolioApp {
            site: SiteConfig::default(),
            source: DataSource::Bundled,
            route: Route::Home,
            history: History::new(),
            catalog: Some(DataSource::Bundled.load().unwrap()),
            loader: None,
            load_error: None,
            detail: None,
            textures: TextureCache::new(None),
            window_title: String::new(),
            show_about: false,
        };
        let id = app.catalog.as_ref().unwrap().projects()[0].id.clone();

        app.navigate(Route::Project(id.clone()));
        let slideshow = app.detail.as_mut().and_then(|v| v.slideshow_mut()).unwrap();
        slideshow.next();
        assert_eq!(slideshow.current_index(), 1 % slideshow.len());

        app.go_back();
        assert!(app.detail.is_none());
        app.go_forward();
        assert_eq!(app.route, Route::Project(id));
        let slideshow = app.detail.as_mut().and_then(|v| v.slideshow_mut()).unwrap();
        assert_eq!(slideshow.current_index(), 0);

        app.navigate(Route::Project("missing".to_string()));
        assert!(app.detail.as_mut().unwrap().slideshow_mut().is_none());
    }
}
