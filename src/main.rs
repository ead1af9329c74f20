// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! folio - portfolio project browser
//!
//! A cross-platform desktop application for browsing portfolio projects:
//! card listings, and detail pages with image and video slideshows.

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::{DataSource, FolioApp, Route};
use clap::Parser;
use config::{Cli, SiteConfig};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let site = match &cli.site {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    let source = match cli.data {
        Some(path) => DataSource::File(path),
        None => DataSource::Bundled,
    };
    let route = match cli.project {
        Some(id) => Route::Project(id),
        None => Route::Home,
    };
    log::info!("Starting on {:?} with {:?}", route, source);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([480.0, 600.0])
            .with_title(site.site_name.as_str()),
        ..Default::default()
    };

    // Run the application
    let title = site.site_name.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(FolioApp::new(site, source, route)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
