// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Navigation bar.
//!
//! This module provides the bar for moving through history and switching
//! between the home page and the full project listing.

use crate::app::Route;

/// Result of navigation bar interaction.
pub enum ToolbarAction {
    None,
    Back,
    Forward,
    Navigate(Route),
}

/// Display the navigation bar for the current route.
pub fn show(ui: &mut egui::Ui, route: &Route, can_back: bool, can_forward: bool) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.add_enabled(can_back, egui::Button::new("◀")).on_hover_text("Back (Alt+←)").clicked() {
            action = ToolbarAction::Back;
        }
        if ui.add_enabled(can_forward, egui::Button::new("▶")).on_hover_text("Forward (Alt+→)").clicked() {
            action = ToolbarAction::Forward;
        }

        ui.separator();

        if ui.selectable_label(*route == Route::Home, "⌂ Home").clicked() {
            action = ToolbarAction::Navigate(Route::Home);
        }
        if ui.selectable_label(*route == Route::Projects, "▦ Projects").clicked() {
            action = ToolbarAction::Navigate(Route::Projects);
        }

        ui.separator();

        let location = match route {
            Route::Home => "/".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::Project(id) => format!("/project/{id}"),
        };
        ui.label(egui::RichText::new(location).italics().weak());
    });

    action
}
