// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio browser.

pub mod cards;
pub mod detail;
pub mod slideshow;
pub mod textures;
pub mod toolbar;
