// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio data model and slideshow state.

pub mod catalog;
pub mod media;
pub mod metadata;
pub mod project;
pub mod slideshow;
