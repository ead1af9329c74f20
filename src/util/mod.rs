// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Layout, text and markup helpers.

pub mod geometry;
pub mod markup;
pub mod text;
