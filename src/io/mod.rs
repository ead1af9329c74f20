// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for project documents, metadata and pictures.

pub mod media;
pub mod serialization;
