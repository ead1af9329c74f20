// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Card and detail text formatting.

use chrono::{DateTime, Utc};

/// Shorten `text` to `keep` characters plus `...` once it exceeds `limit`.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate(text: &str, limit: usize, keep: usize) -> String {
    if text.chars().count() > limit {
        let mut short: String = text.chars().take(keep).collect();
        short.push_str("...");
        short
    } else {
        text.to_string()
    }
}

/// `#category` chip text, lower-cased.
pub fn category_label(category: &str) -> String {
    format!("#{}", category.to_lowercase())
}

/// Day/month/year, or an empty string when the date is unknown.
pub fn format_date(date: Option<&DateTime<Utc>>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}
