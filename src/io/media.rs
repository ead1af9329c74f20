// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Picture loading for slideshow items, cards and avatars.
//!
//! References are either `http(s)` URLs, fetched over the network, or
//! local paths. Relative paths (and site-rooted ones like `/cover.jpg`)
//! resolve against the directory of the project document.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Shared by every loader thread so connections are pooled.
static HTTP_CLIENT: LazyLock<reqwest::Result<reqwest::blocking::Client>> = LazyLock::new(|| {
    reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
});

fn http_client() -> Result<&'static reqwest::blocking::Client> {
    HTTP_CLIENT
        .as_ref()
        .map_err(|e| anyhow::anyhow!("HTTP client unavailable: {e}"))
}

/// A decoded RGBA picture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Where a picture reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    Local(PathBuf),
}

/// Work out where to load `reference` from.
pub fn resolve(reference: &str, base_dir: Option<&Path>) -> Result<ImageSource> {
    let reference = reference.trim();
    if reference.is_empty() {
        bail!("Empty image reference");
    }
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return Ok(ImageSource::Remote(reference.to_string()));
    }

    let path = Path::new(reference.strip_prefix("file://").unwrap_or(reference));
    if path.is_absolute() && path.exists() {
        return Ok(ImageSource::Local(path.to_path_buf()));
    }
    let relative = path.strip_prefix("/").unwrap_or(path);
    match base_dir {
        Some(dir) => Ok(ImageSource::Local(dir.join(relative))),
        None => Ok(ImageSource::Local(relative.to_path_buf())),
    }
}

/// Load an image file from disk.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?
        .to_rgba8();
    Ok(LoadedImage {
        width: img.width(),
        height: img.height(),
        pixels: img.into_raw(),
    })
}

/// Download and decode an image.
pub fn fetch_image(url: &str) -> Result<LoadedImage> {
    let bytes = http_client()?
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("Failed to fetch {url}"))?
        .bytes()?;
    decode_image(&bytes).with_context(|| format!("Failed to decode {url}"))
}

/// Decode an in-memory encoded image.
pub fn decode_image(bytes: &[u8]) -> Result<LoadedImage> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    Ok(LoadedImage {
        width: img.width(),
        height: img.height(),
        pixels: img.into_raw(),
    })
}

/// Load `reference` from wherever it points.
pub fn load_reference(reference: &str, base_dir: Option<&Path>) -> Result<LoadedImage> {
    match resolve(reference, base_dir)? {
        ImageSource::Remote(url) => fetch_image(&url),
        ImageSource::Local(path) => load_image(&path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path) {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_resolve_remote() {
        assert_eq!(
            resolve("https://x/img.jpg", None).unwrap(),
            ImageSource::Remote("https://x/img.jpg".to_string())
        );
    }

    #[test]
    fn test_resolve_relative_and_site_rooted() {
        let base = Path::new("/srv/site");
        assert_eq!(
            resolve("covers/a.png", Some(base)).unwrap(),
            ImageSource::Local(PathBuf::from("/srv/site/covers/a.png"))
        );
        assert_eq!(
            resolve("/fallback-does-not-exist.jpg", Some(base)).unwrap(),
            ImageSource::Local(PathBuf::from("/srv/site/fallback-does-not-exist.jpg"))
        );
    }

    #[test]
    fn test_resolve_blank_is_error() {
        assert!(resolve("   ", None).is_err());
    }

    #[test]
    fn test_load_reference_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("cover.png"));

        let loaded = load_reference("cover.png", Some(dir.path())).unwrap();
        assert_eq!((loaded.width, loaded.height), (3, 2));
        assert_eq!(loaded.pixels.len(), 3 * 2 * 4);
        assert_eq!(&loaded.pixels[..4], &[10, 20, 30, 255]);

        let file_url = format!("file://{}", dir.path().join("cover.png").display());
        assert!(load_reference(&file_url, None).is_ok());
    }

    #[test]
    fn test_http_client_is_shared() {
        let first = http_client().unwrap() as *const _;
        let second = http_client().unwrap() as *const _;
        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode_image(b"definitely not an image").is_err());
    }
}
