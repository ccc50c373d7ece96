use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use egui::load::BytesPoll;

/// Extensions the `image` decoders compiled into this build can read.
pub fn upload_extensions() -> Vec<&'static str> {
    image::ImageFormat::all()
        .filter(|f| f.reading_enabled())
        .flat_map(|f| f.extensions_str().iter().copied())
        .collect()
}

/// Asks for an image file to upload. Uploading itself is not implemented;
/// a chosen file is only reported.
pub fn pick_upload() -> Option<PathBuf> {
    let exts = upload_extensions();
    let path = rfd::FileDialog::new()
        .set_title("Upload Image")
        .add_filter("Images", &exts[..])
        .pick_file()?;
    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    tracing::info!("Uploading {}", name);
    Some(path)
}

/// Offers `file_name` in a save dialog and writes the bytes behind `url` there.
///
/// Fire-and-forget: cancellation and failures are logged, never surfaced.
pub fn save_as(ctx: &egui::Context, url: &str, file_name: &str) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Download")
        .set_file_name(file_name)
        .add_filter("JPEG", &["jpg", "jpeg"]);
    if let Some(dir) = dirs::download_dir() {
        dialog = dialog.set_directory(dir);
    }
    let Some(dest) = dialog.save_file() else {
        tracing::debug!("download cancelled");
        return;
    };
    match download(ctx, url, &dest) {
        Ok(()) => tracing::info!(dest = %dest.display(), "saved image"),
        Err(err) => tracing::warn!("download failed: {err:#}"),
    }
}

fn download(ctx: &egui::Context, url: &str, dest: &Path) -> anyhow::Result<()> {
    let bytes = match local_path(url) {
        Some(path) => {
            std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?
        }
        None => cached_bytes(ctx, url)?,
    };
    write_bytes(&bytes, dest)
}

/// Bytes already fetched by the image loaders for the preview.
fn cached_bytes(ctx: &egui::Context, url: &str) -> anyhow::Result<Vec<u8>> {
    match ctx.try_load_bytes(url) {
        Ok(BytesPoll::Ready { bytes, .. }) => Ok(bytes.to_vec()),
        Ok(BytesPoll::Pending { .. }) => bail!("{url} is still loading"),
        Err(err) => bail!("loading {url}: {err}"),
    }
}

/// Filesystem path for `file://` URIs and bare paths.
fn local_path(url: &str) -> Option<PathBuf> {
    if let Some(rest) = url.strip_prefix("file://") {
        return Some(PathBuf::from(rest));
    }
    if url.contains("://") {
        return None;
    }
    Some(PathBuf::from(url))
}

fn write_bytes(bytes: &[u8], dest: &Path) -> anyhow::Result<()> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(dest, bytes).with_context(|| format!("writing {}", dest.display()))
}
