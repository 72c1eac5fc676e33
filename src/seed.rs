//! Reading and writing stroke documents on disk.
//!
//! Files hold an [`ImageData`] as JSON, optionally gzip-compressed. Readers
//! detect compression from the magic bytes; writers compress when the target
//! path ends in `.gz`.

use crate::draw::ImageData;
use anyhow::{Context, Result};
use flate2::{Compression, bufread::GzDecoder, write::GzEncoder};
use log::{info, warn};
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Loads seed strokes from `path`.
///
/// A missing or unreadable file is an error. Content that is not a valid
/// stroke document (including a broken gzip stream) yields an empty document.
pub fn load_image_data(path: &Path) -> Result<ImageData> {
    let file_bytes =
        fs::read(path).with_context(|| format!("failed to read strokes from {}", path.display()))?;

    let decompressed = if is_gzip(&file_bytes) {
        let mut decoder = GzDecoder::new(&file_bytes[..]);
        let mut out = Vec::new();
        if let Err(err) = decoder.read_to_end(&mut out) {
            warn!("Stroke file {} is not valid gzip: {err}", path.display());
            return Ok(ImageData::default());
        }
        out
    } else {
        file_bytes
    };

    let text = String::from_utf8_lossy(&decompressed);
    let data = ImageData::parse_or_default(Some(&text));
    info!(
        "Loaded {} stroke(s) from {}",
        data.strokes.len(),
        path.display()
    );
    Ok(data)
}

/// Writes `data` to `path` through a temporary file and a rename.
pub fn save_image_data(path: &Path, data: &ImageData) -> Result<()> {
    let mut bytes =
        serde_json::to_vec_pretty(data).context("failed to serialise stroke document")?;

    let compress = path.extension().is_some_and(|ext| ext == "gz");
    if compress {
        bytes = compress_bytes(&bytes)?;
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let tmp_path = temp_path(path);
    {
        let mut tmp_file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .with_context(|| format!("failed to open temporary file {}", tmp_path.display()))?;
        tmp_file
            .write_all(&bytes)
            .context("failed to write stroke document")?;
        tmp_file
            .sync_all()
            .context("failed to sync temporary file")?;
    }

    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "failed to move temporary file {} -> {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    info!(
        "Saved {} stroke(s) to {} ({} bytes, compression={})",
        data.strokes.len(),
        path.display(),
        bytes.len(),
        compress
    );
    Ok(())
}

fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .context("failed to compress stroke document")?;
    encoder
        .finish()
        .context("failed to finalise compressed stroke document")
}

fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() > 2 && bytes[0] == 0x1f && bytes[1] == 0x8b
}

fn temp_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    let mut candidate = target.with_file_name(&name);
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        let mut numbered = name.clone();
        numbered.push(counter.to_string());
        candidate = target.with_file_name(numbered);
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Point, Stroke};

    fn sample() -> ImageData {
        ImageData::new(vec![Stroke::from(vec![
            Point::anchor(1.0, 2.0),
            Point::new(3.0, 4.0, 0.25),
        ])])
    }

    #[test]
    fn plain_and_gzip_files_load() {
        let temp = tempfile::tempdir().unwrap();
        for name in ["strokes.json", "strokes.json.gz"] {
            let path = temp.path().join(name);
            save_image_data(&path, &sample()).unwrap();
            assert_eq!(load_image_data(&path).unwrap(), sample());
        }

        let raw = fs::read(temp.path().join("strokes.json.gz")).unwrap();
        assert!(is_gzip(&raw));
    }

    #[test]
    fn malformed_content_loads_empty() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{\"strokes\": [oops").unwrap();
        assert!(load_image_data(&path).unwrap().strokes.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        assert!(load_image_data(&temp.path().join("absent.json")).is_err());
    }

    #[test]
    fn save_replaces_existing_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("out.json");
        fs::write(&path, "old").unwrap();
        save_image_data(&path, &sample()).unwrap();
        assert_eq!(load_image_data(&path).unwrap(), sample());
        assert!(!temp.path().join("out.json.tmp").exists());
    }
}
