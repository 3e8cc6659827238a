//! YAML source loading.
//!
//! This module reads the raw YAML text that paths are resolved against, from
//! a file or from stdin. Gzip-compressed input is decompressed transparently.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Loads YAML text from `path`, or from stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read (missing, permissions, etc.)
/// - Gzipped input is corrupted
/// - The contents are not valid UTF-8
pub fn load_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => load_source_file(path),
        _ => load_source_from_stdin(),
    }
}

/// Loads YAML text from a file on disk.
///
/// Files ending in `.gz` are decompressed before being returned.
///
/// # Examples
///
/// ```no_run
/// use yaml_path::file::loader::load_source_file;
///
/// let source = load_source_file("deployment.yml").unwrap();
/// ```
pub fn load_source_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    if is_gzipped {
        read_gzipped_file(path_ref)
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))
    }
}

/// Loads YAML text from standard input, reading until EOF.
pub fn load_source_from_stdin() -> Result<String> {
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    decode_bytes(buffer)
}

/// Decodes raw input bytes, decompressing them when they carry the gzip magic (0x1f 0x8b).
pub fn decode_bytes(buffer: Vec<u8>) -> Result<String> {
    if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")
    }
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file(path: &Path) -> Result<String> {
    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = flate2::read::GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    let mut decoder = flate2::read::GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
