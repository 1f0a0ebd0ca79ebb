//! Program and Data Image Loading.
//!
//! This module reads program images from disk and places them in memory. It performs:
//! 1. **Format selection:** Raw big-endian binary or hex text, by extension or explicitly.
//! 2. **Hex parsing:** One 32-bit word per line, `#` comments and blank lines ignored.
//! 3. **Placement:** Program images at the text base, data images at the data base.

use std::fs;
use std::path::Path;

use crate::common::SimError;
use crate::soc::System;
use crate::soc::traits::Device;

/// On-disk layout of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    /// Raw bytes, words stored big-endian.
    Binary,
    /// Text, one hexadecimal word per line.
    Hex,
}

impl ImageFormat {
    /// Picks the format from a file extension: `.hex` and `.txt` are hex
    /// text, anything else is binary.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("hex") || ext.eq_ignore_ascii_case("txt") => {
                Self::Hex
            }
            _ => Self::Binary,
        }
    }
}

/// Reads an image file into big-endian bytes.
///
/// # Arguments
///
/// * `path` - Image file.
/// * `format` - Explicit format, or `None` to decide from the extension.
///
/// # Errors
///
/// Returns [`SimError::Load`] if the file cannot be read or a hex line is not
/// a valid word.
pub fn read_image(path: &Path, format: Option<ImageFormat>) -> Result<Vec<u8>, SimError> {
    let format = format.unwrap_or_else(|| ImageFormat::from_path(path));
    let load_err = |reason: String| SimError::Load {
        path: path.display().to_string(),
        reason,
    };

    match format {
        ImageFormat::Binary => fs::read(path).map_err(|e| load_err(e.to_string())),
        ImageFormat::Hex => {
            let text = fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
            parse_hex(&text).map_err(load_err)
        }
    }
}

/// Parses hex text into big-endian bytes.
///
/// Each non-blank line holds one word, with an optional `0x` prefix. Text
/// after `#` is ignored.
///
/// # Errors
///
/// Returns a description of the first malformed line.
///
/// # Examples
///
/// ```
/// use mipsim_core::sim::loader::parse_hex;
///
/// let bytes = parse_hex("# nop\n00000000\n0x2408002a  # addiu $t0, $zero, 42\n").unwrap();
/// assert_eq!(bytes, vec![0, 0, 0, 0, 0x24, 0x08, 0x00, 0x2a]);
/// ```
pub fn parse_hex(text: &str) -> Result<Vec<u8>, String> {
    let mut bytes = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let digits = line
            .strip_prefix("0x")
            .or_else(|| line.strip_prefix("0X"))
            .unwrap_or(line);
        let word = u32::from_str_radix(digits, 16)
            .map_err(|_| format!("line {}: {line:?} is not a 32-bit hex word", n + 1))?;
        bytes.extend_from_slice(&word.to_be_bytes());
    }
    Ok(bytes)
}

/// Loads a program image at the start of the text region.
///
/// # Returns
///
/// The image size in bytes.
///
/// # Errors
///
/// Returns [`SimError::Load`] if the image cannot be read or does not fit.
pub fn load_program(
    system: &mut System,
    path: &Path,
    format: Option<ImageFormat>,
) -> Result<usize, SimError> {
    let image = read_image(path, format)?;
    place(path, &image, system.text.address_range().1)?;
    system.load_text(&image)?;
    tracing::info!(path = %path.display(), bytes = image.len(), "loaded program image");
    Ok(image.len())
}

/// Loads a data image at the start of the data region.
///
/// # Returns
///
/// The image size in bytes.
///
/// # Errors
///
/// Returns [`SimError::Load`] if the image cannot be read or does not fit.
pub fn load_data(
    system: &mut System,
    path: &Path,
    format: Option<ImageFormat>,
) -> Result<usize, SimError> {
    let image = read_image(path, format)?;
    place(path, &image, system.data_range().1)?;
    system.load_data(&image)?;
    tracing::info!(path = %path.display(), bytes = image.len(), "loaded data image");
    Ok(image.len())
}

fn place(path: &Path, image: &[u8], capacity: u32) -> Result<(), SimError> {
    if image.len() > capacity as usize {
        return Err(SimError::Load {
            path: path.display().to_string(),
            reason: format!(
                "image is {} bytes but the region holds {capacity}",
                image.len()
            ),
        });
    }
    Ok(())
}
