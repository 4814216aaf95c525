//! `pixelbin build [--file PATH]` – build a CDN URL from a JSON object.

use anyhow::{Context, Result};
use pixelbin_core::url_model;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads the object from `file` (or stdin when `None`) and prints the URL.
pub fn run_build(file: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let raw = match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read object from stdin")?;
            buf
        }
    };
    build_from_str(&raw, out)
}

pub(crate) fn build_from_str(raw: &str, out: &mut impl Write) -> Result<()> {
    let value: serde_json::Value = serde_json::from_str(raw).context("parse JSON object")?;
    let url = url_model::obj_to_url_from_value(&value)?;
    writeln!(out, "{url}")?;
    Ok(())
}
