//! `pixelbin parse <url>` – print the structured form of a CDN URL.

use anyhow::{Context, Result};
use pixelbin_core::url_model;
use std::io::Write;

pub fn run_parse(url: &str, out: &mut impl Write) -> Result<()> {
    let obj = url_model::url_to_obj(url).with_context(|| format!("parse {url}"))?;
    tracing::info!(cloud_name = ?obj.cloud_name, ops = obj.transformations.len(), "parsed url");
    serde_json::to_writer_pretty(&mut *out, &obj).context("serialize url object")?;
    writeln!(out)?;
    Ok(())
}
