//! `pixelbin config` – show the config in use and validate the API secret.

use anyhow::{Context, Result};
use pixelbin_core::config::{self, PixelbinConfig};
use std::io::Write;
use std::path::Path;

pub fn run_config(path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let (cfg, shown_path) = match path {
        Some(p) => {
            let cfg = config::load_from(p)?.with_overrides(|key| std::env::var(key).ok());
            (cfg, p.to_path_buf())
        }
        None => (config::load_or_init()?, config::config_path()?),
    };
    tracing::debug!("loaded config from {}", shown_path.display());
    report(&cfg, &shown_path, out)
}

fn report(cfg: &PixelbinConfig, path: &Path, out: &mut impl Write) -> Result<()> {
    writeln!(out, "config: {}", path.display())?;
    writeln!(out, "domain: {}", cfg.domain)?;
    cfg.validate().context("API secret check failed")?;
    writeln!(out, "api secret: ok")?;
    Ok(())
}
