use anyhow::{Context, Result};
use khata_core::RuleProfile;
use std::fs;
use std::path::Path;

/// Load a rule profile, falling back to the built-in firm standard.
pub fn load_profile(path: Option<&Path>) -> Result<RuleProfile> {
    let Some(path) = path else {
        return Ok(RuleProfile::default());
    };
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

/// Write the default profile so regional stop-word sets can be edited in.
pub fn init_profile(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Profile already exists: {}", path.display());
        return Ok(());
    }
    let s = toml::to_string_pretty(&RuleProfile::default()).context("serialize default profile")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
