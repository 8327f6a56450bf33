//! Render a Liquid template with the embed tags registered.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;

pub fn run(template: PathBuf, output: Option<PathBuf>, vars: Vec<String>) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&template)
        .with_context(|| format!("Failed to read template {}", template.display()))?;
    let globals = parse_vars(&vars)?;

    let rendered = blogkit_tags::render_str(&source, &globals)
        .with_context(|| format!("Failed to render {}", template.display()))?;
    tracing::info!(template = %template.display(), bytes = rendered.len(), "Rendered template");

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Turn `key=value` pairs into template globals.
pub fn parse_vars(vars: &[String]) -> anyhow::Result<liquid::Object> {
    let mut map = BTreeMap::new();
    for var in vars {
        let (key, value) = var
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Expected KEY=VALUE, got '{var}'"))?;
        map.insert(key.trim().to_string(), value.to_string());
    }
    liquid::to_object(&map).context("Failed to build template variables")
}
