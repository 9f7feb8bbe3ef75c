use std::fs;
use std::path::{Path, PathBuf};

const TEMPLATE: &str = include_str!("gitignore.template");

/// Built-in `.gitignore` for dotnet projects.
pub fn template() -> &'static str {
    TEMPLATE
}

/// Write the template to `<root>/.gitignore`, replacing whatever was there.
pub fn write(root: &Path) -> std::io::Result<PathBuf> {
    let path = root.join(".gitignore");
    fs::write(&path, to_ascii(template()))?;
    Ok(path)
}

/// Non-ASCII characters become `?`.
fn to_ascii(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
        .collect()
}
