//! Output writing helpers

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Create a directory and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Write content to a file (creating parent directories) or to stdout.
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            file.write_all(b"\n")?;
        }
    } else {
        println!("{content}");
    }
    Ok(())
}
