pub mod parse;
pub mod roots;

pub use parse::run_parse;
pub use roots::run_roots;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a whole file, or stdin when no path is given
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
