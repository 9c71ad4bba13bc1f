//! Tree-file input and report output.
//!
//! Everything here is host-boundary work: locating serialized statement
//! trees, decoding them, and rendering reports. The extraction core never
//! touches a file.

pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter};

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::errors::{Error, Result};
use crate::core::stmt::Statement;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Decode one serialized statement tree.
///
/// The file holds the root statement of a single method body, produced by a
/// host front end; decoding it is not source parsing.
pub fn read_statement_tree(path: &Path) -> Result<Statement> {
    let contents = fs::read_to_string(path).map_err(|e| Error::FileSystem {
        message: format!("failed to read statement tree: {e}"),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;
    let tree = serde_json::from_str(&contents)?;
    Ok(tree)
}

/// Expand a mix of files and directories into the list of tree files to
/// analyze. Directories contribute their `.json` files recursively, in
/// file-name order; explicit file paths are taken as-is.
pub fn collect_tree_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry =
                    entry.map_err(|e| Error::file_system(format!("walk failed: {e}"), path))?;
                if entry.file_type().is_file() && has_json_extension(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(Error::file_system("no such file or directory", path));
        }
    }

    Ok(files)
}

fn has_json_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("json")
}
