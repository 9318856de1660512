//! Writes a finished generation to disk.
//!
//! Overwrite decisions are collected for every file before the first write.
use log::debug;
use std::fs;
use std::path::Path;

use crate::composer::RenderedFile;
use crate::error::Result;
use crate::prompt::Prompter;

/// What happened to one rendered file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Created,
    Overwritten,
    Skipped,
}

impl std::fmt::Display for WriteAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteAction::Created => write!(f, "create"),
            WriteAction::Overwritten => write!(f, "overwrite"),
            WriteAction::Skipped => write!(f, "skip"),
        }
    }
}

/// Decides, for each file, whether it will be created, overwritten or skipped.
pub fn plan_writes(
    files: &[RenderedFile],
    prompt: &dyn Prompter,
    force: bool,
) -> Result<Vec<WriteAction>> {
    files
        .iter()
        .map(|file| {
            if !file.destination.exists() {
                return Ok(WriteAction::Created);
            }
            let destination = file.destination.display();
            let question = format!("File '{destination}' already exists. Overwrite it?");
            let overwrite = prompt.confirm(force, question)?;
            Ok(if overwrite {
                WriteAction::Overwritten
            } else {
                WriteAction::Skipped
            })
        })
        .collect()
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest_path, content)?;
    Ok(())
}

/// Applies a plan produced by [`plan_writes`].
pub fn write_files(files: &[RenderedFile], plan: &[WriteAction]) -> Result<()> {
    for (file, action) in files.iter().zip(plan) {
        if *action == WriteAction::Skipped {
            debug!("Skipping {}", file.destination.display());
            continue;
        }
        write_file(&file.content, &file.destination)?;
    }
    Ok(())
}
