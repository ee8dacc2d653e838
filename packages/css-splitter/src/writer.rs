//! Split planning and output file writing.
//!
//! Every section goes to exactly one file: its header's destination, or the
//! table's fallback for the leading section and for unclassified headers.
//! Files are overwritten on each run, never appended to.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::mapping::MappingTable;
use crate::types::Section;

/// One output file of a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Destination path relative to the output directory.
    pub destination: String,

    /// Number of sections assigned to this file.
    pub sections: usize,

    /// Concatenated section text, in input order.
    pub contents: String,
}

/// Assignment of sections to output files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitPlan {
    /// Output files in order of first appearance in the input.
    pub files: Vec<PlannedFile>,

    /// Header texts that matched no mapping rule.
    pub unclassified: Vec<String>,
}

impl SplitPlan {
    /// Build a plan from sections and a mapping table.
    ///
    /// Empty sections are skipped, so a stylesheet that starts with a
    /// header does not produce an empty fallback file.
    #[must_use]
    pub fn build(sections: &[Section<'_>], table: &MappingTable) -> Self {
        let mut plan = Self::default();

        for section in sections {
            if section.is_empty() {
                continue;
            }

            if let Some(header) = section.header {
                if table.classify(header).is_unclassified() {
                    tracing::warn!(
                        header = %header.trim(),
                        fallback = table.fallback(),
                        "Unclassified section header"
                    );
                    plan.unclassified.push(header.trim().to_string());
                }
            }

            let destination = table.destination_for(section.header);
            plan.add(destination, section);
        }

        plan
    }

    fn add(&mut self, destination: &str, section: &Section<'_>) {
        let index = match self.files.iter().position(|f| f.destination == destination) {
            Some(index) => index,
            None => {
                self.files.push(PlannedFile {
                    destination: destination.to_string(),
                    sections: 0,
                    contents: String::new(),
                });
                self.files.len() - 1
            }
        };

        let file = &mut self.files[index];
        file.sections += 1;
        for part in &section.parts {
            file.contents.push_str(part);
        }
    }

    /// Total bytes across all planned files.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.contents.len()).sum()
    }

    /// Write every planned file under `output_base`.
    ///
    /// Parent directories are created as needed. Each file is written to a
    /// temporary sibling, synced, then renamed over the target so a crash
    /// never leaves a half-written file.
    ///
    /// # Returns
    /// Paths of the written files, in plan order
    pub fn write(&self, output_base: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.files.len());

        for file in &self.files {
            let path = write_atomic(&output_base.join(&file.destination), &file.contents)?;
            tracing::debug!(path = %path.display(), bytes = file.contents.len(), "Wrote file");
            written.push(path);
        }

        Ok(written)
    }
}

/// Write `contents` to `path` via a temporary file and rename.
fn write_atomic(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    if let Err(e) = write_and_rename(&temp_file, path, contents) {
        // Best-effort cleanup
        let _ = fs::remove_file(&temp_file);
        return Err(e.into());
    }

    Ok(path.to_path_buf())
}

fn write_and_rename(temp_file: &Path, path: &Path, contents: &str) -> std::io::Result<()> {
    {
        let mut file = File::create(temp_file)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(temp_file, path)
}
