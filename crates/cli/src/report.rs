use anyhow::{Context, Result};
use pqtree::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Machine-readable summary of one search run.
#[derive(Serialize)]
pub struct Report {
    pub version: String,
    pub term_min: i64,
    pub term_max: i64,
    pub depth: u32,
    pub num_matrices: usize,
    pub triplets: Vec<ReportTriplet>,
}

#[derive(Serialize)]
pub struct ReportTriplet {
    pub coeffs: [[i64; 4]; 3],
    pub names: [String; 3],
}

impl Report {
    pub fn new(
        term_min: i64,
        term_max: i64,
        depth: u32,
        num_matrices: usize,
        found: &[Triplet],
    ) -> Self {
        let triplets = found
            .iter()
            .map(|t| ReportTriplet {
                coeffs: t.ms.map(|am| {
                    [am.matrix.a(), am.matrix.b(), am.matrix.c(), am.matrix.d()]
                }),
                names: t.names().map(str::to_string),
            })
            .collect();
        Self {
            version: pqtree::VERSION.to_string(),
            term_min,
            term_max,
            depth,
            num_matrices,
            triplets,
        }
    }
}

/// Write the report as pretty JSON, creating parent directories as needed.
pub fn write_report<P: AsRef<Path>>(path: P, report: &Report) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path.to_path_buf())
}
