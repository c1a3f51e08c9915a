//! `ctxsum files` - list the files the fingerprint would cover

use crate::cli::commands::build_fingerprinter;
use crate::ignore::{NullObserver, TraceObserver, WalkObserver};
use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

pub fn execute(
    path: PathBuf,
    ignore_file: String,
    always_include: Vec<String>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let fingerprinter = build_fingerprinter(&path, &ignore_file, &always_include);

    let mut trace = TraceObserver;
    let mut null = NullObserver;
    let observer: &mut dyn WalkObserver = if verbose { &mut trace } else { &mut null };

    let files = fingerprinter.files_observed(observer)?;

    if json {
        let payload = json!({
            "root": path,
            "ignore_file": ignore_file,
            "count": files.len(),
            "files": files,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        for file in &files {
            println!("{file}");
        }
    }

    Ok(())
}
