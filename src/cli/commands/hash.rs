//! `ctxsum hash` - compute the context fingerprint

use crate::cli::commands::build_fingerprinter;
use crate::ignore::{NullObserver, TraceObserver, WalkObserver};
use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    path: PathBuf,
    ignore_file: String,
    always_include: Vec<String>,
    length: usize,
    full: bool,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let length = if full { 0 } else { length };
    let fingerprinter =
        build_fingerprinter(&path, &ignore_file, &always_include).truncate_len(length);

    let mut trace = TraceObserver;
    let mut null = NullObserver;
    let observer: &mut dyn WalkObserver = if verbose { &mut trace } else { &mut null };

    let hash = fingerprinter.hash_observed(observer)?;

    if json {
        let payload = json!({
            "root": path,
            "ignore_file": ignore_file,
            "hash": hash,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{hash}");
    }

    Ok(())
}
