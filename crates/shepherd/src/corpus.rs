//! Corpus scanning and cross-reference checking
//!
//! Documents are independent, so per-file parsing and validation fan out
//! across threads with no ordering requirements; the only shared state is
//! the concurrent name index used afterwards by the cross-reference pass.
//! One file's structural failure never aborts the rest of the run.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use dashmap::DashMap;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::context::ValidationContext;
use crate::document::Document;
use crate::error::{CorpusError, Result};
use crate::parse::parse_document;
use crate::report::{CorpusReport, Diagnostic, FileReport, Violation};
use crate::rules::validate_document;

/// Result of checking one file, before the corpus-level passes.
struct Outcome {
    diagnostics: Vec<Diagnostic>,
    doc: Option<Document>,
}

/// Scan a corpus directory and validate every `*.md` file in it.
///
/// The report lists files in deterministic path order regardless of how the
/// parallel scan interleaved.
pub fn scan(root: &Path, ctx: &ValidationContext) -> Result<CorpusReport> {
    if !root.is_dir() {
        return Err(CorpusError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let paths = discover(root)?;
    debug!(files = paths.len(), root = %root.display(), "scanning corpus");
    if paths.is_empty() {
        return Ok(CorpusReport::default());
    }

    let outcomes: DashMap<PathBuf, Outcome> = DashMap::new();
    let names: DashMap<String, PathBuf> = DashMap::new();

    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let chunk_size = paths.len().div_ceil(workers).max(1);

    thread::scope(|scope| {
        let outcomes = &outcomes;
        let names = &names;
        for chunk in paths.chunks(chunk_size) {
            scope.spawn(move || {
                for path in chunk {
                    let outcome = check_file(path, ctx);
                    if let Some(name) = file_name_key(path) {
                        names.insert(name, path.clone());
                    }
                    outcomes.insert(path.clone(), outcome);
                }
            });
        }
    });

    // Deterministic assembly plus the corpus-level passes.
    let mut files = Vec::with_capacity(paths.len());
    let mut numbers: HashMap<u32, PathBuf> = HashMap::new();
    for path in &paths {
        let Some((_, mut outcome)) = outcomes.remove(path) else {
            continue;
        };
        if let Some(doc) = &outcome.doc {
            check_duplicate_number(path, doc, &mut numbers, &mut outcome.diagnostics);
            if ctx.check_references {
                check_references(doc, &names, &mut outcome.diagnostics);
            }
        }
        files.push(FileReport {
            path: path.clone(),
            diagnostics: outcome.diagnostics,
        });
    }

    Ok(CorpusReport { files })
}

/// Collect every `*.md` file under `root`, sorted.
fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| CorpusError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        let is_md = entry.path().extension().is_some_and(|ext| ext == "md");
        if entry.file_type().is_file() && is_md {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Read, parse, and rule-check one file.
///
/// I/O and structural failures become error diagnostics for this file only.
fn check_file(path: &Path, ctx: &ValidationContext) -> Outcome {
    trace!(path = %path.display(), "checking");

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) => {
            return Outcome {
                diagnostics: vec![Diagnostic::error(
                    Violation::Structure,
                    format!("cannot read file: {source}"),
                )],
                doc: None,
            };
        }
    };

    let doc = match parse_document(path.display().to_string(), &text) {
        Ok(doc) => doc,
        Err(error) => {
            return Outcome {
                diagnostics: vec![Diagnostic::error(Violation::Structure, error.to_string())],
                doc: None,
            };
        }
    };

    Outcome {
        diagnostics: validate_document(&doc, ctx),
        doc: Some(doc),
    }
}

/// Two files claiming one assigned number is an ingestion defect; the later
/// path (in scan order) gets the warning.
fn check_duplicate_number(
    path: &Path,
    doc: &Document,
    numbers: &mut HashMap<u32, PathBuf>,
    out: &mut Vec<Diagnostic>,
) {
    let Some(number) = doc.proposal_id().and_then(|id| id.number()) else {
        return;
    };
    if let Some(first) = numbers.get(&number) {
        if first.as_path() != path {
            out.push(Diagnostic::warn(
                Violation::DuplicateProposal,
                format!(
                    "proposal number SE-{number:04} already used by {}",
                    first.display()
                ),
            ));
        }
        return;
    }
    numbers.insert(number, path.to_path_buf());
}

/// Flag proposal-internal links whose target is not in the corpus.
///
/// External links are never checked; they cannot be verified offline.
fn check_references(doc: &Document, names: &DashMap<String, PathBuf>, out: &mut Vec<Diagnostic>) {
    for link in &doc.links {
        let Some(name) = link.proposal_file_name() else {
            continue;
        };
        if !names.contains_key(&name.to_ascii_lowercase()) {
            out.push(
                Diagnostic::warn(
                    Violation::DanglingReference,
                    format!("link target '{}' not found in corpus", link.target),
                )
                .at_line(link.line),
            );
        }
    }
}

/// Lower-cased file name used as the link-resolution key.
fn file_name_key(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_ascii_lowercase)
}
