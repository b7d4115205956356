//! Content tree discovery and per-file compilation.
//!
//! Each file is an independent unit of work; workers pull from a shared
//! queue and a failure in one file never stops the others. The single
//! ordering constraint comes from game object decomposition: generated
//! sibling sources are written and compiled before the parent's output
//! lands.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicUsize, Ordering};

use walkdir::WalkDir;

use foxglove_pipeline::{
    diagnostics, CompileContext, CompileOutput, PipelineError, PipelineResult, Registry,
};

/// Outcome of a full build.
pub struct BuildSummary {
    pub compiled: usize,
    pub failed: usize,
}

/// Find compilable sources under the content root, sorted for a
/// deterministic build order. The output directory is skipped.
pub fn discover(registry: &Registry, content_root: &Path, output_root: &Path) -> Vec<PathBuf> {
    let mut sources = Vec::new();
    for entry in WalkDir::new(content_root)
        .into_iter()
        .filter_entry(|e| e.path() != output_root)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if entry.file_type().is_file() && registry.rule_for_path(entry.path()).is_some() {
            sources.push(entry.path().to_path_buf());
        }
    }
    sources.sort();
    sources
}

/// Compile every discovered source on `workers` threads.
///
/// Failures are reported once through the diagnostics sink; the summary
/// carries the counts for the exit status.
pub fn build_all(
    registry: &Registry,
    content_root: &Path,
    output_root: &Path,
    workers: usize,
) -> BuildSummary {
    let sources = discover(registry, content_root, output_root);
    log::info!(
        "compiling {} files with {} workers",
        sources.len(),
        workers.max(1)
    );

    let next = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);
    std::thread::scope(|scope| {
        for _ in 0..workers.max(1) {
            scope.spawn(|| loop {
                let index = next.fetch_add(1, Ordering::Relaxed);
                let Some(source) = sources.get(index) else {
                    break;
                };
                if let Err(err) = compile_one(registry, content_root, output_root, source) {
                    diagnostics::report(source, &err);
                    failed.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    });

    let failed = failed.into_inner();
    BuildSummary {
        compiled: sources.len() - failed,
        failed,
    }
}

/// Compile one source file into its mirrored output location.
pub fn compile_one(
    registry: &Registry,
    content_root: &Path,
    output_root: &Path,
    source: &Path,
) -> PipelineResult<()> {
    let rule = registry.rule_for_path(source).ok_or_else(|| {
        PipelineError::Validation(format!("no compile rule for {}", source.display()))
    })?;

    let rel = source.strip_prefix(content_root).unwrap_or(source);
    let mirrored = output_root.join(rel);
    let file_name = file_name_str(&mirrored)?;
    let target = mirrored.with_file_name(rule.output_name(file_name).ok_or_else(|| {
        PipelineError::Validation(format!("{file_name} does not match rule {}", rule.type_name))
    })?);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    let bytes = fs::read(source)?;
    let ctx = CompileContext {
        content_root,
        source_path: source,
    };
    log::debug!("{} -> {}", source.display(), target.display());

    match rule.compile(&ctx, &bytes)? {
        CompileOutput::Binary(data) => fs::write(&target, data)?,
        CompileOutput::Decomposed(decomposed) => {
            // Siblings first; the parent output must not land before them.
            for sibling in &decomposed.siblings {
                let sibling_source = mirrored.with_file_name(&sibling.file_name);
                fs::write(&sibling_source, &sibling.data)?;
                compile_generated(registry, content_root, &sibling_source, &sibling.data)?;
            }
            fs::write(&target, decomposed.parent)?;
        }
        CompileOutput::External { tool } => run_external(tool, source, &target)?,
    }
    Ok(())
}

/// Compile a generated sibling next to its written source.
fn compile_generated(
    registry: &Registry,
    content_root: &Path,
    source: &Path,
    bytes: &[u8],
) -> PipelineResult<()> {
    let rule = registry.rule_for_path(source).ok_or_else(|| {
        PipelineError::Validation(format!(
            "no compile rule for generated component {}",
            source.display()
        ))
    })?;
    let file_name = file_name_str(source)?;
    let target = source.with_file_name(rule.output_name(file_name).ok_or_else(|| {
        PipelineError::Validation(format!("{file_name} does not match rule {}", rule.type_name))
    })?);

    let ctx = CompileContext {
        content_root,
        source_path: source,
    };
    match rule.compile(&ctx, bytes)? {
        CompileOutput::Binary(data) => fs::write(&target, data)?,
        CompileOutput::External { tool } => run_external(tool, source, &target)?,
        CompileOutput::Decomposed(_) => {
            return Err(PipelineError::Validation(format!(
                "generated component {} cannot itself embed components",
                source.display()
            )))
        }
    }
    Ok(())
}

fn file_name_str(path: &Path) -> PipelineResult<&str> {
    path.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        PipelineError::Validation(format!("invalid source file name: {}", path.display()))
    })
}

/// Run an external compiler as `tool <source> <target>`.
fn run_external(tool: &str, source: &Path, target: &Path) -> PipelineResult<()> {
    let status = Command::new(tool).arg(source).arg(target).status()?;
    if !status.success() {
        return Err(PipelineError::Io(std::io::Error::other(format!(
            "{tool} exited with {status}"
        ))));
    }
    Ok(())
}
