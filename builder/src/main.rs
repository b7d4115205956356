mod build;
mod config;

use std::path::PathBuf;

use clap::Parser;
use foxglove_pipeline::Registry;

/// Foxglove content build tool.
///
/// Compiles a content tree of text descriptors into binary runtime
/// resources, mirroring the tree layout under the output directory.
#[derive(Parser, Debug)]
#[command(name = "foxglove-builder", version)]
struct Args {
    /// Content root directory.
    content_root: PathBuf,

    /// Output directory. Defaults to `build.output` from project.toml,
    /// or `<content-root>/build`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of compile workers. Defaults to the available parallelism.
    #[arg(short = 'j', long)]
    workers: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match config::load(&args.content_root) {
        Ok(config) => config.unwrap_or_default(),
        Err(message) => {
            log::error!("{message}");
            std::process::exit(2);
        }
    };
    if !config.project.name.is_empty() {
        log::info!("building project '{}'", config.project.name);
    }

    let output_root = args
        .output
        .or_else(|| config.build.output.as_ref().map(|o| args.content_root.join(o)))
        .unwrap_or_else(|| args.content_root.join("build"));
    let workers = args
        .workers
        .or(config.build.workers)
        .or_else(|| std::thread::available_parallelism().ok().map(|n| n.get()))
        .unwrap_or(1);

    let registry = Registry::with_default_rules();
    let summary = build::build_all(&registry, &args.content_root, &output_root, workers);

    log::info!("{} compiled, {} failed", summary.compiled, summary.failed);
    if summary.failed > 0 {
        std::process::exit(1);
    }
}
