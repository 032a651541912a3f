use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod site;

#[derive(Parser)]
#[command(name = "sitemark")]
#[command(about = "sitemark — Markdown to static HTML page builder")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and render every Markdown page into the output directory
    Build {
        /// Directory of static assets mirrored into the output
        #[arg(long = "static", default_value = "static")]
        static_dir: PathBuf,

        /// Directory of Markdown pages
        #[arg(long, default_value = "content")]
        content: PathBuf,

        /// HTML template containing `{{ Title }}` and `{{ Content }}`
        #[arg(long, default_value = "template.html")]
        template: PathBuf,

        /// Output directory (cleared before the build)
        #[arg(long, default_value = "public")]
        out: PathBuf,
    },

    /// Convert a Markdown file and report errors without writing output
    Check {
        /// Input Markdown file
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Build {
            static_dir,
            content,
            template,
            out,
        } => cmd_build(&static_dir, &content, &template, &out),
        Command::Check { path } => cmd_check(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_build(static_dir: &Path, content: &Path, template: &Path, out: &Path) -> anyhow::Result<()> {
    site::copy_static(static_dir, out)?;
    let pages = site::generate_pages_recursive(content, template, out)?;
    info!(pages, out = %out.display(), "build finished");
    Ok(())
}

fn cmd_check(path: &Path) -> anyhow::Result<()> {
    let markdown = site::read_file(path)?;
    let title = sitemark_block::extract_title(&markdown)?;
    let html = sitemark_block::convert_markdown_to_html(&markdown)?.render()?;
    info!(title = %title, bytes = html.len(), "converted");
    eprintln!("OK: {}", path.display());
    Ok(())
}
