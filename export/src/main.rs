// xtsy-export: static renderer for the hostel website
// XTSY Travellers Hostel, Shillong (c)2025

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use xtsy_site::{PageOptions, render_content_json, render_page};

#[derive(Parser, Debug)]
#[command(name = "xtsy-export", version, about = "Render the hostel website to static HTML")]
struct Args {
    /// Where to write the page (parent directories are created)
    #[arg(short, long, default_value = "dist/index.html")]
    out: PathBuf,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Emit the feature records as JSON instead of HTML
    #[arg(long)]
    content_json: bool,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so --stdout output stays clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let output = render(&args)?;

    if args.stdout {
        io::stdout()
            .write_all(output.as_bytes())
            .context("failed to write to stdout")?;
    } else {
        write_output(&args.out, &output)?;
        info!("Wrote {} bytes to {}", output.len(), args.out.display());
    }

    Ok(())
}

fn render(args: &Args) -> Result<String> {
    if args.content_json {
        return render_content_json().context("failed to serialize feature records");
    }

    let mut options = PageOptions::default();
    if let Some(title) = &args.title {
        options.title = title.clone();
    }
    info!(
        "Rendering xtsy-site v{} ({:?})",
        env!("CARGO_PKG_VERSION"),
        options.reveal_mode
    );
    Ok(render_page(&options))
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
