//! Site generation: static asset mirroring and page rendering.
//!
//! Every failure aborts the build; nothing is written for a page whose
//! Markdown fails to convert.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Replace `dst` with a recursive copy of `src`.
pub fn copy_static(src: &Path, dst: &Path) -> Result<()> {
    if !src.exists() {
        bail!("static directory not found: {}", src.display());
    }
    if !src.is_dir() {
        bail!("static path is a file, not a directory: {}", src.display());
    }

    prepare_dir(dst)?;
    copy_tree(src, dst)
}

/// Create `dir`, or empty it if it already exists.
fn prepare_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
        info!(dir = %dir.display(), "created output directory");
        return Ok(());
    }

    for entry in fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))? {
        let path = entry?.path();
        // symlink_metadata so a link to a directory is unlinked, not followed.
        let removed = if fs::symlink_metadata(&path)?.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.with_context(|| format!("failed to remove {}", path.display()))?;
    }
    info!(dir = %dir.display(), "cleared output directory");
    Ok(())
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    for entry in fs::read_dir(src).with_context(|| format!("failed to list {}", src.display()))? {
        let entry = entry?;
        let path = entry.path();
        let target = dst.join(entry.file_name());

        if path.is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("failed to create {}", target.display()))?;
            copy_tree(&path, &target)?;
        } else if path.is_file() {
            fs::copy(&path, &target).with_context(|| {
                format!("failed to copy {} to {}", path.display(), target.display())
            })?;
            debug!(from = %path.display(), to = %target.display(), "copied");
        }
    }
    Ok(())
}

/// Fill `template` with the title and rendered body of `markdown`.
pub fn render_page(markdown: &str, template: &str) -> Result<String> {
    let title = sitemark_block::extract_title(markdown)?;
    let content = sitemark_block::convert_markdown_to_html(markdown)?.render()?;
    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content))
}

/// Render one Markdown file through `template_path` into `dest`.
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<()> {
    info!(
        from = %from.display(),
        template = %template_path.display(),
        dest = %dest.display(),
        "generating page"
    );

    let markdown = read_file(from)?;
    let template = read_file(template_path)?;
    let html = render_page(&markdown, &template)
        .with_context(|| format!("failed to convert {}", from.display()))?;

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(dest, html).with_context(|| format!("failed to write {}", dest.display()))
}

/// Render every `*.md` under `content_dir` to the mirrored `*.html` path
/// under `out_dir`. Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    out_dir: &Path,
) -> Result<usize> {
    let mut written = 0;

    for entry in fs::read_dir(content_dir)
        .with_context(|| format!("failed to list {}", content_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        let target = out_dir.join(entry.file_name());

        if path.is_dir() {
            written += generate_pages_recursive(&path, template_path, &target)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            generate_page(&path, template_path, &target.with_extension("html"))?;
            written += 1;
        }
    }

    Ok(written)
}
