//! Site generation: static asset mirroring and page rendering.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use sitemark::{render_page, ConvertError};

/// Extension of source pages
const MARKDOWN_EXTENSION: &str = "md";

/// Extension of generated pages
const HTML_EXTENSION: &str = "html";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Source directory {0} does not exist")]
    MissingSource(PathBuf),

    #[error("I/O error at {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to convert {path}: {source}")]
    Convert { path: PathBuf, source: ConvertError },
}

pub type Result<T> = std::result::Result<T, SiteError>;

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Replace `dest` with a recursive copy of `source`
pub fn copy_dir(source: &Path, dest: &Path) -> Result<()> {
    if !source.is_dir() {
        return Err(SiteError::MissingSource(source.to_path_buf()));
    }

    if dest.exists() {
        debug!("removing {}", dest.display());
        fs::remove_dir_all(dest).map_err(io_error(dest))?;
    }

    copy_dir_contents(source, dest)
}

fn copy_dir_contents(source: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).map_err(io_error(dest))?;

    for entry in sorted_entries(source)? {
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let file_type = entry.file_type().map_err(io_error(&from))?;

        if file_type.is_dir() {
            copy_dir_contents(&from, &to)?;
        } else if file_type.is_symlink() {
            copy_symlink(&from, &to)?;
        } else {
            debug!("copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(io_error(&from))?;
        }
    }

    Ok(())
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> Result<()> {
    let target = fs::read_link(from).map_err(io_error(from))?;
    std::os::unix::fs::symlink(&target, to).map_err(io_error(to))
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).map(|_| ()).map_err(io_error(from))
}

/// Render every `.md` file under `content_dir` into the same relative path
/// under `dest_dir` with an `.html` extension. Returns the number of pages.
///
/// Symlinked directories are not followed.
pub fn generate_pages_recursive(content_dir: &Path, template_path: &Path, dest_dir: &Path) -> Result<usize> {
    if !content_dir.is_dir() {
        return Err(SiteError::MissingSource(content_dir.to_path_buf()));
    }

    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;
    generate_tree(content_dir, &template, dest_dir)
}

fn generate_tree(content_dir: &Path, template: &str, dest_dir: &Path) -> Result<usize> {
    fs::create_dir_all(dest_dir).map_err(io_error(dest_dir))?;

    let mut pages = 0;
    for entry in sorted_entries(content_dir)? {
        let from = entry.path();
        let file_type = entry.file_type().map_err(io_error(&from))?;

        if file_type.is_symlink() && from.is_dir() {
            debug!("skipping symlinked directory {}", from.display());
        } else if file_type.is_dir() {
            pages += generate_tree(&from, template, &dest_dir.join(entry.file_name()))?;
        } else if from.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION) {
            let to = dest_dir.join(entry.file_name()).with_extension(HTML_EXTENSION);
            generate_page(&from, template, &to)?;
            pages += 1;
        }
    }

    Ok(pages)
}

/// Render one Markdown file through a loaded template
pub fn generate_page(from: &Path, template: &str, dest: &Path) -> Result<()> {
    let markdown = fs::read_to_string(from).map_err(io_error(from))?;
    let page = render_page(&markdown, template).map_err(|source| SiteError::Convert {
        path: from.to_path_buf(),
        source,
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest, page).map_err(io_error(dest))?;

    info!("generated {} -> {}", from.display(), dest.display());
    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)
        .map_err(io_error(dir))?
        .collect::<io::Result<Vec<_>>>()
        .map_err(io_error(dir))?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}
