//! Project root resolution, the vacancy check, and the on-disk layout.
//!
//! The layout helpers are pure path functions; no I/O happens here except
//! in [`ensure_vacant`].

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Expand the base-directory answer (tilde included) and join the project
/// name. Relative answers are anchored at the current directory, so the
/// prompt default `.` puts the project next to where djup was invoked.
pub fn resolve_root(base_dir: &str, name: &str) -> Result<PathBuf> {
    let expanded = shellexpand::tilde(base_dir);
    let base = PathBuf::from(expanded.as_ref());
    let base = if base.is_absolute() {
        base
    } else {
        env::current_dir()
            .context("Failed to get current directory")?
            .join(base)
    };

    // components() drops the `.` segments the default answer introduces.
    let base: PathBuf = base.components().collect();
    Ok(base.join(name))
}

/// Fail when `root` exists and already has contents. An existing empty
/// directory is fine; it gets reused.
pub fn ensure_vacant(root: &Path) -> Result<()> {
    if !root.exists() {
        return Ok(());
    }

    let mut entries =
        fs::read_dir(root).with_context(|| format!("Failed to read {}", root.display()))?;
    if entries.next().is_some() {
        bail!(
            "The directory {} already exists and is not empty",
            root.display()
        );
    }
    Ok(())
}

// Venv layout is POSIX: the Windows menu entry targets WSL, which runs the
// Linux layout. Native Windows (Scripts\) is out of scope.

/// `.venv/` inside the project root.
pub fn venv_dir(root: &Path) -> PathBuf {
    root.join(".venv")
}

/// Interpreter inside the project venv: `.venv/bin/python`.
pub fn venv_python(root: &Path) -> PathBuf {
    venv_dir(root).join("bin").join("python")
}

/// Scaffolding command inside the project venv: `.venv/bin/django-admin`.
pub fn django_admin(root: &Path) -> PathBuf {
    venv_dir(root).join("bin").join("django-admin")
}

/// Settings module generated by `startproject`: `<root>/<name>/settings.py`.
pub fn settings_path(root: &Path, name: &str) -> PathBuf {
    root.join(name).join("settings.py")
}
