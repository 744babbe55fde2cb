//! The end-to-end project creation flow.
//!
//! Strictly linear: validate, create the root, locate uv, then drive uv and
//! Django through [`exec`]. A failing step aborts the run; djup never cleans
//! up a partially created project, the user deletes the directory instead.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;

use crate::uv::OsChoice;
use crate::{exec, gitignore, project, settings, uv};

/// Django requirement installed into fresh projects.
pub const DEFAULT_DJANGO_REQ: &str = ">=5.0,<6.0";

/// Bind address for the optional final dev-server launch.
pub const RUNSERVER_ADDR: &str = "0.0.0.0:8000";

/// Everything the flow needs, collected up front by the CLI.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub os: OsChoice,
    pub name: String,
    pub base_dir: String,
    pub run_server: bool,
    pub django_req: String,
}

pub fn execute(request: &CreateRequest) -> Result<()> {
    // Input validation happens before anything touches the filesystem.
    let name = request.name.trim();
    if name.is_empty() {
        bail!("A project name is required");
    }

    let root = project::resolve_root(&request.base_dir, name)?;
    project::ensure_vacant(&root)?;
    fs::create_dir_all(&root).with_context(|| format!("Failed to create {}", root.display()))?;

    let uv = uv::ensure_uv(request.os)?;

    println!("\n⚙️  Creating the virtual environment with uv…");
    exec::run(&uv, &["venv", ".venv"], Some(&root))?;

    println!("📦 Installing Django…");
    let requirement = format!("django{}", request.django_req);
    exec::run(&uv, &["pip", "install", &requirement], Some(&root))?;

    println!("🏗️  Creating the Django project…");
    let django_admin = project::django_admin(&root);
    exec::run(&django_admin, &["startproject", name, "."], Some(&root))?;

    let settings_path = project::settings_path(&root, name);
    if !settings::patch_allowed_hosts(&settings_path)? {
        println!(
            "{}",
            "⚠️  No ALLOWED_HOSTS assignment found in settings.py; leaving it as generated."
                .yellow()
        );
    }
    gitignore::write_gitignore(&root)?;

    println!("🧱 Applying initial migrations…");
    let python = project::venv_python(&root);
    exec::run(&python, &["manage.py", "migrate"], Some(&root))?;

    println!("\n{}\n", "✅ Project created successfully!".green().bold());
    println!("📂 Location: {}", root.display());
    println!("\nNext steps:");
    println!("  cd {}", root.display());
    println!("  uv run python manage.py runserver\n");

    if request.run_server {
        println!("🚀 Starting the development server (Ctrl+C to stop)…");
        exec::run_unchecked(
            &uv,
            &["run", "python", "manage.py", "runserver", RUNSERVER_ADDR],
            Some(&root),
        )?;
    }

    Ok(())
}
