//! Thin wrapper around `std::process::Command`.
//!
//! Every external step djup performs (uv, django-admin, manage.py) goes
//! through here so the invocation is echoed before it runs and the child
//! inherits the console.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Run an external command and fail on a non-zero exit status.
pub fn run<P: AsRef<OsStr>>(program: P, args: &[&str], cwd: Option<&Path>) -> Result<()> {
    let status = spawn(program.as_ref(), args, cwd)?;
    if !status.success() {
        bail!("Command failed: {}", render(program.as_ref(), args));
    }
    Ok(())
}

/// Run an external command, tolerating a non-zero exit status.
///
/// The dev server reports Ctrl+C as a failure; the run should still end
/// normally in that case. Failing to spawn at all is still an error.
pub fn run_unchecked<P: AsRef<OsStr>>(program: P, args: &[&str], cwd: Option<&Path>) -> Result<()> {
    spawn(program.as_ref(), args, cwd)?;
    Ok(())
}

fn spawn(program: &OsStr, args: &[&str], cwd: Option<&Path>) -> Result<ExitStatus> {
    println!("{}", format!("→ {}", render(program, args)).dimmed());

    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    command
        .status()
        .with_context(|| format!("Failed to run {}", render(program, args)))
}

fn render(program: &OsStr, args: &[&str]) -> String {
    let mut line = program.to_string_lossy().into_owned();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_run_zero_exit() {
        run("true", &[], None).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_run_nonzero_exit_fails() {
        let err = run("false", &[], None).unwrap_err();
        assert!(err.to_string().contains("false"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_unchecked_tolerates_nonzero_exit() {
        run_unchecked("false", &[], None).unwrap();
    }

    #[test]
    fn test_missing_binary_is_an_error_even_unchecked() {
        assert!(run_unchecked("djup-no-such-binary", &[], None).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_cwd_is_respected() {
        let tmp = tempfile::TempDir::new().unwrap();
        run("touch", &["marker"], Some(tmp.path())).unwrap();
        assert!(tmp.path().join("marker").exists());
    }

    #[test]
    fn test_render_joins_program_and_args() {
        let line = render(OsStr::new("uv"), &["pip", "install", "django>=5.0,<6.0"]);
        assert_eq!(line, "uv pip install django>=5.0,<6.0");
    }
}
