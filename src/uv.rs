//! uv discovery and per-system install guidance.
//!
//! djup never installs uv itself. When the binary is missing it prints the
//! instructions for the selected operating system and stops.

use anyhow::{bail, Result};
use std::path::PathBuf;

/// Operating-system selection from the interactive menu.
///
/// Parsing never fails: anything outside `1`..`4` becomes [`OsChoice::Other`],
/// which only surfaces if uv is missing (it selects the generic instructions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsChoice {
    MacOs,
    Ubuntu,
    Fedora,
    WindowsWsl,
    Other,
}

impl OsChoice {
    pub fn from_input(input: &str) -> Self {
        match input.trim() {
            "1" => Self::MacOs,
            "2" => Self::Ubuntu,
            "3" => Self::Fedora,
            "4" => Self::WindowsWsl,
            _ => Self::Other,
        }
    }
}

const MACOS_INSTRUCTIONS: &str = r#"👉 Install it with:
   brew install uv
or:
   curl -LsSf https://astral.sh/uv/install.sh | sh"#;

const UBUNTU_INSTRUCTIONS: &str = r#"👉 Install it with:
   sudo apt update && sudo apt install curl -y
   curl -LsSf https://astral.sh/uv/install.sh | sh"#;

const FEDORA_INSTRUCTIONS: &str = r#"👉 Install it with:
   sudo dnf install curl -y
   curl -LsSf https://astral.sh/uv/install.sh | sh"#;

const WSL_INSTRUCTIONS: &str = r#"👉 Inside WSL, install it with:
   curl -LsSf https://astral.sh/uv/install.sh | sh
   # then add it to your PATH:
   export PATH="$HOME/.cargo/bin:$PATH""#;

const GENERIC_INSTRUCTIONS: &str = r#"⚠️ Unrecognized system, install it manually via:
   curl -LsSf https://astral.sh/uv/install.sh | sh"#;

/// Install instructions for the selected system, shown when uv is missing.
pub fn install_instructions(os: OsChoice) -> &'static str {
    match os {
        OsChoice::MacOs => MACOS_INSTRUCTIONS,
        OsChoice::Ubuntu => UBUNTU_INSTRUCTIONS,
        OsChoice::Fedora => FEDORA_INSTRUCTIONS,
        OsChoice::WindowsWsl => WSL_INSTRUCTIONS,
        OsChoice::Other => GENERIC_INSTRUCTIONS,
    }
}

/// Locate uv on PATH.
///
/// On failure, prints the install instructions for `os` and returns an
/// error so the caller exits non-zero. This is a hard stop, not a retry.
pub fn ensure_uv(os: OsChoice) -> Result<PathBuf> {
    if let Ok(path) = which::which("uv") {
        return Ok(path);
    }

    println!("\n⚠️  'uv' was not found on this system.");
    println!("{}", install_instructions(os));
    bail!("uv is required but not installed")
}
