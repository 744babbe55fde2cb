//! `.gitignore` for freshly generated projects.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Written into every new project, replacing whatever is already there.
pub const GITIGNORE: &str = "# Python
__pycache__/
*.py[cod]
*.sqlite3
.DS_Store

# uv venv
.venv/

# Django
staticfiles/
media/
.env
";

pub fn write_gitignore(project_dir: &Path) -> Result<()> {
    let path = project_dir.join(".gitignore");
    fs::write(&path, GITIGNORE).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_covers_the_transient_artifacts() {
        assert!(GITIGNORE.contains(".venv/"));
        assert!(GITIGNORE.contains("*.sqlite3"));
        assert!(GITIGNORE.contains("staticfiles/"));
        assert!(GITIGNORE.contains("media/"));
        assert!(GITIGNORE.contains("__pycache__/"));
        assert!(GITIGNORE.ends_with('\n'));
    }
}
