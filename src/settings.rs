//! ALLOWED_HOSTS patching for the generated settings module.
//!
//! `startproject` emits `ALLOWED_HOSTS = []`, which rejects everything but
//! localhost names once you bind the dev server to the network. The patch
//! swaps the first assignment for a fixed local-network list.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// The replacement assignment written into `settings.py`.
pub const ALLOWED_HOSTS_LINE: &str = "ALLOWED_HOSTS = ['localhost', '127.0.0.1', '0.0.0.0']";

/// Compiled regex for an ALLOWED_HOSTS assignment.
///
/// Tolerates arbitrary whitespace around `=` and multi-line bracketed
/// content; the negated class spans newlines.
fn allowed_hosts_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"ALLOWED_HOSTS\s*=\s*\[[^\]]*\]").expect("Invalid ALLOWED_HOSTS regex")
    })
}

/// Replace the first ALLOWED_HOSTS assignment in `text`.
///
/// Returns `None` when the text has no such assignment; everything outside
/// the matched assignment is carried over untouched.
pub fn rewrite_allowed_hosts(text: &str) -> Option<String> {
    let re = allowed_hosts_regex();
    if !re.is_match(text) {
        return None;
    }
    Some(re.replacen(text, 1, ALLOWED_HOSTS_LINE).into_owned())
}

/// Patch a generated `settings.py` in place.
///
/// Returns `Ok(true)` when a replacement was written and `Ok(false)` when
/// no assignment matched; in the latter case the file is left untouched.
pub fn patch_allowed_hosts(settings_path: &Path) -> Result<bool> {
    let text = fs::read_to_string(settings_path)
        .with_context(|| format!("Failed to read {}", settings_path.display()))?;

    match rewrite_allowed_hosts(&text) {
        Some(patched) => {
            fs::write(settings_path, patched)
                .with_context(|| format!("Failed to write {}", settings_path.display()))?;
            Ok(true)
        }
        None => Ok(false),
    }
}
