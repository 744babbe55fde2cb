//! Integration tests for scaffolding guards that run before any tool is invoked

use std::fs;

use tempfile::TempDir;

use djup::gitignore::{write_gitignore, GITIGNORE};
use djup::scaffold::{self, CreateRequest, DEFAULT_DJANGO_REQ};
use djup::uv::OsChoice;

fn request(name: &str, base_dir: &str) -> CreateRequest {
    CreateRequest {
        os: OsChoice::Ubuntu,
        name: name.to_string(),
        base_dir: base_dir.to_string(),
        run_server: false,
        django_req: DEFAULT_DJANGO_REQ.to_string(),
    }
}

#[test]
fn test_empty_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().to_string_lossy().to_string();

    let err = scaffold::execute(&request("", &base)).unwrap_err();
    assert!(format!("{err:#}").contains("project name"));

    // Nothing was created
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_whitespace_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().to_string_lossy().to_string();

    let err = scaffold::execute(&request("   ", &base)).unwrap_err();
    assert!(format!("{err:#}").contains("project name"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_occupied_target_is_rejected() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("blog");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), "data").unwrap();

    let base = dir.path().to_string_lossy().to_string();
    let err = scaffold::execute(&request("blog", &base)).unwrap_err();
    assert!(format!("{err:#}").contains("not empty"));

    // The existing contents survived the refusal
    let entries: Vec<_> = fs::read_dir(&target)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "data");
}

#[test]
fn test_gitignore_is_written_verbatim() {
    let dir = TempDir::new().unwrap();

    write_gitignore(dir.path()).unwrap();

    let written = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
    assert_eq!(written, GITIGNORE);
    assert!(written.contains(".venv/"));
    assert!(written.contains("*.sqlite3"));
    assert!(written.ends_with('\n'));
}

#[test]
fn test_gitignore_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".gitignore"), "node_modules/\n").unwrap();

    write_gitignore(dir.path()).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join(".gitignore")).unwrap(),
        GITIGNORE
    );
}
