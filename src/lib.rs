pub mod exec;
pub mod gitignore;
pub mod project;
pub mod prompt;
pub mod scaffold;
pub mod settings;
pub mod uv;

// Re-export commonly used types
pub use scaffold::CreateRequest;
pub use uv::OsChoice;
