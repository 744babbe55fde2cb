use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use std::process;

use djup::prompt;
use djup::scaffold::{self, CreateRequest, DEFAULT_DJANGO_REQ};
use djup::uv::OsChoice;

#[derive(Parser)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Create a uv-managed Django project interactively",
    long_about = None
)]
struct Cli {
    /// Operating system: 1 macOS, 2 Ubuntu/Debian, 3 Fedora/Red Hat, 4 Windows (WSL)
    #[arg(long)]
    os: Option<String>,

    /// Project name
    #[arg(long)]
    name: Option<String>,

    /// Directory to create the project in
    #[arg(long)]
    dir: Option<String>,

    /// Start the development server once the project is ready
    #[arg(long)]
    serve: bool,

    /// Django version requirement to install
    #[arg(long, value_name = "REQ", default_value = DEFAULT_DJANGO_REQ)]
    django_version: String,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("❌ {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    println!("{}\n", "🐍 Django Project Creator with uv".bold());

    let request = gather_request(cli)?;
    scaffold::execute(&request)
}

/// Every answer can come from a flag; anything missing is prompted for, in
/// the same order the prompts have always run.
fn gather_request(cli: Cli) -> Result<CreateRequest> {
    let os = match cli.os {
        Some(choice) => OsChoice::from_input(&choice),
        None => choose_os()?,
    };

    let name = match cli.name {
        Some(name) => name,
        None => prompt::ask("\n📦 Project name (e.g. my_site): ")?,
    };
    if name.trim().is_empty() {
        bail!("A project name is required");
    }

    let base_dir = match cli.dir {
        Some(dir) => dir,
        None => prompt::ask_or("📁 Directory to create it in (Enter = current): ", ".")?,
    };

    let run_server = cli.serve || prompt::confirm("🚀 Run the dev server when done? (y/n): ")?;

    Ok(CreateRequest {
        os,
        name,
        base_dir,
        run_server,
        django_req: cli.django_version,
    })
}

fn choose_os() -> Result<OsChoice> {
    println!("Select your operating system:");
    println!("  [1] macOS");
    println!("  [2] Ubuntu / Debian");
    println!("  [3] Fedora / Red Hat");
    println!("  [4] Windows (WSL)");
    let choice = prompt::ask("👉 Enter the matching number: ")?;
    Ok(OsChoice::from_input(&choice))
}
