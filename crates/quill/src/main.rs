//! Quill CLI - blog front end.
//!
//! Provides commands for:
//! - `render` / `excerpt`: Run the content pipeline on a post body
//! - `login` / `logout` / `whoami`: Manage the admin session
//! - `home` / `read`: Public reading view
//! - `posts` / `categories`: Admin dashboard operations

mod commands;
mod context;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CategoriesCommand, ExcerptArgs, HomeArgs, LoginArgs, LogoutArgs, PostsCommand, ReadArgs,
    RenderArgs, WhoamiArgs,
};
use context::GlobalArgs;
use output::Output;

/// Quill - blog front end.
#[derive(Parser)]
#[command(name = "quill", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render post content to HTML.
    Render(RenderArgs),
    /// Print the plain-text excerpt of post content.
    Excerpt(ExcerptArgs),
    /// Log in as admin and store the access token.
    Login(LoginArgs),
    /// Forget the stored access token.
    Logout(LogoutArgs),
    /// Show the logged-in user.
    Whoami(WhoamiArgs),
    /// Show the home page.
    Home(HomeArgs),
    /// Show one post with its rendered body.
    Read(ReadArgs),
    /// Manage posts.
    #[command(subcommand)]
    Posts(PostsCommand),
    /// Manage categories.
    #[command(subcommand)]
    Categories(CategoriesCommand),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let global = &cli.global;
    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Excerpt(args) => args.execute(),
        Commands::Login(args) => args.execute(global),
        Commands::Logout(args) => args.execute(global),
        Commands::Whoami(args) => args.execute(global),
        Commands::Home(args) => args.execute(global),
        Commands::Read(args) => args.execute(global),
        Commands::Posts(cmd) => cmd.execute(global),
        Commands::Categories(cmd) => cmd.execute(global),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {}", err.message()));
        std::process::exit(1);
    }
}
