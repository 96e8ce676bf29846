mod demo;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "htmlgen")]
#[command(about = "htmlgen — build HTML and per-component CSS in code")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the rendered demo HTML and CSS
    Demo,

    /// Write the demo as a standalone HTML document
    Page {
        /// Document title
        #[arg(long, default_value = "Demo Page")]
        title: String,

        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo => cmd_demo(),
        Command::Page { title, out } => cmd_page(&title, out),
    }
}

fn cmd_demo() {
    let output = demo::build();
    println!("HTML:");
    println!("{}", demo::quote(&output.html, "| "));
    println!("CSS:");
    println!("{}", demo::quote(&output.css, "| "));
}

fn cmd_page(title: &str, out: Option<PathBuf>) {
    let output = demo::build();
    let document = demo::document(title, &output);

    let Some(path) = out else {
        print!("{document}");
        return;
    };

    if let Err(e) = std::fs::write(&path, &document) {
        eprintln!("Error writing {}: {e}", path.display());
        std::process::exit(1);
    }
    eprintln!("Built: {}", path.display());
}
