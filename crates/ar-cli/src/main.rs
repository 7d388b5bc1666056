//! Arianrhod Skill Card CLI
//!
//! Command-line tool for extracting skills from character-sheet exports
//! and rendering them as printable skill cards.

mod html;

use ar_core::{extract_skills, extract_skills_from_file, parse_line, Skill};
use clap::{Parser, Subcommand};
use html::RenderOptions;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ar-cli")]
#[command(about = "Arianrhod Skill Card Generator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract skills from a sheet and render printable HTML cards
    Generate {
        /// Input sheet file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output HTML file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Card size for sleeved printing
        #[arg(long)]
        sleeve: bool,

        /// Enlarge skill names
        #[arg(long)]
        large: bool,
    },

    /// Extract skills and export them as JSON
    Export {
        /// Input sheet file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output JSON file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a single skill line and print the record as JSON
    Parse {
        /// The skill line
        line: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> ar_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            sleeve,
            large,
        } => cmd_generate(input.as_deref(), output.as_deref(), sleeve, large),
        Commands::Export { input, output } => cmd_export(input.as_deref(), output.as_deref()),
        Commands::Parse { line } => cmd_parse(&line),
    }
}

fn read_skills(input: Option<&std::path::Path>) -> ar_core::Result<Vec<Skill>> {
    match input {
        Some(path) => extract_skills_from_file(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(extract_skills(&buffer))
        }
    }
}

fn write_output(
    output: Option<&std::path::Path>,
    content: &str,
    what: &str,
) -> ar_core::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("Wrote {} to {}", what, path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn cmd_generate(
    input: Option<&std::path::Path>,
    output: Option<&std::path::Path>,
    sleeve: bool,
    large: bool,
) -> ar_core::Result<()> {
    let skills = read_skills(input)?;
    let options = RenderOptions {
        sleeve,
        large_name: large,
    };
    let page = html::generate_html(&skills, &options);
    write_output(output, &page, &format!("{} skill cards", skills.len()))
}

fn cmd_export(
    input: Option<&std::path::Path>,
    output: Option<&std::path::Path>,
) -> ar_core::Result<()> {
    let skills = read_skills(input)?;
    let json = serde_json::to_string_pretty(&skills)?;
    write_output(output, &json, &format!("{} skills", skills.len()))?;
    if output.is_none() {
        println!();
    }
    Ok(())
}

fn cmd_parse(line: &str) -> ar_core::Result<()> {
    match parse_line(line) {
        Some(skill) => {
            println!("{}", serde_json::to_string_pretty(&skill)?);
            Ok(())
        }
        None => {
            eprintln!("Not a skill line");
            std::process::exit(1);
        }
    }
}
