use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use revz::api::{RevisionApi, StorePaths};
use revz::error::{Result, RevzError};
use revz::sort;
use revz::store::fs::SKILLS_FILENAME;
use revz::validate::{self, RawInput};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Init can run before any store exists; everything else needs one.
    match &cli.command {
        Some(Commands::Init { force }) => return handle_init(&init_paths(&cli), *force),
        Some(Commands::Path) => return handle_path(&resolve_paths(&cli)),
        _ => {}
    }

    let mut api = RevisionApi::open(resolve_paths(&cli))?;

    match cli.command {
        Some(Commands::Lookup { alias }) => handle_lookup(&api, &alias),
        Some(Commands::List) => handle_list(&api),
        Some(Commands::Config { key, value }) => handle_config(&mut api, key, value),
        Some(Commands::Repl) | None => handle_repl(&mut api),
        Some(Commands::Init { .. }) | Some(Commands::Path) => unreachable!(),
    }
}

/// Project scope when `./skills.json` exists, global scope otherwise.
fn resolve_paths(cli: &Cli) -> StorePaths {
    if cli.global {
        return StorePaths::new(global_dir());
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if cwd.join(SKILLS_FILENAME).exists() {
        StorePaths::new(cwd)
    } else {
        StorePaths::new(global_dir())
    }
}

// Init is the one command that may create a store where none exists, so
// without --global it always targets the working directory.
fn init_paths(cli: &Cli) -> StorePaths {
    if cli.global {
        StorePaths::new(global_dir())
    } else {
        StorePaths::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

fn global_dir() -> PathBuf {
    ProjectDirs::from("com", "revz", "revz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn handle_lookup(api: &RevisionApi, alias: &str) -> Result<()> {
    let note = api.lookup(alias)?;
    println!("{}", note);
    Ok(())
}

fn handle_list(api: &RevisionApi) -> Result<()> {
    let topics = api.topics();
    if topics.is_empty() {
        println!("No topics in the store.");
        return Ok(());
    }

    let rows: Vec<(String, String)> = topics
        .iter()
        .map(|topic| {
            let mut aliases = topic.aliases.clone();
            sort::bubble_sort(&mut aliases);
            let first_line = topic.note.lines().next().unwrap_or("").to_string();
            (aliases.join(", "), first_line)
        })
        .collect();

    let alias_width = rows.iter().map(|(a, _)| a.width()).max().unwrap_or(0);
    for (aliases, first_line) in rows {
        let padding = alias_width.saturating_sub(aliases.width());
        println!(
            "  {}{}  {}",
            aliases.bold(),
            " ".repeat(padding),
            first_line.dimmed()
        );
    }
    Ok(())
}

fn handle_config(api: &mut RevisionApi, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value.as_deref()) {
        (None, _) | (Some("dark"), None) => {
            println!("dark = {}", api.settings().dark);
        }
        (Some("dark"), Some(raw)) => match raw.parse::<bool>() {
            Ok(dark) => {
                api.set_dark(dark)?;
                println!("{}", format!("dark = {}", dark).green());
            }
            Err(_) => println!("Expected true or false, got {:?}", raw),
        },
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

fn handle_path(paths: &StorePaths) -> Result<()> {
    println!("{}", paths.skills_file().display());
    println!("{}", paths.settings_file().display());
    Ok(())
}

fn handle_init(paths: &StorePaths, force: bool) -> Result<()> {
    let outcome = RevisionApi::seed(paths, force)?;
    for path in &outcome.written {
        println!("{}", format!("Wrote {}", path.display()).green());
    }
    for path in &outcome.skipped {
        println!(
            "{}",
            format!("Kept existing {} (use --force to overwrite)", path.display()).yellow()
        );
    }
    Ok(())
}

const REPL_HELP: &str = "Commands:
  help    display this
  edit    how to change or add notes
  reload  re-read the store after editing
  quit    leave the prompt

Anything else is looked up as a topic alias.
";

const EDIT_HELP: &str = "The store is plain JSON. Open skills.json in a text editor;
the format is \"alias, alias\": \"note\", and \\n inside a note is a line break.
Run `revz path` to find the file, then `reload` here to pick up changes.
`revz init --force` resets everything to the stock records.
";

fn handle_repl(api: &mut RevisionApi) -> Result<()> {
    println!("{}", REPL_HELP);
    println!("Known aliases: {}\n", api.aliases().join(", "));

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().map_err(RevzError::Io)?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).map_err(RevzError::Io)? == 0 {
            break; // EOF
        }
        let input = line.trim_end_matches(['\n', '\r']).to_string();

        if validate::is_blank_or_invalid(&RawInput::Text(input.clone())) {
            continue;
        }

        // Literal commands bypass lookup.
        match input.as_str() {
            "help" => println!("{}", REPL_HELP),
            "edit" => println!("{}", EDIT_HELP),
            "reload" => {
                api.reload()?;
                println!("Reloaded {} topics.\n", api.topics().len());
            }
            "quit" | "exit" => break,
            alias => match api.lookup(alias) {
                Ok(note) => println!("{}\n", note),
                Err(RevzError::AliasNotFound(_)) => {
                    println!("{}\n", "Invalid command.".red());
                }
                Err(e) => return Err(e),
            },
        }
    }
    Ok(())
}
