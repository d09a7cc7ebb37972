use anyhow::{Context, Result};
use mdtree_config::Config;
use mdtree_engine::{Document, file_text, io, parsing::snapshot};
use std::{env, path::PathBuf, process};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Print the canonical rendering, or rewrite files in place with `--write`.
    Fmt { write: bool },
    /// Report files whose canonical rendering differs from their contents.
    Check,
    /// Print the parsed document outline.
    Tree,
}

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    command: Command,
    paths: Vec<PathBuf>,
}

fn parse_args(args: &[String]) -> Option<Invocation> {
    let (name, rest) = args.split_first()?;
    let mut write = false;
    let mut paths = Vec::new();
    for arg in rest {
        match arg.as_str() {
            "-w" | "--write" if name == "fmt" => write = true,
            flag if flag.starts_with('-') => return None,
            path => paths.push(PathBuf::from(path)),
        }
    }

    let command = match name.as_str() {
        "fmt" => Command::Fmt { write },
        "check" => Command::Check,
        "tree" => Command::Tree,
        _ => return None,
    };
    Some(Invocation { command, paths })
}

fn usage(program: &str) -> String {
    format!("Usage: {program} <fmt [--write]|check|tree> [paths...]")
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("mdtree", String::as_str);

    let Some(invocation) = parse_args(args.get(1..).unwrap_or_default()) else {
        eprintln!("{}", usage(program));
        process::exit(1);
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let from_config = config.is_some();
    let config = config.unwrap_or_default();

    let paths = if invocation.paths.is_empty() {
        config.resolve_inputs()?
    } else {
        invocation.paths
    };
    if paths.is_empty() {
        eprintln!("Error: No input files given and no include patterns matched");
        eprintln!("{}", usage(program));
        if !from_config {
            eprintln!(
                "Or list include patterns in a config file at {}",
                Config::config_path().display()
            );
        }
        process::exit(1);
    }
    log::info!("Processing {} file(s)", paths.len());

    let mut out = std::io::stdout().lock();
    match invocation.command {
        Command::Fmt { write } => fmt(&paths, write, &mut out)?,
        Command::Tree => tree(&paths, &mut out)?,
        Command::Check => {
            let unformatted = check(&paths, &mut out)?;
            if unformatted > 0 {
                log::info!("{unformatted} file(s) not in canonical form");
                process::exit(config.check_exit_code);
            }
        }
    }
    Ok(())
}

fn fmt(paths: &[PathBuf], write: bool, out: &mut impl std::io::Write) -> Result<()> {
    for path in paths {
        let doc = io::read_document(path)?;
        if write {
            io::write_document(path, &doc)?;
            log::info!("Formatted {}", path.display());
        } else {
            out.write_all(file_text(&doc).as_bytes())?;
        }
    }
    Ok(())
}

/// Returns how many files differ from their canonical rendering.
fn check(paths: &[PathBuf], out: &mut impl std::io::Write) -> Result<usize> {
    let mut unformatted = 0;
    for path in paths {
        let source = io::read_source(path)?;
        if file_text(&Document::parse(&source)) != source {
            writeln!(out, "Would reformat: {}", path.display())?;
            unformatted += 1;
        }
    }
    Ok(unformatted)
}

fn tree(paths: &[PathBuf], out: &mut impl std::io::Write) -> Result<()> {
    for path in paths {
        let doc = io::read_document(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        if paths.len() > 1 {
            writeln!(out, "{}:", path.display())?;
        }
        writeln!(out, "{}", snapshot::outline(&doc))?;
    }
    Ok(())
}
