//! `Preso` - Markdown PRD to presentation compiler.
//!
//! Usage:
//!   `preso parse <file.md>`
//!   `preso compile <file.md> [--enhance]`
//!   `preso list`
//!   `preso show <id>`
//!   `preso delete <id>`

use std::env;
use std::path::Path;
use std::process::ExitCode;

use preso::config::Config;
use preso::enhance::OpenAiClient;
use preso::error::{Error, Result};
use preso::parser::PrdParser;
use preso::storage::PresentationStore;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("preso=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<()> {
    let command = args.get(1).map(String::as_str);
    match command {
        Some("parse") => {
            let path = required_arg(args, 2, "parse <file.md>")?;
            parse_command(path)
        }
        Some("compile") => {
            let path = required_arg(args, 2, "compile <file.md> [--enhance]")?;
            let enhance = args.iter().any(|a| a == "--enhance");
            compile_command(path, enhance).await
        }
        Some("list") => list_command(),
        Some("show") => {
            let id = required_arg(args, 2, "show <id>")?;
            show_command(id)
        }
        Some("delete") => {
            let id = required_arg(args, 2, "delete <id>")?;
            delete_command(id)
        }
        _ => {
            eprintln!("Usage: preso <parse|compile|list|show|delete> [args]");
            eprintln!("  parse <file.md>               print the parsed presentation as JSON");
            eprintln!("  compile <file.md> [--enhance] parse, optionally enhance, and store");
            eprintln!("  list                          list stored presentations");
            eprintln!("  show <id>                     print one stored presentation");
            eprintln!("  delete <id>                   delete one stored presentation");
            Err(Error::Msg("No command given".to_string()))
        }
    }
}

fn required_arg<'a>(args: &'a [String], index: usize, usage: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| Error::Msg(format!("Usage: preso {usage}")))
}

fn read_prd(path: &str) -> Result<String> {
    fs_err::read_to_string(Path::new(path))
        .map_err(|e| Error::io(e, Some(Path::new(path).to_path_buf())))
}

fn parse_command(path: &str) -> Result<()> {
    let content = read_prd(path)?;
    let presentation = PrdParser::new().parse(&content);
    println!("{}", serde_json::to_string_pretty(&presentation)?);
    Ok(())
}

async fn compile_command(path: &str, enhance: bool) -> Result<()> {
    let content = read_prd(path)?;
    let config = Config::load()?;
    let parser = PrdParser::new();

    let (presentation, enhanced) = if enhance {
        if !config.has_openai_credentials() {
            return Err(Error::config(
                "Enhancement requested without credentials",
                "Set the OPENAI_API_KEY environment variable or drop --enhance",
            ));
        }
        let client = OpenAiClient::new(&config);
        parser.parse_with_enhancement(&content, &client).await
    } else {
        (parser.parse(&content), None)
    };

    let store = PresentationStore::open_default(config.data_dir.as_deref())?;
    let use_enhanced = enhanced.is_some();
    let id = store.save(&content, &presentation, enhanced.as_ref(), use_enhanced)?;

    println!("{id}");
    Ok(())
}

fn list_command() -> Result<()> {
    let config = Config::load()?;
    let store = PresentationStore::open_default(config.data_dir.as_deref())?;
    for stored in store.get_all()? {
        println!(
            "{}  {}  {}  ({} slides{})",
            stored.id,
            stored.updated_at.format("%Y-%m-%d %H:%M"),
            stored.title,
            stored.presentation.slides.len(),
            if stored.enhanced.is_some() { ", enhanced" } else { "" },
        );
    }
    Ok(())
}

fn show_command(id: &str) -> Result<()> {
    let config = Config::load()?;
    let store = PresentationStore::open_default(config.data_dir.as_deref())?;
    let stored = store
        .get(id)?
        .ok_or_else(|| Error::storage(format!("No stored presentation with id {id}")))?;
    println!("{}", serde_json::to_string_pretty(&stored)?);
    Ok(())
}

fn delete_command(id: &str) -> Result<()> {
    let config = Config::load()?;
    let store = PresentationStore::open_default(config.data_dir.as_deref())?;
    if store.delete(id)? {
        println!("Deleted {id}");
        Ok(())
    } else {
        Err(Error::storage(format!("No stored presentation with id {id}")))
    }
}
