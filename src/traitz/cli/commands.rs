//! Dispatch and handlers for the `traitz` binary.
//!
//! Each handler builds what it needs from [`AppContext`], calls the API, and hands
//! the `CmdResult` to `render`. Business logic does not live here.

use super::render::{print_facets, print_loading, print_messages, print_outcome, print_shell_help};
use super::setup::{Cli, Commands};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use traitz::api::{self, ConfigAction, TraitzApi};
use traitz::commands::filter::FilterOptions;
use traitz::config::TraitzConfig;
use traitz::error::{Result, TraitzError};
use traitz::store::fs::{FileSource, SourceLayout};

struct AppContext {
    data_dir: PathBuf,
    config: TraitzConfig,
    count: usize,
    layout: SourceLayout,
    options: FilterOptions,
}

impl AppContext {
    fn session(&self) -> TraitzApi<FileSource> {
        let source = FileSource::new(self.data_dir.clone(), self.layout.clone());
        TraitzApi::new(source, self.options.clone())
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Facets) | None => handle_facets(&ctx),
        Some(Commands::Filter { pairs }) => handle_filter(&ctx, &pairs),
        Some(Commands::Shell) => handle_shell(&ctx),
        Some(Commands::Join { output }) => handle_join(&ctx, output),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = cli.data_dir.clone();
    let config = TraitzConfig::load(&data_dir)?;

    let count = cli.count.unwrap_or(config.record_count);
    let layout = if let Some(file) = &cli.combined {
        SourceLayout::Combined { file: file.clone() }
    } else if cli.numbered {
        SourceLayout::Numbered { count }
    } else {
        SourceLayout::Auto {
            count,
            file: config.combined_file.clone(),
        }
    };

    let options = FilterOptions::new(
        cli.policy.unwrap_or(config.policy),
        config.sentinel_name.clone(),
    );

    Ok(AppContext {
        data_dir,
        config,
        count,
        layout,
        options,
    })
}

fn load_session(ctx: &AppContext) -> Result<TraitzApi<FileSource>> {
    let mut session = ctx.session();
    let result = session.load()?;
    print_messages(&result.messages);
    Ok(session)
}

fn handle_facets(ctx: &AppContext) -> Result<()> {
    let session = load_session(ctx)?;
    let result = session.facets()?;
    print_facets(&result.facets, false);
    Ok(())
}

fn handle_filter(ctx: &AppContext, pairs: &[String]) -> Result<()> {
    let selections = pairs
        .iter()
        .map(|p| parse_pair(p))
        .collect::<Result<Vec<_>>>()?;

    let mut session = load_session(ctx)?;
    for (trait_type, value) in &selections {
        session.toggle(trait_type, value)?;
    }

    print_outcome(session.result()?);
    Ok(())
}

fn handle_shell(ctx: &AppContext) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    if interactive {
        print_loading();
    }
    let mut session = load_session(ctx)?;
    if interactive {
        print_shell_help();
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match shell_step(&mut session, line.trim()) {
            Ok(ShellFlow::Continue) => {}
            Ok(ShellFlow::Quit) => break,
            // Bad input is reported and the session carries on.
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    Ok(())
}

enum ShellFlow {
    Continue,
    Quit,
}

fn shell_step(session: &mut TraitzApi<FileSource>, line: &str) -> Result<ShellFlow> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        "" => {}
        "toggle" | "t" => {
            let (trait_type, value) = parse_shell_pair(rest)?;
            let result = session.toggle(&trait_type, &value)?;
            print_messages(&result.messages);
            print_outcome(session.result()?);
        }
        "reset" | "r" => {
            let result = session.reset()?;
            print_messages(&result.messages);
        }
        "show" | "s" => print_outcome(session.result()?),
        "facets" | "ls" => print_facets(&session.facets()?.facets, true),
        "help" | "?" => print_shell_help(),
        "quit" | "exit" | "q" => return Ok(ShellFlow::Quit),
        other => {
            return Err(TraitzError::Api(format!(
                "Unknown command: {} (try help)",
                other
            )))
        }
    }
    Ok(ShellFlow::Continue)
}

fn handle_join(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| ctx.data_dir.join(&ctx.config.combined_file));
    let result = api::join(&ctx.data_dir, ctx.count, &output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = api::config(&ctx.data_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in TraitzConfig::keys() {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Parses `TRAIT=VALUE`, splitting at the first `=`.
fn parse_pair(s: &str) -> Result<(String, String)> {
    match s.split_once('=') {
        Some((trait_type, value)) if !trait_type.is_empty() && !value.is_empty() => {
            Ok((trait_type.to_string(), value.to_string()))
        }
        _ => Err(TraitzError::Api(format!(
            "Invalid selection: {} (expected TRAIT=VALUE)",
            s
        ))),
    }
}

/// Accepts `TRAIT=VALUE` or `TRAIT VALUE...` (value may contain spaces).
fn parse_shell_pair(s: &str) -> Result<(String, String)> {
    if s.contains('=') {
        return parse_pair(s);
    }
    match s.split_once(' ') {
        Some((trait_type, value)) if !value.trim().is_empty() => {
            Ok((trait_type.to_string(), value.trim().to_string()))
        }
        _ => Err(TraitzError::Api(format!(
            "Invalid selection: {} (expected TRAIT=VALUE)",
            s
        ))),
    }
}
