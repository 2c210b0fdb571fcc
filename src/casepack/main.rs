use casepack::commands::{self, CmdMessage};
use casepack::error::Result;
use casepack::store::CaseStore;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
mod print;

use args::{Cli, SessionCli, SessionCommand};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct SessionContext {
    store: CaseStore,
    problem_id: Option<String>,
    out_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = SessionContext {
        store: CaseStore::new(),
        problem_id: cli.problem_id,
        out_dir: cli.out_dir.unwrap_or_else(|| PathBuf::from(".")),
    };

    if let Some(path) = cli.transcript {
        let text = std::fs::read_to_string(&path)?;
        let result = commands::paste::run(&mut ctx.store, &text)?;
        print::print_messages(&result.messages);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        match SessionCli::try_parse_from(line.split_whitespace()) {
            Ok(session) => {
                if matches!(session.command, SessionCommand::Quit) {
                    break;
                }
                if let Err(e) = dispatch(&mut ctx, session.command, &mut lines) {
                    // Validation failures are session warnings, never fatal.
                    print::print_messages(&[CmdMessage::warning(e.to_string())]);
                }
            }
            Err(e) => {
                let _ = e.print();
            }
        }
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("casepack> ");
    io::stdout().flush()?;
    Ok(())
}

fn dispatch<L>(ctx: &mut SessionContext, command: SessionCommand, lines: &mut L) -> Result<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    match command {
        SessionCommand::Add => handle_add(ctx, lines),
        SessionCommand::Paste => handle_paste(ctx, lines),
        SessionCommand::List => handle_list(ctx),
        SessionCommand::Show { number } => handle_show(ctx, number),
        SessionCommand::Edit { number } => handle_edit(ctx, number, lines),
        SessionCommand::Delete { number } => handle_delete(ctx, number),
        SessionCommand::Export { problem_id } => handle_export(ctx, problem_id),
        // Handled by the loop before dispatch
        SessionCommand::Quit => Ok(()),
    }
}

/// Reads lines until a lone `.` or EOF. Blank lines are part of the block.
fn read_block<L>(lines: &mut L) -> Result<String>
where
    L: Iterator<Item = io::Result<String>>,
{
    let mut block = Vec::new();
    for line in lines {
        let line = line?;
        if line == "." {
            break;
        }
        block.push(line);
    }
    Ok(block.join("\n"))
}

fn handle_add<L>(ctx: &mut SessionContext, lines: &mut L) -> Result<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    println!("Input (finish with a single '.' line):");
    let input = read_block(lines)?;
    println!("Output (finish with a single '.' line):");
    let output = read_block(lines)?;

    let result = commands::add::run(&mut ctx.store, input, output)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_paste<L>(ctx: &mut SessionContext, lines: &mut L) -> Result<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    println!("Paste the judge transcript (finish with a single '.' line):");
    let text = read_block(lines)?;

    let result = commands::paste::run(&mut ctx.store, &text)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &SessionContext) -> Result<()> {
    let result = commands::list::run(&ctx.store)?;
    print::print_cases(&result.listed);
    Ok(())
}

fn handle_show(ctx: &SessionContext, number: usize) -> Result<()> {
    let result = commands::show::run(&ctx.store, number)?;
    for lc in &result.listed {
        print::print_full_case(lc);
    }
    Ok(())
}

fn handle_edit<L>(ctx: &mut SessionContext, number: usize, lines: &mut L) -> Result<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    let current = commands::show::run(&ctx.store, number)?;
    for lc in &current.listed {
        print::print_full_case(lc);
    }

    println!("New input (finish with a single '.' line):");
    let input = read_block(lines)?;
    println!("New output (finish with a single '.' line):");
    let output = read_block(lines)?;

    let result = commands::update::run(&mut ctx.store, number, input, output)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut SessionContext, number: usize) -> Result<()> {
    let result = commands::delete::run(&mut ctx.store, number)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &SessionContext, problem_id: Option<String>) -> Result<()> {
    let id = problem_id
        .or_else(|| ctx.problem_id.clone())
        .unwrap_or_default();

    let result = commands::export::run(&ctx.store, &id)?;
    if let Some(export) = &result.export {
        std::fs::write(ctx.out_dir.join(&export.file_name), &export.bytes)?;
    }
    print::print_messages(&result.messages);
    Ok(())
}
