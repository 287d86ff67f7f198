use anyhow::Result;
use clap::Parser as ClapParser;
use rustyline::DefaultEditor;
use std::collections::HashMap;
use std::fs;
use veccalc::keywords::load_keywords;
use veccalc::parser::Parser;
use veccalc::printer;
use veccalc::scanner::token::TokenKind;
use veccalc::scanner::Scanner;

#[derive(ClapParser)]
#[command(name = "veccalc")]
#[command(about = "A small vector-calculator language")]
struct Cli {
    /// Script file to run (omit for REPL)
    script: Option<String>,

    /// Path to keywords JSON file
    #[arg(short, long)]
    keywords: Option<String>,

    /// Dump the token stream before parsing
    #[arg(long)]
    tokens: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let keywords = load_keywords(cli.keywords.as_deref())?;

    match cli.script {
        None => run_prompt(&keywords, cli.tokens)?,
        Some(path) => run_file(&path, &keywords, cli.tokens)?,
    }

    Ok(())
}

fn run_file(path: &str, keywords: &HashMap<String, TokenKind>, show_tokens: bool) -> Result<()> {
    let contents = fs::read_to_string(path)?;
    if run(&contents, keywords, show_tokens) {
        // Front-end errors exit 65; 70 stays reserved for a future
        // evaluation phase.
        std::process::exit(65);
    }
    Ok(())
}

fn run_prompt(keywords: &HashMap<String, TokenKind>, show_tokens: bool) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let history_path = dirs::home_dir().map(|p| p.join(".veccalc_history"));
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.eq_ignore_ascii_case("exit") {
                    break;
                }
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.trim());
                // Errors are per-line values; nothing to reset between
                // iterations.
                run(&line, keywords, show_tokens);
            }
            Err(rustyline::error::ReadlineError::Eof) => break,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}

/// One run over one source: scan, then parse only if scanning was
/// clean, then pretty-print. Returns whether any diagnostic was
/// reported.
fn run(source: &str, keywords: &HashMap<String, TokenKind>, show_tokens: bool) -> bool {
    let scanner = Scanner::new(source, keywords);
    let (tokens, diagnostics) = scanner.scan_tokens();

    if !diagnostics.is_empty() {
        for diagnostic in &diagnostics {
            eprintln!("{}", diagnostic);
        }
        return true;
    }

    if show_tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    match Parser::new(tokens).parse() {
        Ok(program) => {
            print!("{}", printer::render(&program));
            false
        }
        Err(diagnostic) => {
            eprintln!("{}", diagnostic);
            true
        }
    }
}
