//! Rill CLI: compile files and inspect tokens or bytecode.

use std::env;
use std::fs;
use std::process;

use colored::Colorize;
use mimalloc::MiMalloc;

use rill::bytecode::print_disassembly;
use rill::lexer::Scanner;
use rill::unicode;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI command to execute.
enum Command {
    /// Compile a script file
    Compile { file: String },
    /// Compile a string
    Eval { code: String },
}

/// CLI options parsed from arguments.
struct Options {
    command: Command,
    tokens: bool,
    disassemble: bool,
}

fn print_usage() {
    eprintln!("Rill {} - Lisp front-end", VERSION);
    eprintln!();
    eprintln!("Usage: rill [options] <script.lisp>");
    eprintln!("       rill [options] -e <code>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -e <code>       Compile code given on the command line");
    eprintln!("  --tokens        Print the token stream");
    eprintln!("  --disassemble   Print the compiled chunk");
    eprintln!("  --help, -h      Show this help message");
}

fn parse_args() -> Options {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut command = None;
    let mut tokens = false;
    let mut disassemble = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--tokens" => tokens = true,
            "--disassemble" => disassemble = true,
            "-e" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("-e requires an argument");
                    print_usage();
                    process::exit(64);
                }
                command = Some(Command::Eval {
                    code: args[i].clone(),
                });
            }
            arg if arg.starts_with('-') => {
                eprintln!("Unknown option: {}", arg);
                print_usage();
                process::exit(64);
            }
            arg => {
                if command.is_some() {
                    eprintln!("Unexpected argument: {}", arg);
                    print_usage();
                    process::exit(64);
                }
                command = Some(Command::Compile {
                    file: arg.to_string(),
                });
            }
        }
        i += 1;
    }

    let Some(command) = command else {
        print_usage();
        process::exit(64);
    };
    Options {
        command,
        tokens,
        disassemble,
    }
}

fn main() {
    let options = parse_args();

    let (name, source) = match &options.command {
        Command::Compile { file } => match fs::read(file) {
            Ok(bytes) => (file.clone(), bytes),
            Err(e) => {
                eprintln!("{} cannot read '{}': {}", "Error:".red().bold(), file, e);
                process::exit(66);
            }
        },
        Command::Eval { code } => ("<eval>".to_string(), code.clone().into_bytes()),
    };

    if options.tokens {
        dump_tokens(&source);
    }

    match rill::compile(&source) {
        Ok(chunk) => {
            if options.disassemble {
                print_disassembly(&chunk, &name);
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(65);
        }
    }
}

/// Print one line per token, stopping where the scanner stops.
fn dump_tokens(source: &[u8]) {
    let codepoints = unicode::to_codepoints(source, source.len());
    let mut scanner = Scanner::new(&codepoints);
    for token in scanner.scan_tokens() {
        println!(
            "[{:?}] '{}' at {}",
            token.kind,
            scanner.lexeme(&token),
            token.span
        );
    }
}
