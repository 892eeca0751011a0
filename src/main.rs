// Soil: parse a source file and print it back in canonical form

use std::fs;
use std::path::Path;

use tracing_subscriber::EnvFilter;

fn usage(program_name: &str) {
    eprintln!("Usage: {} [--tokens] <file.soil>", program_name);
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {} program.soil            # Print the canonical form",
        program_name
    );
    eprintln!(
        "  {} --tokens program.soil   # Dump the token stream",
        program_name
    );
    eprintln!();
    eprintln!("Set RUST_LOG=debug to trace lexing and parsing.");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("soil");

    let (dump_tokens, input_file) = match args.get(1..).unwrap_or_default() {
        [flag, file] if flag == "--tokens" => (true, file),
        [file] if !file.starts_with("--") => (false, file),
        _ => {
            eprintln!("Error: No input file provided");
            eprintln!();
            usage(program_name);
            std::process::exit(1);
        }
    };

    if !Path::new(input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        usage(program_name);
        std::process::exit(1);
    }

    let source = fs::read_to_string(input_file)?;
    tracing::info!(file = %input_file, bytes = source.len(), "read source");

    if dump_tokens {
        let tokens = match soil::tokenize(&source) {
            Ok(tokens) => tokens,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };
        for token in &tokens {
            println!(
                "{:>4}:{:<4} {:<16} {}",
                token.location.line,
                token.location.column,
                format!("{:?}", token.kind),
                token.lexeme
            );
        }
        return Ok(());
    }

    let unit = match soil::parse(&source) {
        Ok(unit) => unit,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let printed = soil::print(&unit);
    if !printed.is_empty() {
        println!("{}", printed);
    }

    Ok(())
}
