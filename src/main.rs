// blockscope: scope analysis for a minimal C-like block language

use std::fs;
use std::path::Path;

use blockscope::parser::lexer::Lexer;
use blockscope::parser::parse::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("blockscope");

    let mut dump_tokens = false;
    let mut input_file: Option<&str> = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--tokens" => dump_tokens = true,
            other => input_file = Some(other),
        }
    }

    let input_file = match input_file {
        Some(file) => file,
        None => {
            eprintln!("Error: No input file provided");
            eprintln!();
            eprintln!("Usage: {} [--tokens] <file>", program_name);
            eprintln!();
            eprintln!("  --tokens    print the token stream instead of analyzing");
            std::process::exit(1);
        }
    };

    if !Path::new(input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        std::process::exit(1);
    }

    let source = fs::read_to_string(input_file)?;

    if dump_tokens {
        for token in Lexer::new(&source).tokenize() {
            println!("{:?}: {}", token.kind, token.lexeme);
        }
        return Ok(());
    }

    eprintln!("Analyzing {}...", input_file);
    let mut parser = Parser::new(&source);
    let analysis = match parser.analyze() {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // One fact per identifier use, in source order
    for fact in &analysis.facts {
        print!("{}; ", fact);
    }
    println!();

    // Final bindings of the outermost block
    print!("{{ ");
    for (name, declared_type) in analysis.scope.bindings() {
        print!("{}:{}; ", name, declared_type);
    }
    println!("}}");

    Ok(())
}
