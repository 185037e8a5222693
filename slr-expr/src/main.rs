//! Command-line interface for slr-expr.
//!
//! Evaluates one expression, given as an argument or read from standard
//! input, and prints `<expression> = <value>`. With `--tokens` it prints the
//! token stream instead.

use anyhow::Result;
use clap::Parser as ClapParser;
use slr_expr::{ExprLexer, ExprParser, Lexer};
use std::io::{self, Read};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate; read from standard input when omitted
    expression: Option<String>,

    /// Decimal places to print
    #[arg(short, long, default_value_t = 6)]
    precision: usize,

    /// Print the tokens instead of evaluating
    #[arg(short, long)]
    tokens: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let input = match args.expression {
        Some(expression) => expression,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf.trim_end().to_string()
        }
    };

    if args.tokens {
        let mut lexer = ExprLexer::new(input.chars());
        for token in lexer.scan_all()? {
            println!("{token}");
        }
        log::info!("Stats: {:?}", lexer.stats());
        return Ok(());
    }

    let mut parser = ExprParser::new(input.chars());
    let root = parser.run()?;
    println!("{} = {:.*}", input, args.precision, root.value());
    log::info!("Stats: {:?}, {:?}", parser.lexer_stats(), parser.stats());

    Ok(())
}
