//! Command-line tool that prints every routed RTF token with its position.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example dump_tokens -- document.rtf
//! cargo run --example dump_tokens -- document.rtf --text
//! cargo run --example dump_tokens -- document.rtf --codepage 1251 --skip-text
//! ```

use clap::Parser;
use rtfkit::rtf::{ParserOptions, RtfParser, TokenClass, text::plain_text};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

/// Dump the token stream of an RTF file
#[derive(Parser, Debug)]
#[command(name = "dump_tokens", about = "Print the tokens of an RTF document", version)]
struct Args {
    /// Input RTF file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Codepage used before the document declares one
    #[arg(long, default_value_t = 1252)]
    codepage: u16,

    /// Resolution for picture sizes
    #[arg(long, default_value_t = 96.0)]
    dpi: f32,

    /// Print the extracted plain text instead of tokens
    #[arg(long)]
    text: bool,

    /// Do not print Text tokens
    #[arg(long)]
    skip_text: bool,

    /// Tokenize destinations instead of handing them to the built-in sub-parsers
    #[arg(long)]
    raw: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", args.input.display(), e);
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(&args.input)?;
    let options = ParserOptions::new()
        .with_default_codepage(args.codepage)
        .with_dpi(args.dpi)
        .with_default_destinations(!args.raw);

    if args.text {
        println!("{}", plain_text(file, options)?);
        return Ok(());
    }

    let mut parser = RtfParser::with_options(file, options);
    while parser.next_token()? != TokenClass::Eof {
        parser.route_token()?;
        if args.skip_text && parser.class() == TokenClass::Text {
            continue;
        }
        let token = parser.token();
        let mut line = format!("{:>5}:{:<4} {}", parser.line(), parser.column(), token.snapshot());
        if token.class() == TokenClass::Text {
            line.push_str(&format!(" -> {:?}", token.encoded_text()));
        }
        if !token.binary().is_empty() {
            line.push_str(&format!(" [{} bytes]", token.binary().len()));
        }
        println!("{}", line);
    }

    println!("fonts: {}", parser.fonts().len());
    for font in parser.fonts().fonts() {
        println!("  f{} {:?} {:?} charset={:?}", font.num, font.name, font.family, font.charset);
    }
    println!("colors: {}", parser.colors().len());
    println!("styles: {}", parser.stylesheet().len());
    for style in parser.stylesheet().styles() {
        println!(
            "  {} {:?} {:?} ({} elements)",
            style.num,
            style.name,
            style.style_type,
            style.element_count()
        );
    }
    if let Some(picture) = parser.picture() {
        println!(
            "last picture: {:?}, {} bytes, {:?}x{:?} px",
            picture.image_type(),
            picture.data().len(),
            picture.width(),
            picture.height()
        );
    }
    Ok(())
}
