//! The command line front end: reads the source code, runs the tokenizer and the parser, and
//! prints the tokens and the syntax tree.

use std::{
    fmt::Display,
    fs::File,
    io::IsTerminal,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

pub use clap::Parser;
use tinyc_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_file::{self, SourceFile},
};
use tinyc_lexical::token_stream::TokenStream;
use tinyc_syntax::{error::Error, parser, syntax_tree::program::Program};

pub mod input;

/// Selects which artifacts of the compilation are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum Emit {
    /// Prints only the token list.
    Tokens,

    /// Prints only the syntax tree.
    Ast,

    /// Prints the token list followed by the syntax tree.
    All,
}

impl Emit {
    /// Checks if the token list should be printed.
    #[must_use]
    pub fn tokens(self) -> bool { matches!(self, Self::Tokens | Self::All) }

    /// Checks if the syntax tree should be printed.
    #[must_use]
    pub fn ast(self) -> bool { matches!(self, Self::Ast | Self::All) }
}

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "tinyc",
    about = "Tokenizes and parses a small C-like language.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The input file to compile; the source code is read from the standard input until an
    /// empty line when omitted.
    pub file: Option<PathBuf>,

    /// The artifacts to print.
    #[clap(long, value_enum, default_value_t = Emit::All)]
    pub emit: Emit,

    /// Prints the full structure of the syntax tree, spans included, instead of its canonical
    /// rendering.
    #[clap(long = "debug-tree")]
    pub debug_tree: bool,
}

/// A struct that implements [`Handler`] but prints all the message to the standard error stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
struct Printer;

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) { eprintln!("{error}"); }
}

/// The output of a successful compilation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Compilation {
    /// The tokens of the source code, terminated by the end of input marker.
    pub token_stream: TokenStream,

    /// The syntax tree of the whole source code.
    pub program: Program,
}

/// Tokenizes and parses the given source file.
///
/// Returns `None` if the source code has a syntax error; the error is reported to the `handler`.
pub fn compile(
    source_file: &Arc<SourceFile>,
    handler: &dyn Handler<Error>,
) -> Option<Compilation> {
    let token_stream = TokenStream::tokenize(source_file);

    let result = parser::Parser::new(&token_stream).parse_program();

    match result {
        Ok(program) => Some(Compilation {
            token_stream,
            program,
        }),
        Err(error) => {
            handler.receive(error);
            None
        }
    }
}

/// Implements [`Display`] for listing the tokens one per line as `line:column  Kind  text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenListing<'a>(pub &'a TokenStream);

impl<'a> Display for TokenListing<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in self.0.iter() {
            writeln!(f, "{}  {}  {}", token.location(), token.kind(), token.text())?;
        }

        Ok(())
    }
}

fn report(path: &Path, error: impl Display) {
    let msg = Message::new(Severity::Error, format!("{}: {error}", path.display()));

    eprintln!("{msg}");
}

fn load_source_file(path: &Path) -> Result<Arc<SourceFile>, source_file::Error> {
    let file = File::open(path)?;

    SourceFile::load(file, path.to_path_buf())
}

fn read_source_file() -> std::io::Result<Arc<SourceFile>> {
    let stdin = std::io::stdin();

    if stdin.is_terminal() {
        println!("{}", input::PROMPT);
    }

    let source = input::read_interactive(stdin.lock())?;

    Ok(SourceFile::from_string(PathBuf::from("<stdin>"), source))
}

/// Runs the program with the given arguments.
pub fn run(argument: Argument) -> ExitCode {
    let source_file = match &argument.file {
        Some(path) => match load_source_file(path) {
            Ok(source_file) => source_file,
            Err(error) => {
                report(path, error);
                return ExitCode::FAILURE;
            }
        },
        None => match read_source_file() {
            Ok(source_file) => source_file,
            Err(error) => {
                report(Path::new("<stdin>"), error);
                return ExitCode::FAILURE;
            }
        },
    };

    // nothing is printed unless the whole source code parses
    let Some(compilation) = compile(&source_file, &Printer) else {
        return ExitCode::FAILURE;
    };

    if argument.emit.tokens() {
        println!("TOKENS:");
        print!("{}", TokenListing(&compilation.token_stream));
    }

    if argument.emit.ast() {
        if argument.emit.tokens() {
            println!();
        }

        println!("AST:");

        if argument.debug_tree {
            println!("{:#?}", compilation.program);
        } else {
            println!("{}", compilation.program);
        }
    }

    ExitCode::SUCCESS
}
