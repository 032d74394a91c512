use std::env;

use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::{ErrorContext, Printer};

/// The configured command line parser.
/// Built via `FlagSet::build` or `FlagSet::build_parser`.
///
/// Parse once, then read the option values through their handles, and the positional arguments from here.
pub struct FlagParser {
    parser: Parser,
    printer: Printer,
    positionals: Vec<String>,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for FlagParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagParser")
            .field("positionals", &self.positionals)
            .finish()
    }
}

impl FlagParser {
    pub(crate) fn new(
        parser: Parser,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            parser,
            printer,
            positionals: Vec::default(),
            user_interface,
        }
    }

    /// Run the command line parser against the input tokens (not including the program name).
    ///
    /// Each flag token is resolved against the declared options, left to right:
    /// * `--name` resolves the single option `name`.
    /// * `-abc` resolves the options `a`, `b`, and `c`, in that order.
    /// * Any other token (including a lone `-`) is a positional argument.
    ///
    /// A `bool` option is switched to `true`.
    /// An `int` or `string` option takes the next token as its value, whatever that token looks like.
    /// Only one such option may appear in a single flag token (ex: `-pq 5` is an error, but `-p 5 -q 6` is fine).
    ///
    /// Parsing stops at the first error.
    /// Options matched before the error keep their new values.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_builder as flagparse;
    /// use flagparse::FlagSet;
    ///
    /// let mut flag_set = FlagSet::new("program");
    /// let numbered = flag_set.declare_bool("n", false, "Print line numbers.");
    /// let limit = flag_set.declare_int("p", -1, "Print at most this many lines.");
    /// let mut parser = flag_set.build();
    ///
    /// parser.parse_tokens(vec!["-np", "10", "file.txt"].as_slice()).unwrap();
    ///
    /// assert!(numbered.get());
    /// assert_eq!(limit.get(), 10);
    /// assert_eq!(parser.positional_at(0).unwrap(), "file.txt");
    /// ```
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        self.parser
            .consume(tokens, &mut self.positionals)
            .map_err(|(_, error)| error)
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// See [`FlagParser::parse_tokens`] for the parsing rules.
    pub fn parse_args(&mut self) -> Result<(), ParseError> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// If the parser encounters an error, it displays the error with the offending token pointed out, then exits with error code `1` (via [`std::process::exit`]).
    /// See [`FlagParser::parse_tokens`] for the parsing rules.
    pub fn parse(&mut self) {
        let command_input: Vec<String> = env::args().skip(1).collect();

        if let Err(exit_code) = self.invoke(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            std::process::exit(exit_code);
        }
    }

    fn invoke(&mut self, tokens: &[&str]) -> Result<(), i32> {
        match self.parser.consume(tokens, &mut self.positionals) {
            Ok(()) => Ok(()),
            Err((offset, parse_error)) => {
                self.user_interface.print_error(parse_error);
                self.user_interface
                    .print_error_context(ErrorContext::new(offset, tokens));
                Err(1)
            }
        }
    }

    /// The number of positional arguments collected so far.
    pub fn positional_count(&self) -> usize {
        self.positionals.len()
    }

    /// The positional argument at `index`, in Cli order.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_builder as flagparse;
    /// use flagparse::{FlagSet, IndexError};
    ///
    /// let mut parser = FlagSet::new("program").build();
    /// parser.parse_tokens(vec!["a.txt"].as_slice()).unwrap();
    ///
    /// assert_eq!(parser.positional_at(0), Ok("a.txt"));
    /// assert_eq!(parser.positional_at(1), Err(IndexError { index: 1, length: 1 }));
    /// ```
    pub fn positional_at(&self, index: usize) -> Result<&str, IndexError> {
        self.positionals
            .get(index)
            .map(String::as_str)
            .ok_or(IndexError {
                index,
                length: self.positionals.len(),
            })
    }

    /// All the positional arguments collected so far, in Cli order.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Render the help message lines.
    ///
    /// Options declared with identical usage text are shown as aliases on a single line (ex: `-h,--help`).
    pub fn render_help(&self) -> Vec<String> {
        self.printer.render(self.parser.registry())
    }

    /// Display the help message.
    pub fn print_help(&self) {
        self.printer
            .print_help(self.parser.registry(), &*self.user_interface);
    }
}
