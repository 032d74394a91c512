use crate::api::{FlagValue, Handle};
use crate::parser::{ConfigError, ConsoleInterface, FlagParser, Parser, Printer, UserInterface};
use crate::registry::Registry;

/// The set of options a program expects, from which the command line parser is built.
///
/// ### Example
/// ```
/// # use flagparse_builder as flagparse;
/// use flagparse::FlagSet;
///
/// let mut flag_set = FlagSet::new("program");
/// let verbose = flag_set.declare_bool("v", false, "Be verbose.");
/// let mut parser = flag_set.build();
///
/// parser.parse_tokens(vec!["-v"].as_slice()).unwrap();
/// assert!(verbose.get());
/// ```
pub struct FlagSet {
    program: String,
    registry: Registry,
}

impl FlagSet {
    /// Create a flag set for the named program.
    /// The program name only appears in the help message.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            registry: Registry::default(),
        }
    }

    /// Declare a `bool` option.
    ///
    /// Matching the flag on the Cli sets the value to `true`; it never consumes a value token.
    /// A single character `name` is a short flag (`-v`), anything longer is a long flag (`--verbose`).
    ///
    /// Options that share the exact same `usage` are shown as aliases in the help message.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_builder as flagparse;
    /// use flagparse::FlagSet;
    ///
    /// let mut flag_set = FlagSet::new("program");
    /// let short = flag_set.declare_bool("h", false, "Show this help message.");
    /// let long = flag_set.declare_bool("help", false, "Show this help message.");
    /// let mut parser = flag_set.build();
    ///
    /// parser.parse_tokens(vec!["--help"].as_slice()).unwrap();
    /// assert!(!short.get());
    /// assert!(long.get());
    /// ```
    pub fn declare_bool(
        &mut self,
        name: impl Into<String>,
        default: bool,
        usage: impl Into<String>,
    ) -> Handle<bool> {
        self.declare(name, default, usage)
    }

    /// Declare an `int` option, which takes the following Cli token as its value.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_builder as flagparse;
    /// use flagparse::FlagSet;
    ///
    /// let mut flag_set = FlagSet::new("program");
    /// let limit = flag_set.declare_int("limit", 0, "How many.");
    /// let mut parser = flag_set.build();
    ///
    /// parser.parse_tokens(vec!["--limit", "-3"].as_slice()).unwrap();
    /// assert_eq!(limit.get(), -3);
    /// ```
    pub fn declare_int(
        &mut self,
        name: impl Into<String>,
        default: i64,
        usage: impl Into<String>,
    ) -> Handle<i64> {
        self.declare(name, default, usage)
    }

    /// Declare a `string` option, which takes the following Cli token verbatim as its value.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_builder as flagparse;
    /// use flagparse::FlagSet;
    ///
    /// let mut flag_set = FlagSet::new("program");
    /// let output = flag_set.declare_string("o", "out.txt", "Where to write.");
    /// let mut parser = flag_set.build();
    ///
    /// assert_eq!(output.get(), "out.txt");
    /// parser.parse_tokens(vec!["-o", "result.txt"].as_slice()).unwrap();
    /// assert_eq!(output.get(), "result.txt");
    /// ```
    pub fn declare_string(
        &mut self,
        name: impl Into<String>,
        default: impl Into<String>,
        usage: impl Into<String>,
    ) -> Handle<String> {
        self.declare(name, default.into(), usage)
    }

    fn declare<T: FlagValue>(
        &mut self,
        name: impl Into<String>,
        default: T,
        usage: impl Into<String>,
    ) -> Handle<T> {
        self.registry.declare(name, default, usage)
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<FlagParser, ConfigError> {
        let parser = Parser::new(self.registry)?;
        Ok(FlagParser::new(
            parser,
            Printer::new(self.program),
            user_interface,
        ))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build_parser(self) -> Result<FlagParser, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> FlagParser {
        match self.build_parser() {
            Ok(fp) => fp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::channel_interface;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[test]
    fn empty_build() {
        // Setup
        let flag_set = FlagSet::new("program");

        // Execute
        let mut parser = flag_set.build_parser().unwrap();

        // Verify
        parser.parse_tokens(&[]).unwrap();
        assert_eq!(parser.positional_count(), 0);
        assert_eq!(parser.render_help(), vec!["Usage of program"]);
    }

    #[rstest]
    #[case(vec![], false, -1, "", vec![])]
    #[case(vec!["a.txt"], false, -1, "", vec!["a.txt"])]
    #[case(vec!["-v"], true, -1, "", vec![])]
    #[case(vec!["--verbose"], true, -1, "", vec![])]
    #[case(vec!["-vl", "7"], true, 7, "", vec![])]
    #[case(vec!["--limit", "7", "-o", "x", "a", "b"], false, 7, "x", vec!["a", "b"])]
    #[case(vec!["-o", "-v", "-v"], true, -1, "-v", vec![])]
    fn build(
        #[case] tokens: Vec<&str>,
        #[case] expected_verbose: bool,
        #[case] expected_limit: i64,
        #[case] expected_output: &str,
        #[case] expected_positionals: Vec<&str>,
    ) {
        // Setup
        let mut flag_set = FlagSet::new("program");
        let verbose_short = flag_set.declare_bool("v", false, "Be verbose.");
        let verbose_long = flag_set.declare_bool("verbose", false, "Be verbose.");
        let limit_short = flag_set.declare_int("l", -1, "How many.");
        let limit_long = flag_set.declare_int("limit", -1, "How many.");
        let output = flag_set.declare_string("o", "", "Where to.");

        // Execute
        let mut parser = flag_set.build_parser().unwrap();

        // Verify
        // We testing that build sets up the right parser.
        // So the verification involves invoking the parser with the various permutations.
        parser.parse_tokens(tokens.as_slice()).unwrap();
        assert_eq!(
            verbose_short.get() || verbose_long.get(),
            expected_verbose
        );
        assert_eq!(
            std::cmp::max(limit_short.get(), limit_long.get()),
            expected_limit
        );
        assert_eq!(output.get(), expected_output);
        assert_eq!(parser.positionals(), expected_positionals.as_slice());
    }

    #[test]
    fn build_duplicate() {
        // Setup
        let mut flag_set = FlagSet::new("program");
        flag_set.declare_bool("v", false, "Be verbose.");
        flag_set.declare_int("v", 0, "Verbosity.");

        // Execute
        let result = flag_set.build_parser();

        // Verify
        assert_matches!(result, Err(ConfigError::DuplicateOption(name)) if name == "v");
    }

    #[test]
    fn build_help() {
        // Setup
        let mut flag_set = FlagSet::new("greet");
        flag_set.declare_string("name", "world", "Who to greet.");
        flag_set.declare_bool("h", false, "Show this help message.");
        flag_set.declare_bool("help", false, "Show this help message.");
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = flag_set.build_with_interface(Box::new(sender)).unwrap();
        parser.print_help();

        // Verify
        drop(parser);
        let message = receiver.consume_message();
        assert_eq!(
            message,
            "Usage of greet\n    -h,--help\tbool\tShow this help message.\n    --name\tstring\tWho to greet."
        );
        assert_contains!(message, "--name");
    }

    #[test]
    fn handles_default() {
        // Setup
        let mut flag_set = FlagSet::new("program");
        let b = flag_set.declare_bool("b", true, "b");
        let i = flag_set.declare_int("i", 42, "i");
        let s = flag_set.declare_string("s", "abc".to_string(), "s");

        // Execute
        let mut parser = flag_set.build_parser().unwrap();
        parser.parse_tokens(vec!["x", "y"].as_slice()).unwrap();

        // Verify
        assert!(b.get());
        assert_eq!(i.get(), 42);
        assert_eq!(s.get(), "abc");
    }
}
