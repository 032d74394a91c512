//! `flagparse` is a small command line flag parser for Rust.
//!
//! A program declares the options it expects, each with a kind (`bool`, `int`, or `string`), a default, and a usage line.
//! The parser then walks the Cli tokens once, writing matched values through to the handles returned at declaration.
//! Everything that isn't a flag (or a flag's value) is kept, in order, as a positional argument.
//!
//! `flagparse` deliberately stays small:
//! * *Grouped short flags*:
//! `-nfp 10` is equivalent to `-n -f -p 10`.
//! * *Typed values*:
//! the caller never converts `&str -> T`; an `int` option rejects `abc` at parse time.
//! * *Alias-merged help*:
//! options declared with identical usage text (ex: `h` and `help`) are shown on a single help line as `-h,--help`.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/cat.rs")]
//! ```
//!
//! ```console
//! $ cat --help
//! Usage of cat
//!     -b	bool	Print the lines as hex bytes.
//!     -f	bool	Print the lines in reverse.
//!     -h,--help	bool	Show this help message.
//!     -n	bool	Print line numbers.
//!     -p	int	Print at most this many lines.
//!
//! $ cat -nfp 2 notes.txt
//! 1	last line
//! 2	second to last line
//!
//! $ cat -p abc notes.txt
//! Parse error: 'abc' cannot be used as the value of flag '-p' (int).
//! -p abc notes.txt
//!    ^
//! ```
//!
//! # Builder Api
//! Start with a [`FlagSet`], `declare` the options, then `build` it into a [`FlagParser`].
//! * [`FlagSet::declare_bool`]: a switch; matching it sets `true`.
//! * [`FlagSet::declare_int`]: takes the next token as an `i64`.
//! * [`FlagSet::declare_string`]: takes the next token verbatim.
//!
//! Each declaration returns a [`Handle`], which holds the default until the parser writes to it.
//! Names of a single character are short flags (`-v`); longer names are long flags (`--verbose`).
//! Short and long names share one namespace, and declaring the same name twice is a [`ConfigError`].
//!
//! ```
//! use flagparse::FlagSet;
//!
//! let mut flag_set = FlagSet::new("program");
//! let verbose = flag_set.declare_bool("v", false, "Be verbose.");
//! let limit = flag_set.declare_int("limit", 10, "How many.");
//! let mut parser = flag_set.build();
//!
//! parser.parse_tokens(vec!["-v", "--limit", "3", "input"].as_slice()).unwrap();
//!
//! assert!(verbose.get());
//! assert_eq!(limit.get(), 3);
//! assert_eq!(parser.positional_count(), 1);
//! assert_eq!(parser.positional_at(0).unwrap(), "input");
//! ```
//!
//! # Cli Semantics
//! `flagparse` reads the Cli tokens according to the following rules.
//!
//! * A token of at least two characters that begins with `-` is a flag token; anything else (including a lone `-`) is positional.
//! * `--name` names exactly one option.
//! * `-abc` names the options `a`, `b`, and `c`, evaluated left to right.
//! Note this means `-help` is the four short flags `h`, `e`, `l`, `p`, not the long flag `--help`.
//! * A `bool` option is switched to `true`.
//! * An `int` or `string` option takes the following token as its value, whatever it looks like (`-p -5` sets `p` to `-5`).
//! * Within a single flag token, only one option may take a value: `-pq 5` is an error, while `-p 5 -q 6` is fine.
//! * There is no `--name=value` syntax, and repeating an option simply overwrites its value.
//!
//! Parsing stops at the first error ([`ParseError`]).
//! Options matched before the error keep their new values.
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events while declaring, parsing, and rendering help.
pub use flagparse_builder::*;
