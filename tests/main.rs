use flagparse::{ConfigError, FlagSet, IndexError, Kind, ParseError};
use rstest::rstest;

#[test]
fn builder_compiles() {
    FlagSet::new("program").build();
}

#[test]
fn int_then_positional() {
    let mut flag_set = FlagSet::new("program");
    let p = flag_set.declare_int("p", -1, "limit");
    let mut parser = flag_set.build();

    parser
        .parse_tokens(&["-p", "10", "file.txt"])
        .unwrap();

    assert_eq!(p.get(), 10);
    assert_eq!(parser.positional_count(), 1);
    assert_eq!(parser.positional_at(0), Ok("file.txt"));
}

#[test]
fn unrecognized_keeps_earlier_switches() {
    let mut flag_set = FlagSet::new("program");
    let x = flag_set.declare_bool("x", false, "x");
    let y = flag_set.declare_bool("y", false, "y");
    let mut parser = flag_set.build();

    let error = parser.parse_tokens(&["-xyz"]).unwrap_err();

    assert_eq!(
        error,
        ParseError::UnrecognizedFlag {
            name: "z".to_string()
        }
    );
    assert!(x.get());
    assert!(y.get());
}

#[rstest]
#[case(&["-pq", "5"], Err(ParseError::ConflictingValueFlags { token: "-pq".to_string() }))]
#[case(&["-p", "10", "-q", "20"], Ok(()))]
#[case(&["-p"], Err(ParseError::MissingValue { name: "p".to_string() }))]
#[case(&["-p", "abc"], Err(ParseError::BadValue { token: "abc".to_string(), name: "p".to_string(), kind: Kind::Int }))]
fn value_flags(#[case] tokens: &[&str], #[case] expected: Result<(), ParseError>) {
    let mut flag_set = FlagSet::new("program");
    flag_set.declare_int("p", 0, "u1");
    flag_set.declare_int("q", 0, "u1");
    let mut parser = flag_set.build();

    assert_eq!(parser.parse_tokens(tokens), expected);
}

#[test]
fn lone_dash_is_positional() {
    let mut flag_set = FlagSet::new("program");
    let n = flag_set.declare_bool("n", false, "n");
    let mut parser = flag_set.build();

    parser.parse_tokens(&["-", "-n"]).unwrap();

    assert!(n.get());
    assert_eq!(parser.positionals(), ["-".to_string()]);
}

#[test]
fn defaults_survive() {
    let mut flag_set = FlagSet::new("program");
    let b = flag_set.declare_bool("b", true, "b");
    let i = flag_set.declare_int("i", 7, "i");
    let s = flag_set.declare_string("s", "x", "s");
    let mut parser = flag_set.build();

    parser.parse_tokens(&["a", "b"]).unwrap();

    assert!(b.get());
    assert_eq!(i.get(), 7);
    assert_eq!(s.get(), "x");
}

#[test]
fn positional_out_of_range() {
    let mut parser = FlagSet::new("program").build();

    parser.parse_tokens(&[]).unwrap();

    assert_eq!(
        parser.positional_at(0),
        Err(IndexError {
            index: 0,
            length: 0
        })
    );
}

#[test]
fn duplicate_is_config_error() {
    let mut flag_set = FlagSet::new("program");
    flag_set.declare_bool("h", false, "help");
    flag_set.declare_bool("h", true, "help");

    assert_eq!(
        flag_set.build_parser().unwrap_err(),
        ConfigError::DuplicateOption("h".to_string())
    );
}

#[test]
fn help_merges_aliases() {
    let mut flag_set = FlagSet::new("cat");
    flag_set.declare_bool("f", false, "Print the lines in reverse.");
    flag_set.declare_bool("n", false, "Print line numbers.");
    flag_set.declare_bool("b", false, "Print the lines as hex bytes.");
    flag_set.declare_int("p", -1, "Print at most this many lines.");
    flag_set.declare_bool("h", false, "Show this help message.");
    flag_set.declare_bool("help", false, "Show this help message.");
    let parser = flag_set.build();

    assert_eq!(
        parser.render_help(),
        vec![
            "Usage of cat",
            "    -b\tbool\tPrint the lines as hex bytes.",
            "    -f\tbool\tPrint the lines in reverse.",
            "    -h,--help\tbool\tShow this help message.",
            "    -n\tbool\tPrint line numbers.",
            "    -p\tint\tPrint at most this many lines.",
        ]
    );
}
