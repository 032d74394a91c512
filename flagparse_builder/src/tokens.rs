/// How a single raw Cli token is interpreted before any registry lookup.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// Anything that isn't a flag, kept verbatim.
    Positional(&'t str),
    /// `--name`: exactly one flag name.
    Long(&'t str),
    /// `-abc`: every character is its own flag name.
    ShortGroup(&'t str),
}

impl<'t> Token<'t> {
    pub(crate) fn classify(token: &'t str) -> Self {
        // A lone '-' (or the empty string) is positional.
        if token.len() < 2 || !token.starts_with('-') {
            return Token::Positional(token);
        }

        // Find a 'long' flag, such as:
        //  --initial
        // The bare "--" falls through to the short group below.
        if token.len() > 2 {
            if let Some(name) = token.strip_prefix("--") {
                return Token::Long(name);
            }
        }

        // Find 'short' flag(s), such as:
        //  -i
        //  -iv
        Token::ShortGroup(&token[1..])
    }

    /// The flag names this token resolves to, in the order they must be evaluated.
    pub(crate) fn names(&self) -> Vec<String> {
        match self {
            Token::Positional(_) => Vec::default(),
            Token::Long(name) => vec![name.to_string()],
            Token::ShortGroup(group) => group.chars().map(String::from).collect(),
        }
    }
}

/// Render a flag name the way it is typed on the Cli: `-x` for a single character, `--xyz` otherwise.
pub(crate) fn dashed(name: &str) -> String {
    if name.chars().count() <= 1 {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}
