use std::collections::HashMap;

use crate::parser::interface::UserInterface;
use crate::registry::Registry;
use crate::tokens::dashed;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const ENTRY_INDENT: &str = "    ";
const COLUMN_SEPARATOR: &str = "\t";

pub(crate) struct Printer {
    program: String,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new("program")
    }

    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Render the help listing, one line per distinct usage string.
    ///
    /// Options sharing the same usage are aliases of one another, and are merged into a single line (ex: `-h,--help`).
    /// Lines are ordered by the lexicographically smallest name of each alias group.
    pub(crate) fn render(&self, registry: &Registry) -> Vec<String> {
        let mut entries: Vec<_> = registry.entries().collect();
        entries.sort_by(|(a, _, _), (b, _, _)| a.cmp(b));

        let mut aliases: HashMap<&str, Vec<&str>> = HashMap::default();
        for (name, _, usage) in &entries {
            aliases.entry(*usage).or_default().push(*name);
        }

        let mut lines = vec![format!("Usage of {p}", p = self.program)];

        for (_, kind, usage) in &entries {
            // Only the first (smallest) name of an alias group renders; the rest were merged into it.
            if let Some(mut group) = aliases.remove(usage) {
                group.sort();

                #[cfg(feature = "tracing_debug")]
                {
                    if group.len() > 1 {
                        debug!("Merging aliases {group:?} under the usage '{usage}'.");
                    }
                }

                let flags = group
                    .iter()
                    .map(|name| dashed(name))
                    .collect::<Vec<String>>()
                    .join(",");
                lines.push(format!(
                    "{ENTRY_INDENT}{flags}{COLUMN_SEPARATOR}{kind}{COLUMN_SEPARATOR}{usage}"
                ));
            }
        }

        lines
    }

    pub(crate) fn print_help(
        &self,
        registry: &Registry,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for line in self.render(registry) {
            user_interface.print(line);
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tokens_length = 0;
        let mut projection = String::default();
        let mut projection_offset = 0;

        for (i, token) in self.tokens.iter().enumerate() {
            tokens_length += token.len();
            projection.push_str(token);

            if i + 1 < self.tokens.len() {
                projection.push(' ');

                if tokens_length <= self.offset {
                    projection_offset += 1;
                }
            }
        }

        // Past the end (ex: a missing value) points at the last character, unless the last token is empty.
        let last_start = tokens_length - self.tokens.last().map_or(0, String::len);
        let end = std::cmp::max(tokens_length.saturating_sub(1), last_start);

        write!(
            f,
            "{projection}\n{:width$}^",
            "",
            width = std::cmp::min(self.offset, end) + projection_offset
        )
    }
}
