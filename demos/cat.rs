use flagparse::FlagSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Split the input into lines of raw bytes, dropping the `\n` and any trailing `\r`.
fn read_lines(reader: impl BufRead) -> io::Result<Vec<Vec<u8>>> {
    reader
        .split(b'\n')
        .map(|line| {
            line.map(|mut line| {
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                line
            })
        })
        .collect()
}

fn render(line: &[u8], bytes: bool) -> String {
    if bytes {
        line.iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<String>>()
            .join(" ")
    } else {
        String::from_utf8_lossy(line).into_owned()
    }
}

fn main() {
    let mut flag_set = FlagSet::new("cat");
    let reverse = flag_set.declare_bool("f", false, "Print the lines in reverse.");
    let numbered = flag_set.declare_bool("n", false, "Print line numbers.");
    let bytes = flag_set.declare_bool("b", false, "Print the lines as hex bytes.");
    let limit = flag_set.declare_int("p", -1, "Print at most this many lines.");
    let help_short = flag_set.declare_bool("h", false, "Show this help message.");
    let help_long = flag_set.declare_bool("help", false, "Show this help message.");
    let mut parser = flag_set.build();

    parser.parse();

    if help_short.get() || help_long.get() {
        parser.print_help();
        return;
    }

    // The first positional argument is the file, ex: `cat -p 10 a.txt`.
    let path = match parser.positional_at(0) {
        Ok(path) => path,
        Err(_) => {
            eprintln!("Please provide a file name.");
            std::process::exit(1);
        }
    };

    let mut lines = match File::open(path) {
        Ok(file) => match read_lines(BufReader::new(file)) {
            Ok(lines) => lines,
            Err(error) => {
                eprintln!("{path}: {error}");
                std::process::exit(1);
            }
        },
        Err(error) => {
            eprintln!("{path}: {error}");
            std::process::exit(1);
        }
    };

    if reverse.get() {
        lines.reverse();
    }

    // -1 means no limit.
    let limit = match limit.get() {
        -1 => usize::MAX,
        n => usize::try_from(n).unwrap_or(0),
    };

    for (i, line) in lines.into_iter().take(limit).enumerate() {
        let line = render(&line, bytes.get());

        if numbered.get() {
            println!("{}\t{line}", i + 1);
        } else {
            println!("{line}");
        }
    }
}
