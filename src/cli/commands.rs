use clap::{ArgAction, Parser, ValueEnum};
use mdtoc::output::OutputFormat;
use std::path::PathBuf;

#[cfg(feature = "unstable-dynamic")]
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate, ValueCompleter};

#[derive(Parser, Debug)]
#[command(name = "mdtoc")]
#[command(version)]
#[command(about = "Builds a table of contents from the headings of a markdown file")]
#[command(
    long_about = "mdtoc - Iterates over the headings of a markdown file and returns a formatted\n\
    table of contents. Output is printed to the console and copied to the system clipboard.\n\n\
    Headings inside ``` fenced code blocks are ignored.\n\n\
    Examples:\n  \
    mdtoc README.md               # All headings, console + clipboard\n  \
    mdtoc README.md -w 2 3        # Only ## and ### headings\n  \
    mdtoc -a -c README.md         # Alphabetical, console only\n  \
    cat doc.md | mdtoc -          # Read from stdin"
)]
pub struct Cli {
    /// Markdown file (.md or .markdown), or '-' for stdin
    ///
    /// Paths may be relative or absolute.
    #[arg(add = markdown_file_completer())]
    pub path: PathBuf,

    /// Return results alphabetically
    #[arg(short = 'a', long = "alphabetical")]
    pub alphabetical: bool,

    /// Disable saving results to the system clipboard
    #[arg(short = 'c', long = "no-clipboard")]
    pub no_clipboard: bool,

    /// Disable printing results to the console
    #[arg(short = 'o', long = "no-output")]
    pub no_output: bool,

    /// Heading levels to capture (1-6)
    ///
    /// H1 - H6 headings are captured by default.
    ///
    /// Examples:
    ///   -w 1      # Only "#" headings
    ///   -w 2 4    # "##" and "####" headings
    #[arg(
        short = 'w',
        long = "whitelist",
        value_name = "LEVEL",
        num_args = 0..,
        allow_negative_numbers = true
    )]
    pub whitelist: Option<Vec<i64>>,

    /// Console output format
    ///
    ///   plain - One [title](#anchor) link per line (default)
    ///   json  - JSON array of {title, anchor} objects
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Read defaults from this config file instead of the user config
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Markdown links
    Plain,
    /// JSON array
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[cfg(feature = "unstable-dynamic")]
fn markdown_file_completer() -> ArgValueCompleter {
    use std::ffi::OsStr;
    use std::path::Path;

    struct MarkdownCompleter;

    impl ValueCompleter for MarkdownCompleter {
        fn complete(&self, current: &OsStr) -> Vec<CompletionCandidate> {
            let input_str = current.to_string_lossy();
            let input_path = Path::new(input_str.as_ref());

            // "../docs/READ" searches "../docs" for names starting with "READ"
            let (search_dir, prefix) = if input_str.is_empty() {
                (Path::new("."), String::new())
            } else if input_str.ends_with('/') || input_str.ends_with('\\') {
                (input_path, String::new())
            } else {
                // parent() is Some("") for bare file names
                let parent = input_path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or(Path::new("."));
                let prefix = input_path
                    .file_name()
                    .map(|s| s.to_string_lossy().to_lowercase())
                    .unwrap_or_default();
                (parent, prefix)
            };

            let Ok(entries) = std::fs::read_dir(search_dir) else {
                return vec![];
            };

            entries
                .filter_map(Result::ok)
                .filter_map(|entry| {
                    let path = entry.path();
                    let file_name = path.file_name()?.to_string_lossy().to_string();
                    if !file_name.to_lowercase().starts_with(&prefix) {
                        return None;
                    }

                    let value = if search_dir == Path::new(".") {
                        file_name
                    } else {
                        search_dir.join(&file_name).to_string_lossy().to_string()
                    };

                    if path.is_dir() {
                        let value = if value.ends_with('/') { value } else { value + "/" };
                        Some(CompletionCandidate::new(value).help(Some("directory".into())))
                    } else if mdtoc::input::is_markdown_path(&path) {
                        Some(CompletionCandidate::new(value))
                    } else {
                        None
                    }
                })
                .collect()
        }
    }

    ArgValueCompleter::new(MarkdownCompleter)
}

#[cfg(not(feature = "unstable-dynamic"))]
fn markdown_file_completer() -> clap::builder::ValueHint {
    clap::ValueHint::FilePath
}
