//! # mdtoc
//!
//! Builds a markdown table of contents from the headings of a file.
//!
//! ## Usage
//!
//! Print the table of contents and copy it to the clipboard:
//! ```sh
//! mdtoc README.md
//! ```
//!
//! Only `##` and `###` headings, sorted, console only:
//! ```sh
//! mdtoc README.md -a -c -w 2 3
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use color_eyre::Result;
use mdtoc::clipboard::SystemClipboard;
use mdtoc::input::{self, InputSource};
use mdtoc::output::{self, OutputOptions};
use mdtoc::{Config, HeadingLevelSet, TocError};
use std::process;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Handle dynamic shell completions
    #[cfg(feature = "unstable-dynamic")]
    clap_complete::CompleteEnv::with_factory(|| {
        use clap::CommandFactory;
        Cli::command()
    })
    .complete();

    let args = Cli::parse();

    let config = match args.config.as_deref() {
        Some(path) => Config::load_from(path).unwrap_or_else(|e| {
            eprintln!("ERROR:  {}", e);
            process::exit(1);
        }),
        None => Config::load(),
    };

    cli::init_logging(cli::resolve_level(args.verbose, config.log_level()));

    if let Err(e) = run(&args, &config) {
        eprintln!("{}", message(&e));
        process::exit(1);
    }
    Ok(())
}

fn run(args: &Cli, config: &Config) -> mdtoc::Result<()> {
    let requested = args.whitelist.as_deref().unwrap_or(config.headings.levels.as_slice());
    let resolution = HeadingLevelSet::resolve(requested);
    for rejected in &resolution.rejected {
        log::warn!("{}", rejected);
    }
    log::debug!("capturing heading levels {}", resolution.set);

    let source = InputSource::from_arg(&args.path);
    let entries = input::read_toc(&source, &resolution.set)?;
    if entries.is_empty() {
        return Err(TocError::NoHeadingsFound);
    }

    let options = output_options(args, config);
    let stdout = std::io::stdout();
    output::present(entries, &options, &mut stdout.lock(), &mut SystemClipboard::new())
}

/// CLI flags override the config file; flags can only switch sinks off.
fn output_options(args: &Cli, config: &Config) -> OutputOptions {
    let mut options = OutputOptions::from(&config.output);
    options.alphabetical |= args.alphabetical;
    options.console &= !args.no_output;
    options.clipboard &= !args.no_clipboard;
    if let Some(format) = args.format {
        options.format = format.into();
    }
    options
}

fn message(err: &TocError) -> String {
    match err {
        TocError::NoHeadingsFound => err.to_string(),
        _ => format!("ERROR:  {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdtoc::output::OutputFormat;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mdtoc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_output_options_defaults() {
        let options = output_options(&cli(&["doc.md"]), &Config::default());
        assert_eq!(options, OutputOptions::default());
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::from_toml("[output]\nformat = \"json\"").unwrap();
        let options = output_options(&cli(&["doc.md", "-a", "-c", "-f", "plain"]), &config);
        assert!(options.alphabetical);
        assert!(!options.clipboard);
        assert!(options.console);
        assert_eq!(options.format, OutputFormat::Plain);
    }

    #[test]
    fn test_config_can_disable_sinks() {
        let config = Config::from_toml("[output]\nclipboard = false\nconsole = false").unwrap();
        let options = output_options(&cli(&["doc.md"]), &config);
        assert!(!options.clipboard);
        assert!(!options.console);
    }

    #[test]
    fn test_messages() {
        assert_eq!(message(&TocError::NoHeadingsFound), "No Headers found.");
        let err = TocError::InvalidPath("nope.md".into());
        assert!(message(&err).starts_with("ERROR:  Invalid path"));
    }

    #[test]
    fn test_run_reports_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.md");
        let args = cli(&[path.to_str().unwrap(), "-c", "-o"]);
        assert!(matches!(
            run(&args, &Config::default()),
            Err(TocError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_run_reports_no_headings() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("plain.md");
        std::fs::write(&path, "no headings\n```\n# hidden\n```\n").unwrap();
        let args = cli(&[path.to_str().unwrap(), "-c", "-o"]);
        assert!(matches!(
            run(&args, &Config::default()),
            Err(TocError::NoHeadingsFound)
        ));
    }

    #[test]
    fn test_run_succeeds_with_sinks_disabled() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "# Title\n## Usage\n").unwrap();
        let args = cli(&[path.to_str().unwrap(), "-c", "-o", "-w", "2", "9"]);
        assert!(run(&args, &Config::default()).is_ok());
    }
}
