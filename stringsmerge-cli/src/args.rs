use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

/// Combine every strings.xml of a multi-module Android project into one file
/// and report string values that appear more than once.
#[derive(Parser, Debug)]
#[command(name = "stringsmerge", author, version, about, long_about = None)]
pub struct Args {
    /// Root directory of the Android project [default: .]
    pub root: Option<PathBuf>,

    /// File to write the combined resources to [default: strings.xml]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file [default: ./stringsmerge.toml when present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Glob of paths to leave out, relative to the root (repeatable)
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Honor .gitignore and .ignore files while walking
    #[arg(long)]
    pub respect_gitignore: bool,

    /// Name of the resource files to collect [default: strings.xml]
    #[arg(long)]
    pub file_name: Option<String>,

    /// Only collect files from this locale's values directory (`default`, `fr`, `pt-BR`, ...)
    #[arg(long)]
    pub locale: Option<String>,

    /// Skip files that fail to parse instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Fail when the root directory does not exist
    #[arg(long)]
    pub strict: bool,

    /// Start the output with an XML declaration
    #[arg(long)]
    pub xml_declaration: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with status 2 when duplicate values are found
    #[arg(long)]
    pub fail_on_duplicates: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["stringsmerge"]);
        assert_eq!(args.root, None);
        assert_eq!(args.output, None);
        assert!(args.exclude.is_empty());
        assert!(!args.json);
    }

    #[test]
    fn test_repeated_excludes() {
        let args = Args::parse_from(["stringsmerge", "proj", "-e", "**/build", "-e", "**/test"]);
        assert_eq!(args.root, Some(PathBuf::from("proj")));
        assert_eq!(args.exclude, vec!["**/build", "**/test"]);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["stringsmerge", "-v", "-q"]).is_err());
    }
}
