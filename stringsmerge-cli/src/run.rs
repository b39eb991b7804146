use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::CommandFactory;
use stringsmerge::{
    CombineOptions, Locale, LocateOptions, MissingRootPolicy, ParseFailurePolicy, RenderOptions,
    combiner::{self, DEFAULT_OUTPUT},
    locator::DEFAULT_FILE_NAME,
};
use tracing::{debug, info};

use crate::{
    args::Args,
    config::{FileConfig, discover_config},
    error::CliError,
    exit_status::ExitStatus,
    report::{found_line, print_duplicates, print_json, print_written},
};

/// Installs the stderr log subscriber; `RUST_LOG` is ignored in favor of the flags.
pub fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Merges command-line flags over the config file into library options.
pub fn resolve_options(args: &Args, file: FileConfig) -> Result<CombineOptions, CliError> {
    let root = args
        .root
        .clone()
        .or(file.root)
        .unwrap_or_else(|| PathBuf::from("."));
    let output = args
        .output
        .clone()
        .or(file.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let mut exclude = file.exclude;
    exclude.extend(args.exclude.iter().cloned());

    let locale = args
        .locale
        .as_deref()
        .or(file.locale.as_deref())
        .map(str::parse::<Locale>)
        .transpose()?;

    let locate = LocateOptions::new()
        .with_file_name(
            args.file_name
                .clone()
                .or(file.file_name)
                .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
        )
        .with_exclude(exclude)
        .with_respect_gitignore(args.respect_gitignore || file.respect_gitignore.unwrap_or(false))
        .with_locale(locale);

    let mut render = RenderOptions::new()
        .with_xml_declaration(args.xml_declaration || file.xml_declaration.unwrap_or(false));
    if let Some(indent) = file.indent {
        render = render.with_indent(indent);
    }

    let parse_policy = if args.skip_invalid || file.skip_invalid.unwrap_or(false) {
        ParseFailurePolicy::Skip
    } else {
        ParseFailurePolicy::Abort
    };
    let root_policy = if args.strict {
        MissingRootPolicy::Fail
    } else {
        MissingRootPolicy::Empty
    };

    Ok(CombineOptions::new(root)
        .with_output(output)
        .with_locate(locate)
        .with_parse_failure_policy(parse_policy)
        .with_missing_root_policy(root_policy)
        .with_render(render))
}

/// Runs one invocation, writing console output to stdout.
pub fn run_cli(args: Args) -> Result<ExitStatus, CliError> {
    if let Some(shell) = args.completions {
        let mut command = Args::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut io::stdout());
        return Ok(ExitStatus::Success);
    }

    let file_config = discover_config(args.config.as_deref(), Path::new("."))?.unwrap_or_default();
    let options = resolve_options(&args, file_config)?;
    debug!("Resolved options: {:?}", options);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let files = combiner::locate(&options)?;
    if !args.json {
        writeln!(out, "{}", found_line(files.len(), &options.locate.file_name))?;
    }

    let report = combiner::aggregate(&options, files)?;
    info!(
        "{} duplicate values across {} strings",
        report.duplicates.len(),
        report.document.string_count()
    );

    // Text mode reports duplicates before the output is written
    if args.json {
        combiner::write_output(&options, &report)?;
        print_json(&mut out, &report)?;
    } else {
        print_duplicates(&mut out, &report)?;
        combiner::write_output(&options, &report)?;
        print_written(&mut out, &report, &options.locate.file_name)?;
    }

    if args.fail_on_duplicates && report.has_duplicates() {
        return Ok(ExitStatus::Duplicates);
    }
    Ok(ExitStatus::Success)
}
