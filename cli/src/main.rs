use std::path::PathBuf;

use argmap_core::{LimitOverrides, OutputFormat, format_result, parse_command};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"Example:

    $ argmap "curl -s -P 8080 www.github.com www.pypi.org"
    {'utility': [('curl',)], '-s': [()], '-P': [('8080',)], 'operands': [('www.github.com',), ('www.pypi.org',)]}
"#;

#[derive(Debug, Parser)]
#[command(name = "argmap", version)]
#[command(about = "Converts a shell command into an argument map")]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// The shell command to convert into an argument map.
    command: String,
    /// Inline limit overrides as a JSON/YAML mapping (e.g. '{"-s": 2, "-H": null}').
    #[arg(short, long)]
    limit_overrides: Option<String>,
    /// File containing limit overrides; inline overrides take precedence.
    #[arg(long)]
    limits_file: Option<PathBuf>,
    /// Print the argument map as JSON.
    #[arg(short, long, conflicts_with = "yaml")]
    json: bool,
    /// Print the argument map as YAML.
    #[arg(short, long)]
    yaml: bool,
    /// Pretty print the argument map.
    #[arg(short, long)]
    pretty: bool,
    /// Log parsing steps to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.yaml {
            OutputFormat::Yaml
        } else {
            OutputFormat::Tuple
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let limits = load_limits(cli)?;
    debug!(overrides = limits.len(), "Loaded limit overrides");

    let map = parse_command(&cli.command, &limits).map_err(|err| err.to_string())?;
    let rendered =
        format_result(&map, cli.output_format(), cli.pretty).map_err(|err| err.to_string())?;
    println!("{rendered}");
    Ok(())
}

fn load_limits(cli: &Cli) -> Result<LimitOverrides, String> {
    let mut limits = match &cli.limits_file {
        Some(path) => LimitOverrides::load(path).map_err(|err| {
            format!("Failed to load limits file '{}': {err}", path.display())
        })?,
        None => LimitOverrides::new(),
    };

    if let Some(inline) = &cli.limit_overrides {
        let overrides = LimitOverrides::from_yaml(inline)
            .map_err(|err| format!("Invalid --limit-overrides: {err}"))?;
        limits.extend(overrides);
    }

    Ok(limits)
}
