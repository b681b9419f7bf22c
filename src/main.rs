use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use summail::{Config, Error, Message, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "summail")]
#[command(version, about = "Render a meeting summary as an HTML email")]
struct Cli {
    /// Input summary file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document title, also used as the message subject
    #[arg(short, long)]
    title: Option<String>,

    /// TOML config file
    #[arg(short, long, default_value = "summail.toml")]
    config: PathBuf,

    /// What to produce
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Message recipient (repeatable, used with --format message)
    #[arg(long = "to", value_name = "ADDRESS")]
    to: Vec<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Complete HTML document
    Html,
    /// Plain-text alternative with tags stripped
    Text,
    /// JSON mail payload with recipients, subject, html and text
    Message,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(error) = run(cli) {
        tracing::error!(%error, "summail failed");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let summary = read_input(cli.input.as_ref())?;
    let title = cli.title.as_deref();

    let rendered = match cli.format {
        Format::Html => summail::render_with_config(&summary, title, &config),
        Format::Text => {
            summail::plain_text(&summail::render_with_config(&summary, title, &config))
        }
        Format::Message => {
            let message = Message::compose(cli.to, title, &summary, &config);
            serde_json::to_string_pretty(&message)?
        }
    };

    write_output(cli.output.as_ref(), &rendered)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(Error::Stdin)?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&PathBuf>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, rendered).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "wrote output");
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}").map_err(Error::Stdout)
        }
    }
}
