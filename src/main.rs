use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use chatmark::{Config, Error, Renderer};

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(about = "Render a chat message written in Markdown")]
struct Cli {
    /// Input message file, or `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What to emit
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// TOML config file
    #[arg(short, long, default_value = "chatmark.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Rendered HTML
    Html,
    /// Parsed blocks as JSON
    Blocks,
    /// Blocks with their inline spans as JSON
    Spans,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "chatmark=info",
        1 => "chatmark=debug",
        _ => "chatmark=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let content = read_input(&cli.input)?;
    let config = Config::load(&cli.config);
    tracing::debug!(bytes = content.len(), "read message");

    let rendered = match cli.format {
        Format::Html => {
            let mut html = Renderer::new(&config).render(&content).to_html();
            html.push('\n');
            html
        }
        Format::Blocks => serde_json::to_string_pretty(&chatmark::parse_blocks(&content))?,
        Format::Spans => {
            let blocks: Vec<serde_json::Value> = chatmark::parse_blocks(&content)
                .iter()
                .map(|block| {
                    let spans = if block.has_inline_content() {
                        chatmark::parse_inline(block.text())
                    } else {
                        Vec::new()
                    };
                    serde_json::json!({ "block": block, "spans": spans })
                })
                .collect();
            serde_json::to_string_pretty(&blocks)?
        }
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String, Error> {
    let read_error = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content).map_err(read_error)?;
        Ok(content)
    } else {
        fs::read_to_string(path).map_err(read_error)
    }
}
