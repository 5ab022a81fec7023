use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use leafcare::{Config, Session};

#[derive(Parser)]
#[command(name = "leafcare")]
#[command(about = "Plant-care assistant client")]
struct Cli {
    /// Config file
    #[arg(long, default_value = "leafcare.toml")]
    config: PathBuf,

    /// Access token (overrides LEAFCARE_TOKEN and the config file)
    #[arg(long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format a saved message or notes file
    Render {
        /// Input text file
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "ansi")]
        format: Format,
    },
    /// Log in and print the access token
    Login {
        email: String,

        #[arg(long)]
        password: String,
    },
    /// Ask the assistant a question
    Chat { question: String },
    /// List plants and their latest diagnosis
    Plants,
    /// List discussion threads
    Discussions,
}

#[derive(ValueEnum, Copy, Clone)]
enum Format {
    Ansi,
    Html,
    Json,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config);

    match cli.command {
        Command::Render {
            input,
            output,
            format,
        } => {
            let text = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let blocks = leafcare::format_message(&text);
            let rendered = match format {
                Format::Ansi => leafcare::blocks_to_ansi(&blocks),
                Format::Html => leafcare::blocks_to_html(&blocks),
                Format::Json => serde_json::to_string_pretty(&blocks)?,
            };
            match output {
                Some(path) => fs::write(&path, rendered)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => println!("{rendered}"),
            }
        }
        Command::Login { email, password } => {
            let mut session = Session::from_config(&config, cli.token);
            let token = session.login(&email, &password).await?;
            println!("{token}");
        }
        Command::Chat { question } => {
            let session = Session::from_config(&config, cli.token);
            let answer = session.ask(&question).await?;
            println!("{}", leafcare::message_to_ansi(&answer));
        }
        Command::Plants => {
            let session = Session::from_config(&config, cli.token);
            for plant in session.plants().await? {
                println!("{}: {}", plant.name, plant.description);
                if let Some(latest) = plant.diagnosis.last() {
                    println!("  {} (confidence {})", latest.result, latest.confidence);
                    if !latest.notes.is_empty() {
                        println!("{}", leafcare::message_to_ansi(&latest.notes));
                    }
                }
            }
        }
        Command::Discussions => {
            let session = Session::from_config(&config, cli.token);
            for discussion in session.discussions().await? {
                println!(
                    "{} (by {}, {} replies)",
                    discussion.title,
                    discussion.username,
                    discussion.replies.len()
                );
                println!("{}", leafcare::message_to_ansi(&discussion.content));
                println!();
            }
        }
    }

    Ok(())
}
