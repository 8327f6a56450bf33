//! Blogkit CLI — Render embed tags and turn messages into Jekyll posts.
//!
//! Usage:
//!   blogkit render <TEMPLATE>          Render a page with the embed tags
//!   blogkit embed <TAG> <ARG>          Print a single embed snippet
//!   blogkit post <MESSAGE>             Build and write a post from a message
//!   blogkit config                     Show the effective configuration

use std::path::PathBuf;

use blogkit_common::AppConfig;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "blogkit",
    about = "Video embeds and message-driven posts for Jekyll sites",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a Liquid template with the video and youtube tags
    Render {
        /// Template file
        template: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Template variable as key=value (repeatable)
        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,
    },

    /// Print the HTML for one embed tag
    Embed {
        /// Tag to render
        #[arg(value_enum)]
        tag: commands::embed::EmbedTag,

        /// Tag argument (asset path or video id)
        #[arg(default_value = "")]
        argument: String,
    },

    /// Build a post from a message file and write it into a site
    Post {
        /// Message file: title, `===`, meta, `===`, body
        message: PathBuf,

        /// Further message files appended to the post body (repeatable)
        #[arg(long)]
        append: Vec<PathBuf>,

        /// Media for the n-th message, `.webp` or `.mp4` (repeatable)
        #[arg(long)]
        asset: Vec<PathBuf>,

        /// Author used when the message names none (defaults to $USER)
        #[arg(long)]
        author: Option<String>,

        /// Site root directory
        #[arg(short, long, default_value = ".")]
        site: PathBuf,

        /// Skip fetching page titles for link previews
        #[arg(long)]
        no_previews: bool,

        /// Print the preview without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    blogkit_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Render {
            template,
            output,
            vars,
        } => commands::render::run(template, output, vars),
        Commands::Embed { tag, argument } => commands::embed::run(tag, argument),
        Commands::Post {
            message,
            append,
            asset,
            author,
            site,
            no_previews,
            dry_run,
        } => {
            commands::post::run(
                &config,
                commands::post::PostArgs {
                    message,
                    append,
                    assets: asset,
                    author,
                    site,
                    fetch_previews: !no_previews,
                    dry_run,
                },
            )
            .await
        }
        Commands::Config => commands::config::run(&config),
    }
}
