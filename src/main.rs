use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use flexta::Config;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Lightweight project creation", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.flexta/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project from a template
    New {
        /// Project name (becomes the folder name)
        name: String,

        /// Folder to create the project in (default: last used folder, then current dir)
        #[arg(short, long)]
        location: Option<String>,

        /// Template set to use (see `flexta templates`)
        #[arg(short, long)]
        template: Option<String>,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List or edit recent projects
    Recent {
        #[command(subcommand)]
        command: Option<RecentCommands>,

        /// Maximum number of entries (default from config, 10)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show or change the remembered project folder
    Folder {
        #[command(subcommand)]
        command: Option<FolderCommands>,
    },

    /// List available template sets
    Templates {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum RecentCommands {
    /// Record a project as opened now
    Add {
        /// Project path
        path: String,
    },

    /// Replace the whole list
    Set {
        /// Project paths
        paths: Vec<String>,
    },

    /// Forget all recent projects
    Clear,
}

#[derive(Subcommand)]
enum FolderCommands {
    /// Remember a folder for the next `flexta new`
    Set {
        /// Folder path
        folder: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("FLEXTA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let exit_code = match cli.command {
        Commands::New {
            name,
            location,
            template,
            json,
        } => commands::new::execute(&config, &name, location, template, json)?,
        Commands::Recent {
            command,
            limit,
            json,
        } => match command {
            None => commands::recent::list(&config, limit, json)?,
            Some(RecentCommands::Add { path }) => commands::recent::add(&config, &path)?,
            Some(RecentCommands::Set { paths }) => commands::recent::set(&config, paths)?,
            Some(RecentCommands::Clear) => commands::recent::clear(&config)?,
        },
        Commands::Folder { command } => match command {
            None => commands::folder::show(&config)?,
            Some(FolderCommands::Set { folder }) => commands::folder::set(&config, &folder)?,
        },
        Commands::Templates { json } => commands::templates::execute(&config, json)?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_new() {
        let cli = Cli::try_parse_from(["flexta", "new", "Demo", "--location", "/tmp", "--json"])
            .unwrap();
        match cli.command {
            Commands::New {
                name,
                location,
                template,
                json,
            } => {
                assert_eq!(name, "Demo");
                assert_eq!(location.as_deref(), Some("/tmp"));
                assert!(template.is_none());
                assert!(json);
            }
            _ => panic!("expected new"),
        }
    }

    #[test]
    fn test_parse_recent_set() {
        let cli = Cli::try_parse_from(["flexta", "recent", "set", "/a", "/b"]).unwrap();
        match cli.command {
            Commands::Recent {
                command: Some(RecentCommands::Set { paths }),
                ..
            } => assert_eq!(paths, vec!["/a", "/b"]),
            _ => panic!("expected recent set"),
        }
    }

    #[test]
    fn test_parse_recent_list_with_limit() {
        let cli = Cli::try_parse_from(["flexta", "recent", "--limit", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Recent {
                command: None,
                limit: Some(3),
                json: false
            }
        ));
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["flexta", "folder", "--config", "/etc/flexta.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/flexta.toml")));
    }

    #[test]
    fn test_new_requires_name() {
        assert!(Cli::try_parse_from(["flexta", "new"]).is_err());
    }
}
