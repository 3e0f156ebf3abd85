use clap::Parser;
use cosmic::cosmic_config;
use tokio::sync::watch;

use crate::config::Config;
use crate::state::Selection;

#[derive(Debug, Default, Parser)]
#[command(about = "Admin console for the notification backend")]
pub struct Cli {
    /// Override the configured backend API URL for this run
    #[arg(long)]
    pub api_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Flags {
    pub api_url_override: Option<String>,
    pub config_handler: Option<cosmic_config::Config>,
    pub config: Config,
    /// Channel the parent/router collaborator can watch for selection
    /// changes; the console publishes (id, name) and knows nothing about the
    /// consumer
    pub selection_tx: Option<watch::Sender<Option<Selection>>>,
}
