use clap::Parser;

use cosmic::{
    Application,
    app::Settings,
    cosmic_config::{self, CosmicConfigEntry},
    iced::Limits,
};

mod api;

mod constants;

mod localize;

mod record;

mod state;

mod ui;

mod pages;

use cli::Cli;
mod cli;

use config::{CONFIG_VERSION, Config};
mod config;

mod key_bind;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    localize::localize();

    let cli = Cli::parse();

    let (config_handler, config) =
        match cosmic_config::Config::new(app::App::APP_ID, CONFIG_VERSION) {
            Ok(config_handler) => {
                let config = match Config::get_entry(&config_handler) {
                    Ok(ok) => ok,
                    Err((errs, config)) => {
                        log::info!("errors loading config: {:?}", errs);
                        config
                    }
                };
                (Some(config_handler), config)
            }
            Err(err) => {
                log::error!("failed to create config handler: {}", err);
                (None, Config::default())
            }
        };

    let mut settings = Settings::default();
    settings = settings.theme(config.app_theme.theme());
    settings = settings.size_limits(Limits::NONE.min_width(420.0).min_height(300.0));

    let flags = cli::Flags {
        api_url_override: cli.api_url,
        config_handler,
        config,
        selection_tx: None,
    };

    cosmic::app::run::<app::App>(settings, flags)?;

    Ok(())
}

mod message;
pub use message::{Action, Message};

mod app;
