//! battray: a lightweight battery status icon for the system tray.

mod app;
mod app_command;
mod cli;
mod command_spawner;
mod config;
mod error;
mod icon_locator;
mod icon_renderer;
mod level_command;
mod notifier;
mod presentation;
mod tray_command;
mod tray_manager;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    cli::Cli,
    command_spawner::spawn_command,
    error::{AppError, Result as AppResult},
    icon_locator::IconLocator,
    icon_renderer::render_glyph,
    level_command::LevelCommand,
    notifier::{NotificationRequest, NotificationStream, Notifier},
    presentation::Presentation,
    tray_command::{TrayCommand, TrayUpdate},
    tray_manager::TrayManager,
};

use crate::config::Config;

use std::time::Duration;

use battray_core::{BatteryEngine, IconTheme, PowerSource, open_power_source};
use clap::Parser;
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::mpsc;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let locator = IconLocator::new();

    if cli.list_icon_types {
        print_icon_types(&locator);
        return;
    }

    let config = Config::from_cli(&cli, &locator);

    let power_source = match open_source() {
        Ok(source) => source,
        Err(e) => {
            error!("No power management support: {:?}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new(
        locator,
        config.icon_theme,
        config.command_left_click.is_some(),
    ) {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    // Moved into the runtime thread once the event loop has started.
    let mut startup = Some((config, power_source));

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => match cmd {
                TrayCommand::Update(update) => {
                    if let Err(e) = tray_manager.update(&update) {
                        error!(error = ?e, "Failed to update tray icon");
                    }
                }
                TrayCommand::Shutdown => {
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            },
            Event::NewEvents(StartCause::Init) => {
                let Some((config, power_source)) = startup.take() else {
                    return;
                };

                let tray_proxy = tray_proxy.clone();
                let click_menu_id = tray_manager.click_item_id().cloned();
                let exit_menu_id = tray_manager.exit_item_id().clone();

                // Spawn tokio runtime on separate thread.
                // TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let (command_tx, command_rx) = mpsc::channel(32);

                        let app = App {
                            engine: BatteryEngine::new(config.levels),
                            notifier: Notifier::new(config.hide_notification),
                            config,
                            power_source,
                            tray_proxy,
                            command_tx,
                            command_rx,
                            click_menu_id,
                            exit_menu_id,
                        };

                        if let Err(e) = app.run().await {
                            error!(error = ?e, "App error");
                        }
                    });

                    // Event forwarders may still be parked on their receivers.
                    rt.shutdown_timeout(Duration::from_secs(1));
                });
            }
            _ => {}
        }
    });
}

/// `RUST_LOG` wins; otherwise info, or debug with `--debug`.
fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "battray=debug,battray_core=debug"
    } else {
        "battray=info,battray_core=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn open_source() -> AppResult<Box<dyn PowerSource>> {
    Ok(open_power_source()?)
}

fn print_icon_types(locator: &IconLocator) {
    println!("List of available icon types:");

    for theme in IconTheme::ALL {
        let availability = if locator.has_theme(theme) {
            "available"
        } else {
            "unavailable"
        };
        println!("{:<16}{}", theme.name(), availability);
    }
}
