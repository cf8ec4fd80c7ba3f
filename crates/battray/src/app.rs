use crate::{
    AppCommand, AppError, AppResult, LevelCommand, NotificationRequest, NotificationStream,
    Notifier, Presentation, TrayCommand, config::Config, spawn_command,
};

use battray_core::{BatteryEngine, PowerSource};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use notify_rust::{Timeout, Urgency};
use tao::event_loop::EventLoopProxy;
use tokio::{sync::mpsc, time::MissedTickBehavior};
use tracing::{debug, error, info, instrument, warn};
use tray_icon::{
    MouseButton, MouseButtonState, TrayIconEvent,
    menu::{MenuEvent, MenuId},
};
use uuid::Uuid;

/// Main application state.
///
/// Runs on the async runtime thread. Polls the power source on a fixed
/// interval and sends tray updates back to the main thread via
/// `tray_proxy` because `TrayIcon` is `!Send` and must remain on the UI
/// thread.
pub struct App {
    pub(crate) config: Config,
    pub(crate) engine: BatteryEngine,
    pub(crate) power_source: Box<dyn PowerSource>,
    pub(crate) notifier: Notifier,
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) command_tx: mpsc::Sender<AppCommand>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) click_menu_id: Option<MenuId>,
    pub(crate) exit_menu_id: MenuId,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self), fields(source = self.power_source.name()))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("battray starting");

        // Menu and tray icon events arrive on blocking crossbeam receivers.
        // One persistent blocking task each forwards them into the select
        // loop; dropping the receiving half ends the task on the next event.
        let (menu_event_tx, mut menu_event_rx) = mpsc::channel(32);
        let menu_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if menu_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        let (icon_event_tx, mut icon_event_rx) = mpsc::channel(32);
        let icon_handle = tokio::task::spawn_blocking(move || {
            let receiver = TrayIconEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if icon_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        let mut ticker = tokio::time::interval(self.config.update_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.poll_battery() {
                        error!(error = ?e, "Failed to publish battery status");
                    }
                }

                Some(event) = menu_event_rx.recv() => {
                    if let Err(e) = self.handle_menu_event(event).await {
                        error!(error = ?e, "Failed to handle tray menu event");
                    }
                }

                Some(event) = icon_event_rx.recv() => {
                    self.handle_icon_event(event);
                }

                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::LevelCommandDue { level, session_id } => {
                            self.run_level_command(level, session_id);
                        }
                        AppCommand::Shutdown => {
                            info!("Shutdown requested");
                            break;
                        }
                    }
                }
            }
        }

        drop(menu_event_rx);
        drop(icon_event_rx);

        for (name, handle) in [("Menu", menu_handle), ("Tray icon", icon_handle)] {
            match tokio::time::timeout(Duration::from_secs(1), handle).await {
                Ok(Ok(())) => info!("{} event forwarder stopped cleanly", name),
                Ok(Err(e)) => error!(error = ?e, "{} event forwarder task panicked", name),
                Err(_) => info!(
                    "{} event forwarder did not stop within timeout, \
                         will be cleaned up on exit",
                    name
                ),
            }
        }

        if let Err(e) = self.send_tray(TrayCommand::Shutdown) {
            error!(error = ?e, "Failed to request tray shutdown");
        }

        info!("battray shut down successfully");

        Ok(())
    }

    /// Poll once and publish the result.
    #[instrument(skip(self))]
    fn poll_battery(&mut self) -> AppResult<()> {
        let report = self.engine.poll(self.power_source.as_mut());
        let presentation = Presentation::from_report(&report, self.config.icon_theme);

        for request in &presentation.notifications {
            self.notify(request);
        }

        if report.crossed_low {
            self.schedule_level_command(LevelCommand::Low, report.session_id);
        }

        if report.crossed_critical {
            self.schedule_level_command(LevelCommand::Critical, report.session_id);
        }

        self.send_tray(TrayCommand::Update(presentation.tray))
    }

    /// Run the level command after its delay, unless unconfigured.
    fn schedule_level_command(&self, level: LevelCommand, session_id: Option<Uuid>) {
        let Some(command) = self.config.command_for(level) else {
            return;
        };

        warn!(
            session_id = ?session_id,
            "Spawning {} battery level command in {} seconds: {}",
            level.label(),
            level.delay().as_secs(),
            command
        );

        let command_tx = self.command_tx.clone();

        tokio::spawn(async move {
            tokio::time::sleep(level.delay()).await;

            if let Err(e) = command_tx
                .send(AppCommand::LevelCommandDue { level, session_id })
                .await
            {
                error!(error = ?e, "Failed to deliver deferred level command");
            }
        });
    }

    /// Re-check the battery and spawn the level command if its discharging
    /// session is still the current one.
    #[instrument(skip(self))]
    fn run_level_command(&mut self, level: LevelCommand, session_id: Option<Uuid>) {
        let Some(command) = self.config.command_for(level).map(str::to_string) else {
            return;
        };

        let sample = self.power_source.read();
        if !self.engine.level_command_due(session_id, &sample) {
            info!(
                current_session_id = ?self.engine.session_id(),
                "Skipping {} battery level command, discharging session ended",
                level.label()
            );
            return;
        }

        if let Err(e) = spawn_command(&command) {
            error!(error = ?e, "Cannot spawn {} battery level command", level.label());

            self.notify(&NotificationRequest {
                stream: level.failure_stream(),
                summary: level.failure_summary().to_string(),
                body: Some(command),
                timeout: Timeout::Never,
                urgency: Urgency::Critical,
            });
        }
    }

    /// Spawn the left-click command, if configured.
    #[instrument(skip(self))]
    fn run_click_command(&mut self) {
        let Some(command) = self.config.command_left_click.clone() else {
            debug!("No left click command configured");
            return;
        };

        if let Err(e) = spawn_command(&command) {
            error!(error = ?e, "Cannot spawn left click command");

            self.notify(&NotificationRequest {
                stream: NotificationStream::ClickCommandFailure,
                summary: "Cannot spawn left click command!".to_string(),
                body: Some(command),
                timeout: Timeout::Default,
                urgency: Urgency::Critical,
            });
        }
    }

    /// Handle tray menu events.
    #[instrument(skip(self))]
    async fn handle_menu_event(&mut self, event: MenuEvent) -> AppResult<()> {
        let event_id = &event.id;

        if self.click_menu_id.as_ref() == Some(event_id) {
            self.run_click_command();
        } else if *event_id == self.exit_menu_id {
            info!("Exit requested from tray menu");
            self.command_tx
                .send(AppCommand::Shutdown)
                .await
                .map_err(|e| AppError::ChannelSendFailed {
                    message: format!("Failed to send shutdown command: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        Ok(())
    }

    /// Left click (release) on the tray icon runs the click command.
    fn handle_icon_event(&mut self, event: TrayIconEvent) {
        if let TrayIconEvent::Click {
            button: MouseButton::Left,
            button_state: MouseButtonState::Up,
            ..
        } = event
        {
            self.run_click_command();
        }
    }

    fn notify(&mut self, request: &NotificationRequest) {
        if let Err(e) = self.notifier.show(request) {
            error!(error = ?e, "Failed to show notification");
        }
    }

    #[track_caller]
    fn send_tray(&self, command: TrayCommand) -> AppResult<()> {
        self.tray_proxy
            .send_event(command)
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Tray event loop closed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
