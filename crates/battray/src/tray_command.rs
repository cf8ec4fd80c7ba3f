use battray_core::IconName;

/// New icon and tooltip for the tray.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayUpdate {
    /// Icon to display.
    pub icon: IconName,
    /// Tooltip text, one or two lines.
    pub tooltip: String,
}

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all tray mutations and process lifecycle events flow through this enum.
#[derive(Debug, Clone)]
pub enum TrayCommand {
    /// Replace the tray icon and tooltip.
    Update(TrayUpdate),
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}
