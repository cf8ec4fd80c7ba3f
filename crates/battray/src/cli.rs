use clap::Parser;

/// A lightweight battery icon that sits in your system tray.
#[derive(Debug, Default, Parser)]
#[command(name = "battray", version, allow_negative_numbers = true)]
pub struct Cli {
    /// Display debug information
    #[arg(short, long)]
    pub debug: bool,

    /// Set update interval (in seconds)
    #[arg(short, long, value_name = "SECONDS")]
    pub update_interval: Option<i64>,

    /// Set icon type ('standard', 'notification' or 'gpm')
    #[arg(short, long = "icon-type", value_name = "TYPE")]
    pub icon_type: Option<String>,

    /// Set low battery level (in percent)
    #[arg(short, long, value_name = "PERCENT")]
    pub low_level: Option<i64>,

    /// Set critical battery level (in percent)
    #[arg(short = 'r', long, value_name = "PERCENT")]
    pub critical_level: Option<i64>,

    /// Command to execute when low battery level is reached
    #[arg(short = 'o', long, value_name = "COMMAND")]
    pub command_low_level: Option<String>,

    /// Command to execute when critical battery level is reached
    #[arg(short = 'c', long, value_name = "COMMAND")]
    pub command_critical_level: Option<String>,

    /// Command to execute when left clicking on tray icon
    #[arg(short = 'x', long, value_name = "COMMAND")]
    pub command_left_click: Option<String>,

    /// Hide the notification popups
    #[arg(short = 'n', long)]
    pub hide_notification: bool,

    /// List available icon types
    #[arg(short = 't', long)]
    pub list_icon_types: bool,
}
