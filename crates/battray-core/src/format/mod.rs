mod icon;
mod text;

pub use {
    icon::{IconKind, IconName, IconTheme, icon_name},
    text::{battery_string, time_string, tooltip_string},
};
