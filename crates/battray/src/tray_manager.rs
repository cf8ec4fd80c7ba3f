//! System tray icon with battery-state updates.
//!
//! Manages the tray icon, its tooltip, and a context menu with an optional
//! "Run click command" entry and Exit.

use crate::{AppError, AppResult, IconLocator, TrayUpdate, render_glyph};

use battray_core::{BatteryState, IconName, IconTheme, icon_name};

use std::{collections::HashMap, panic::Location, path::Path};

use error_location::ErrorLocation;
use image::RgbaImage;
use tracing::{debug, info, instrument, warn};
use tray_icon::menu::{Menu, MenuId, MenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    locator: IconLocator,
    icons: HashMap<String, Icon>,
    current_token: Option<String>,
    click_item_id: Option<MenuId>,
    exit_item_id: MenuId,
}

impl TrayManager {
    /// Create the tray icon showing an unknown battery.
    ///
    /// The "Run click command" entry is only added when `click_command` is set.
    #[track_caller]
    #[instrument(skip(locator))]
    pub fn new(locator: IconLocator, theme: IconTheme, click_command: bool) -> AppResult<Self> {
        let menu = Menu::new();

        let click_item = click_command.then(|| MenuItem::new("Run click command", true, None));
        let exit_item = MenuItem::new("Exit", true, None);

        if let Some(click_item) = &click_item {
            menu.append(click_item).map_err(|e| AppError::TrayError {
                reason: format!("Failed to add click command menu: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        menu.append(&exit_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add exit menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let initial = icon_name(BatteryState::Unknown, 0, theme);
        let mut icons = HashMap::new();
        let icon = Self::load_icon(&locator, &initial)?;
        icons.insert(initial.token().to_string(), icon.clone());

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip("battray")
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            locator,
            icons,
            current_token: Some(initial.token().to_string()),
            click_item_id: click_item.map(|item| item.id().clone()),
            exit_item_id: exit_item.id().clone(),
        })
    }

    /// Replace the icon (when its token changed) and the tooltip.
    #[track_caller]
    #[instrument(skip(self, update), fields(icon = %update.icon))]
    pub fn update(&mut self, update: &TrayUpdate) -> AppResult<()> {
        let token = update.icon.token();

        if self.current_token.as_deref() != Some(token) {
            let icon = self.icon_for(&update.icon)?;

            self.tray_icon
                .set_icon(Some(icon))
                .map_err(|e| AppError::TrayError {
                    reason: format!("Failed to update icon: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            self.current_token = Some(token.to_string());
        }

        self.tray_icon
            .set_tooltip(Some(&update.tooltip))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    /// Cached icon for `name`, loading it on first use.
    #[track_caller]
    fn icon_for(&mut self, name: &IconName) -> AppResult<Icon> {
        if let Some(icon) = self.icons.get(name.token()) {
            return Ok(icon.clone());
        }

        let icon = Self::load_icon(&self.locator, name)?;
        self.icons.insert(name.token().to_string(), icon.clone());

        Ok(icon)
    }

    /// Load the installed icon file, or draw a glyph when there is none.
    #[track_caller]
    fn load_icon(locator: &IconLocator, name: &IconName) -> AppResult<Icon> {
        let image = match locator.find(name.token()) {
            Some(path) => match Self::decode_file(&path) {
                Ok(image) => image,
                Err(e) => {
                    warn!(path = %path.display(), error = ?e, "Unreadable icon file, using built-in glyph");
                    render_glyph(name)
                }
            },
            None => {
                debug!(icon = %name, "No icon file installed, using built-in glyph");
                render_glyph(name)
            }
        };

        let (width, height) = (image.width(), image.height());

        Icon::from_rgba(image.into_raw(), width, height).map_err(|e| AppError::IconError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn decode_file(path: &Path) -> AppResult<RgbaImage> {
        let image = image::open(path).map_err(|e| AppError::IconError {
            reason: format!("Failed to decode {}: {}", path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(image.into_rgba8())
    }

    /// Get the click command menu item ID, if that entry exists.
    pub fn click_item_id(&self) -> Option<&MenuId> {
        self.click_item_id.as_ref()
    }

    /// Get the exit menu item ID.
    pub fn exit_item_id(&self) -> &MenuId {
        &self.exit_item_id
    }
}
