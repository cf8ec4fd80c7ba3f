//! Lookup of installed icon files.
//!
//! Icons are plain PNG files named after their token, e.g.
//! `battery-low-charging.png`. Directories are searched in order and the
//! first hit wins.

use battray_core::IconTheme;

use std::{
    env,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use tracing::{debug, instrument};

const ICON_EXTENSION: &str = "png";
const PIXMAPS_SUBDIR: &str = "share/pixmaps/battray";
const SYSTEM_PIXMAPS_DIR: &str = "/usr/share/pixmaps/battray";

/// Finds icon files by token across a list of directories.
#[derive(Debug, Clone)]
pub struct IconLocator {
    dirs: Vec<PathBuf>,
}

impl IconLocator {
    /// Search the user data directory, then the install prefix of the
    /// running executable, then the system pixmaps directory.
    #[instrument]
    pub fn new() -> Self {
        let mut dirs = Vec::new();

        if let Some(project_dirs) = ProjectDirs::from("", "", "battray") {
            dirs.push(project_dirs.data_dir().join("icons"));
        }

        if let Some(prefix) = install_prefix() {
            dirs.push(prefix.join(PIXMAPS_SUBDIR));
        }

        let system_dir = PathBuf::from(SYSTEM_PIXMAPS_DIR);
        if !dirs.contains(&system_dir) {
            dirs.push(system_dir);
        }

        debug!(dirs = ?dirs, "Icon search path");

        Self { dirs }
    }

    /// Search exactly `dirs`, in order.
    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Path of the icon file for `token`, if installed.
    pub fn find(&self, token: &str) -> Option<PathBuf> {
        let file_name = format!("{}.{}", token, ICON_EXTENSION);

        self.dirs
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|path| path.is_file())
    }

    /// Whether the theme's marker icon is installed.
    pub fn has_theme(&self, theme: IconTheme) -> bool {
        self.find(theme.marker_icon()).is_some()
    }
}

impl Default for IconLocator {
    fn default() -> Self {
        Self::new()
    }
}

/// `<prefix>` of an executable installed as `<prefix>/bin/battray`.
fn install_prefix() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let bin_dir = exe.parent()?;

    if bin_dir.file_name()? != "bin" {
        return None;
    }

    bin_dir.parent().map(Path::to_path_buf)
}
