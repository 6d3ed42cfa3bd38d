//! File system locations used by the scorekeeper.

use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

pub const APP_DIR: &str = "summer-league";

fn base_or_home(base: Option<PathBuf>, fallback: &str) -> PathBuf {
    base.unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(fallback);
        home
    })
}

/// Path: ~/.config/summer-league/config.toml
pub fn config_file_path() -> PathBuf {
    base_or_home(dirs::config_dir(), ".config")
        .join(APP_DIR)
        .join("config.toml")
}

/// Path: ~/.local/share/summer-league
pub fn data_dir() -> PathBuf {
    base_or_home(dirs::data_dir(), ".local/share").join(APP_DIR)
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}
