use std::path::PathBuf;

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (always ~/.config/stepnav, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    get_home_dir().join(".config").join("stepnav")
}

/// Get the config file path (always ~/.config/stepnav/config.toml, regardless of OS)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory the log file is written to
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir().unwrap_or_else(get_home_dir).join("stepnav")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_layout() {
        let path = get_config_path();
        assert!(path.ends_with(".config/stepnav/config.toml"));
    }

    #[test]
    fn test_log_dir_name() {
        assert!(get_log_dir().ends_with("stepnav"));
    }
}
