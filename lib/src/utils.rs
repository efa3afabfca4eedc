use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory holding the persisted store
pub fn get_default_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("LINKSHELF_DATA_DIR") {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(path).join("linkshelf");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local/share/linkshelf");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("linkshelf");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("linkshelf");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/linkshelf");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("linkshelf");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Random 128-bit identifier, safe under back-to-back inserts
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

/// Lower-case `name` and collapse each whitespace run into a single hyphen.
///
/// Leading and trailing whitespace is not stripped, so `" a "` becomes `"-a-"`.
pub fn slugify(name: &str) -> String {
    whitespace_run()
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}
