use std::path::PathBuf;

pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_examples_dir() -> PathBuf {
    PathBuf::from("examples")
}

pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_port() -> u16 {
    8030
}

pub fn default_open_path() -> String {
    "/".to_string()
}

pub fn default_lang() -> String {
    "en".to_string()
}
