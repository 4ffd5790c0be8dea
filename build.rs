use std::env;
use std::fs;
use std::path::Path;

/// Variables que `config.rs` lee con `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "SUPABASE_URL",
    "SUPABASE_ANON_KEY",
    "NAVER_MAP_KEY_ID",
    "DEFAULT_MAP_ZOOM",
    "ENABLE_LOGGING",
    "ENVIRONMENT",
];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found. Copy .env.example to .env and set SUPABASE_URL / SUPABASE_ANON_KEY / NAVER_MAP_KEY_ID.");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(c) => c,
        Err(e) => {
            println!("cargo:warning=Could not read .env: {}", e);
            return;
        }
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        // El entorno del proceso tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}

/// Parsear `KEY=VALUE`, ignorando comentarios y comillas alrededor del valor
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let value = value.trim().trim_matches('"').trim_matches('\'');
    Some((key.trim(), value))
}
