use std::env;
use std::fs;
use std::path::Path;

/// Claves que config.rs lee con option_env!()
const CONFIG_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "TICKET_VALIDITY_MINUTES",
    "PRESS_COOLDOWN_MS",
    "CLOCK_TICK_MS",
    "ACCOUNT_EMAIL",
];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for (key, value) in contents.lines().filter_map(parse_line) {
                if !CONFIG_KEYS.contains(&key) {
                    println!("cargo:warning=Clave desconocida en .env: {}", key);
                    continue;
                }
                // Las variables del entorno real tienen prioridad sobre .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values (see .env.example).");
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets/catalog.json");
}

/// Parsear una línea KEY=VALUE (ignora comentarios y líneas vacías)
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}
