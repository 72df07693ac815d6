use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Cargar variables de configuración del widget desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, las variables ya definidas en el entorno ganan
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=MAPS_CONTAINER_SELECTOR");
    println!("cargo:rerun-if-env-changed=MAPS_MARKER_SELECTOR");
    println!("cargo:rerun-if-env-changed=DEFAULT_MAP_CENTER_LAT");
    println!("cargo:rerun-if-env-changed=DEFAULT_MAP_CENTER_LNG");
    println!("cargo:rerun-if-env-changed=DEFAULT_MAP_ZOOM");
    println!("cargo:rerun-if-env-changed=MAPS_LOG_LEVEL");
}
