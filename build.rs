use std::fs;

const REQUIRED_TABLES: &[&str] = &["document", "styles"];

fn main() {
    // The compiled-in defaults must parse and carry every section.
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    for name in REQUIRED_TABLES {
        if !table.get(*name).is_some_and(toml::Value::is_table) {
            panic!("default_config.toml is missing the [{}] table", name);
        }
    }
}
