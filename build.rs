use std::fs;

fn main() {
    // Reject a malformed bundled config at build time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    match content.parse::<toml::Table>() {
        Ok(table) => {
            for section in ["highlight", "headings", "code"] {
                if !table.contains_key(section) {
                    panic!("default_config.toml is missing the [{}] section", section);
                }
            }
        }
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    }
}
