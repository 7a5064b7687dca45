use std::env;
use std::fs;
use std::path::Path;

// Place config.toml next to the binary so the runtime lookup finds it.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    let out_path = Path::new(&out_dir);
    let Some(target_dir) = out_path.ancestors().find(|p| p.ends_with(&profile)) else {
        return;
    };

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root not found");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        let _ = fs::copy(&source_config, target_dir.join("config.toml"));
    }
}
