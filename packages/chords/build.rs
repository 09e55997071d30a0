use std::env;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("catalogs.rs");

    let library_dir = Path::new(&manifest_dir).join("library");

    let mut entries: Vec<(String, String)> = Vec::new();
    if library_dir.exists() {
        for entry in WalkDir::new(&library_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "yaml"))
        {
            let path = entry.path();
            let relative = path.strip_prefix(&library_dir).unwrap().with_extension("");

            // "standard/dark", whatever the host separator is
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");

            entries.push((name, path.to_string_lossy().into_owned()));
        }
    }
    entries.sort();

    let mut code = String::new();
    code.push_str("/// Embedded catalog files as (\"<tuning>/<vibe>\", yaml)\n");
    code.push_str("pub static CATALOGS: &[(&str, &str)] = &[\n");
    for (name, path) in &entries {
        code.push_str(&format!("    ({:?}, include_str!({:?})),\n", name, path));
    }
    code.push_str("];\n");

    fs::write(&dest_path, code).unwrap();

    println!("cargo:rerun-if-changed=library");
}
