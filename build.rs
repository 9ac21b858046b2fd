use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=SCHEMA_RESOLVER_PATH_HINT");

    // Only bake a hint when one is given explicitly; an unconfigured build
    // must leave the default search path empty.
    let Ok(raw_hint) = env::var("SCHEMA_RESOLVER_PATH_HINT") else {
        return;
    };

    let joined = env::split_paths(&raw_hint)
        .map(|candidate| candidate.canonicalize().unwrap_or(candidate))
        .collect::<Vec<PathBuf>>();
    if let Ok(value) = env::join_paths(joined) {
        println!(
            "cargo:rustc-env=SCHEMA_RESOLVER_PATH_HINT={}",
            value.to_string_lossy()
        );
    }
}
