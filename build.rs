use std::env;
use std::path::PathBuf;

#[cfg(feature = "c_bubble")]
fn build_and_link_c_bubble() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let c_bubble_path = manifest_dir
        .join("src")
        .join("c_bubble")
        .join("c_bubble.c")
        .canonicalize()
        .unwrap();

    // Tell Cargo that if the given file changes, to rerun this build script.
    println!("cargo:rerun-if-changed={}", c_bubble_path.display());

    cc::Build::new()
        .file(&c_bubble_path)
        .opt_level(2)
        .flag_if_supported("-std=c11")
        .warnings(true)
        .extra_warnings(true)
        .compile("c_bubble");
}

#[cfg(not(feature = "c_bubble"))]
fn build_and_link_c_bubble() {}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let build_rs_path = manifest_dir.join("build.rs").canonicalize().unwrap();

    // By default without this line, cargo re-runs the build script for all source changes.
    println!("cargo:rerun-if-changed={}", build_rs_path.display());

    build_and_link_c_bubble();
}
