// File: crates/sunburst-core/build.rs
// Summary: Link the Windows registry API that Skia's font manager and ICU data lookup call into.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    #[cfg(target_os = "windows")]
    println!("cargo:rustc-link-lib=advapi32");
}
