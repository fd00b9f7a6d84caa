// File: crates/cma-chart/build.rs
// Summary: Links the Windows registry API that Skia's font manager calls (RegOpenKeyExW and friends).

fn main() {
    // build scripts run on the host; ask cargo about the target instead of using cfg!
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
