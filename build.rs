use std::env;

fn main() {
    // Version metadata shown by `howto -v`
    println!(
        "cargo:rustc-env=HOWTO_COMMIT={}",
        env::var("HOWTO_COMMIT").unwrap_or_else(|_| "unknown".to_string())
    );
    println!(
        "cargo:rustc-env=HOWTO_BUILD_DATE={}",
        env::var("HOWTO_BUILD_DATE").unwrap_or_else(|_| "unknown".to_string())
    );

    println!("cargo:rerun-if-env-changed=HOWTO_COMMIT");
    println!("cargo:rerun-if-env-changed=HOWTO_BUILD_DATE");

    // Enable static linking on Windows
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "windows"
        && env::var("CARGO_CFG_TARGET_ENV").unwrap_or_default() == "msvc"
    {
        println!("cargo:rustc-link-arg=/SUBSYSTEM:CONSOLE");
    }
}
