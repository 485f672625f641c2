use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let rustc = match rustc_version::version_meta() {
        Ok(meta) => meta.short_version_string,
        Err(e) => {
            println!("cargo:warning=could not query rustc version: {}", e);
            "rustc unknown".to_string()
        }
    };
    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=ENV_REPORT_RUSTC_VERSION={}", rustc);
    println!("cargo:rustc-env=ENV_REPORT_TARGET={}", target);
}
