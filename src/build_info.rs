//! Compile-time build information, reported by `running-boy --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string: `running-boy <date> (<commit>)`.
pub fn version_line() -> String {
    format!(
        "{} {} ({})",
        env!("CARGO_PKG_NAME"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
