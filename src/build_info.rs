//! Commit and date baked in by `build.rs`.
//!
//! `BUILD_VERSION` reads `0.1.0 (abc1234 2026-01-01)` and backs `arcade --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
