//! Workspace root package.
//!
//! Exists so workspace-level tooling (the rusty-hook pre-commit hook) has a
//! package to attach to. The library lives in `crates/entrance-tracker-lib`
//! and the binary in `crates/entrance-tracker-cli`.
