//! Workspace root package. It hosts shared tooling (pre-commit hooks) only;
//! the library and CLI live under `crates/`.
