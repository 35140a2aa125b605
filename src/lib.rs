//! Workspace-level integration tests for polyfft.
//!
//! The tests live under `tests/`; this library target is intentionally empty.
