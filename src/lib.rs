//! Test harness package for workspace-level golden tests.
