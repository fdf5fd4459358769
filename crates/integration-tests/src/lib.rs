//! End-to-end tests for triage live under `tests/`
