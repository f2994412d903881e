//! Integration tests for the Caelum gateway live under `tests/`
