//! End-to-end tests for the log analysis pipeline live in `tests/`.
