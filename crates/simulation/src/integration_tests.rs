//! End-to-end tests for the recompute pipeline.
