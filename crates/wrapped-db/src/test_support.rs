//! Shared test utilities for wrapped-db unit tests.
