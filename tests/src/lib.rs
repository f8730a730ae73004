//! Integration-test helpers shared across the workspace test suite.
