//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the monitor core
//! against mock adapters.  All tests run on the host with no parallel
//! port, terminal or speaker required.

mod monitor_tests;
