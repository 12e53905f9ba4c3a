//! World implementations for the harness runner.

pub mod floors;
pub mod grid;
pub mod hex;
