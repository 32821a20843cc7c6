// LRU Harness Library

pub mod scenarios;
pub mod stats;
pub mod tester;
