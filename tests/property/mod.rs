//! Property-based tests for the local synthesis engine

mod synthesis_invariants;
