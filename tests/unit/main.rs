//! Unit test suite entry point.

mod ats_tests;
mod predicate_tests;
mod storage_tests;
