mod engine_tests;
mod fixtures;
