// Aggregates per-module integration suites
mod _support;
mod analysis;
mod cli;
mod load;
mod measure;
mod render;

#[path = "mod_lib.rs"]
mod lib_tests;
