#[path = "../common/mod.rs"]
mod common;

mod settings_tests;
mod startup_tests;
