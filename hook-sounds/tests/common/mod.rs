pub mod assertions;
pub mod fixtures;
pub mod logging;

pub use assertions::{assert_contains, assert_path_exists};
pub use fixtures::{SuiteTree, hook_sounds_command};
pub use logging::init_test_logging;
