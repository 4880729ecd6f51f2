//! Shared test utilities.

use std::path::Path;

use usacloud_update::core::FormatterConfig;
use usacloud_update::transform::{transform_script, TransformedLine};

pub fn transform_fixture(path: &Path) -> Vec<TransformedLine> {
    let source = std::fs::read_to_string(path).expect("fixture file exists");
    transform_script(&source, FormatterConfig { color_enabled: false, language: usacloud_update::core::Language::En })
}
