use std::sync::Arc;

use once_cell::sync::Lazy;

use super::model::{Settings, load_settings};

/// Settings from `COLWIRE_CONFIG` over the built-in defaults, read on first use.
pub static CONFIG: Lazy<Arc<Settings>> = Lazy::new(|| {
    Arc::new(load_settings().expect("Failed to load colwire configuration"))
});
