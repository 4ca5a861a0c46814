//! Built-in scenarios for MPE.
//!
//! - `SimpleTag` - Pursuit/evasion with a hidden neutral faction
//! - `TagEnv` - Parallel episode driver around `SimpleTag`

mod config;
mod simple_tag;
mod tag_env;

pub use config::TagConfig;
pub use simple_tag::{boundary_penalty, SimpleTag, CAPTURE_REWARD};
pub use tag_env::TagEnv;

/// Names accepted by `make_scenario`
pub const SCENARIOS: &[&str] = &["simple_tag"];

/// Build a scenario by name
pub fn make_scenario(name: &str, config: TagConfig) -> mpe::Result<SimpleTag> {
    match name {
        "simple_tag" | "tag" => SimpleTag::new(config),
        other => Err(mpe::MpeError::InvalidConfig(format!(
            "unknown scenario '{other}'"
        ))),
    }
}
