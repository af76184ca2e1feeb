//! Rule table of the profile, deserialised from YAML.

mod field_rule;
mod layer_rule;
mod merge;
mod profile_config;

pub use field_rule::*;
pub use layer_rule::*;
pub use merge::*;
pub use profile_config::*;
