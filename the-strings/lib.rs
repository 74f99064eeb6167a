use smartstring::{LazyCompact, SmartString};

pub mod affix;
pub mod case;
pub mod codec;
pub mod distance;
pub mod escape;
pub mod humanize;
pub mod pad;
pub mod segment;
pub mod slug;
pub mod template;
pub mod truncate;
pub mod validate;
pub mod wrap;

pub type Tendril = SmartString<LazyCompact>;
