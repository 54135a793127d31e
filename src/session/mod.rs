//! Application-facing session: the generator object, presets, randomizers and history.

pub(crate) mod generator;
pub(crate) mod history;
pub(crate) mod presets;
pub(crate) mod random;
