//! Parameter model and its JSON contract.

pub(crate) mod codec;
pub(crate) mod model;
