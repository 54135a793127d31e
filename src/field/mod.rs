//! Field & color engine: pixel coordinates plus parameters to base RGBA.

pub(crate) mod composite;
pub(crate) mod modes;
pub(crate) mod noise;
pub(crate) mod palette;
pub(crate) mod render;
pub(crate) mod transform;
