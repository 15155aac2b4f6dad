pub(crate) mod annotation;
pub(crate) mod engine;
pub(crate) mod frame;
pub(crate) mod layer;
pub(crate) mod opts;
