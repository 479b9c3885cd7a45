//! Photo + frame compositing.

pub(crate) mod composite;
pub(crate) mod compositor;
