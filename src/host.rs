pub(crate) mod collab;
pub(crate) mod headless;
