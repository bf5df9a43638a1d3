pub(crate) mod builtin;
pub(crate) mod property;
pub(crate) mod registry;
