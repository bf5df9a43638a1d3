pub(crate) mod controller;
pub(crate) mod gate;
pub(crate) mod slot;
pub(crate) mod state;
