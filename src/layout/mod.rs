pub(crate) mod partition;
pub(crate) mod settings;
pub(crate) mod solver;
pub(crate) mod structure;
