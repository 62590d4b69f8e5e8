pub(crate) mod cache;
pub(crate) mod layout;
pub(crate) mod probe;
