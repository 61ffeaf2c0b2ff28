pub(crate) mod compare;
pub(crate) mod quantities;
