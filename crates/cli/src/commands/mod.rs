pub(crate) mod listing;
pub(crate) mod serve;
