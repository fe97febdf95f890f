pub(crate) mod attributes;
pub(crate) mod search;
pub(crate) mod serve;
