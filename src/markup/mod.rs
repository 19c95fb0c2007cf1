pub(crate) mod parser;
pub(crate) mod scan;
pub(crate) mod serialize;
