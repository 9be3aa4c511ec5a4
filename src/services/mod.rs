pub(crate) mod collector;
pub(crate) mod report;
pub(crate) mod scan;
