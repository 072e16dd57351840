pub(crate) mod byte_source;
pub(crate) mod counting_sink;
