//! EME/EMSA-PKCS1-v1_5 block construction and parsing.

pub(crate) mod builder;
pub(crate) mod parser;
