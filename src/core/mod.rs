// src/core/mod.rs

//! The grammar machinery, free of I/O: tokens, matching, arity,
//! cardinality, errors, help and status wording.

pub mod arity;
pub mod errors;
pub mod help;
pub mod matcher;
pub mod status;
pub mod token;
pub mod validator;
