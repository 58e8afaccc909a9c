//! Domains module containing business logic organized by bounded contexts.
//!
//! The only domain today is `tools`: the named operations the adapter
//! exposes over every supported protocol.

pub mod tools;
