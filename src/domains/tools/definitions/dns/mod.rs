//! DNS tools.

mod lookup;

pub use lookup::DnsLookupTool;
