//! Tool definitions.
//!
//! One file per tool (or per small family of tools sharing argument
//! handling), grouped by domain:
//!
//! - `calc/` - calculator operations (arithmetic, sqrt, factorial, stats)
//! - `dns/` - DNS lookups through the system resolver
//! - `helpdesk/` - IT-helpdesk knowledge-base search

pub mod calc;
pub mod dns;
pub mod helpdesk;

pub use calc::{
    AddTool, DivideTool, FactorialTool, MultiplyTool, SqrtTool, StatsSummaryTool, SubtractTool,
};
pub use dns::DnsLookupTool;
pub use helpdesk::HelpdeskSearchTool;
