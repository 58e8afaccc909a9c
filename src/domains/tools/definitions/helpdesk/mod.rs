//! IT-helpdesk tools.

mod search;

pub use search::HelpdeskSearchTool;
