pub mod changes;
pub mod context;
pub mod dispatch;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod logging;
pub mod model;
pub mod outputs;
pub mod remote;
pub mod sources;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
