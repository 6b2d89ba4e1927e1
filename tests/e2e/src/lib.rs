//! Harness for driving the served app from a headless browser.

pub mod browser;
pub mod test_server;
