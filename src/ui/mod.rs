/// UI module
///
/// One file per wizard screen. Every view is a plain function over borrowed
/// state returning an `Element<Message>`; all mutation flows back through
/// messages handled by the wizard root in main.rs.

pub mod download;
pub mod form;
pub mod processing;
pub mod upload;
pub mod welcome;
