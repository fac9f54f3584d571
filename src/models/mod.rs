//! Data models shared across the service layers

pub mod session;
pub mod visitor;

pub use session::{Credentials, Session};
pub use visitor::{NewVisitor, VisitorRecord};
