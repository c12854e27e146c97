//! TCP accept loop
//!
//! Binds the listener and pairs each accepted connection with a fresh
//! session built by the embedding application's factory.

pub mod listener;

pub use listener::{Server, SessionFactory};
