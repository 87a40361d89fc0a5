//! quipd - chat-triggered command interpreter daemon.
//!
//! Converts human-typed message lines into resolved command handler
//! invocations with structured arguments, and ships a small set of
//! built-in commands (help, ping, unit conversion, and thin clients for
//! translation, dictionary, and summary services).
//!
//! The parsing core lives in the `quip-cmd` crate; this crate adds the
//! dispatcher, handlers, configuration, service clients, and a console
//! gateway.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod services;

pub use crate::config::Config;
pub use crate::dispatch::{Context, Dispatcher, Handler, MessageEvent, Outbound};
pub use crate::error::{HandlerError, HandlerResult};
