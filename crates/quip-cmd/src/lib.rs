//! # quip-cmd
//!
//! The I/O-free core of quipd: command metadata, the command registry with
//! its alias index, the invocation parser, and the unit-conversion engine.
//!
//! ## Features
//!
//! - Declarative command metadata with flags and usage hints
//! - First-registration-wins registry with alias resolution
//! - Single-pass invocation parsing (prefix or mention trigger,
//!   prefix-only flag scan, positional assembly)
//! - Static unit table with linear and formula conversion categories
//!
//! The crate is generic over the handler reference type `H` so a daemon can
//! store boxed async handlers next to the metadata while this crate stays
//! free of async and I/O concerns.
//!
//! ## Quick Start
//!
//! ```rust
//! use quip_cmd::{Command, Registry, Trigger, parse};
//!
//! let mut registry: Registry<()> = Registry::new();
//! registry.register(
//!     Command::new("translate", "Translate text", ())
//!         .alias("t")
//!         .flag_with_arg("to", "lang"),
//! );
//!
//! let trigger = Trigger::new("!", "<@42>");
//! let inv = parse(&trigger, &registry, "!t --to=es hello world", &[]).unwrap();
//! assert_eq!(inv.command.name, "translate");
//! assert_eq!(inv.flags["to"], "es");
//! assert_eq!(inv.positional, "hello world");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod invoke;
pub mod registry;
pub mod units;

pub use self::command::{Command, Flag};
pub use self::invoke::{parse, Invocation, Trigger};
pub use self::registry::Registry;
pub use self::units::{convert_units, find_category, format_value, Category, UnitError};
