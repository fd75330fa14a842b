//! # nbinv common
//!
//! Types shared by the engine and the command line front-end.
//!
//! * **[`config`]**: the YAML configuration and how it is loaded.
//! * **[`inventory`]**: field paths, mapping rules and the inventory document.
//! * **[`source`]**: the port through which host records are fetched.
//! * **[`error`]**: configuration and inventory errors.

pub mod config;
pub mod error;
pub mod inventory;
pub mod source;
