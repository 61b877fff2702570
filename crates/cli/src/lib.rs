//! `stockroom-cli` — terminal front end for the inventory view-model.
//!
//! The binary is a thin shell: argument parsing lives in [`config`], the
//! interactive loop in [`repl`], batch replay in [`script`], and all text
//! output in [`render`].

pub mod config;
pub mod render;
pub mod repl;
pub mod script;
