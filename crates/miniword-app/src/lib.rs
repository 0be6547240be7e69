//! Presentation adapters for Miniword: the terminal player and the browser
//! binding.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod command;
pub mod dto;
pub mod text_view;
#[cfg(target_arch = "wasm32")]
pub mod web;
