// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod selection;

pub mod file;
pub mod gateway;
pub mod session;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
