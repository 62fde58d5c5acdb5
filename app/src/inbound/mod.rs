//! Inbound adapters: screen view models and the terminal driver.

pub mod screens;
pub mod terminal;
