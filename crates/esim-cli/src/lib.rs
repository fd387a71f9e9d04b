//! CLI library components for the eSIM storefront.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
