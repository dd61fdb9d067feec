//! `cookbook` - A recipe catalog with BMI-based diet suggestions
//!
//! This library provides an in-memory recipe store with prefix search, a BMI
//! calculator, a static table of diet suggestions, and the session handlers
//! that tie them to a command-line front end.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod bmi;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod recipe;
pub mod session;
pub mod store;
pub mod suggestions;

pub use bmi::{BmiReport, DietCategory};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use recipe::Recipe;
pub use session::Session;
pub use store::RecipeStore;
pub use suggestions::suggestions_for;
