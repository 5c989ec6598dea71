pub mod boundary;
pub mod config;
pub mod core;
pub mod error;

pub use boundary::{HttpRecipeBoundary, RecipeBoundary};
pub use config::{AppConfig, Variant};
pub use crate::core::{DashboardNavigator, RecipeRequestController, SessionGate};

#[cfg(feature = "gui")]
pub mod gui;
