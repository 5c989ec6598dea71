mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from welcomedesk for tests
pub use welcomedesk::core::{
    Card, Carousel, DashboardNavigator, Panel, Recipe, RecipeRequestController, RequestStatus,
    Section, SessionGate,
};
pub use welcomedesk::{HttpRecipeBoundary, RecipeBoundary, error::RecipeFetchError};
