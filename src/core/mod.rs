pub mod content;
pub mod dashboard;
pub mod login;
pub mod recipes;
pub mod session;

pub use dashboard::{Card, Carousel, DashboardNavigator, Panel, Section, SectionSelection};
pub use login::{Credentials, FormMode, LoginForm};
pub use recipes::{Recipe, RecipeRequestController, RequestStatus};
pub use session::{Confirmation, SessionGate};
