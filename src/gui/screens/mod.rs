pub mod dashboard;
pub mod login;
pub mod recipe_generator;

use iced::{Element, Task};

use crate::{
    Variant,
    gui::{AppState, Message},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Login(login::LoginScreen),
    Dashboard(dashboard::DashboardScreen),
    RecipeGenerator(recipe_generator::RecipeGeneratorScreen),
}

impl ScreenData {
    /// The view behind the login gate for the configured variant.
    pub fn authenticated(variant: Variant) -> Self {
        match variant {
            Variant::Dashboard => ScreenData::Dashboard(dashboard::DashboardScreen::default()),
            Variant::Recipes => {
                ScreenData::RecipeGenerator(recipe_generator::RecipeGeneratorScreen::new())
            }
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;
    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Login(screen) => screen.view().map(Message::Login),
            ScreenData::Dashboard(screen) => screen.view().map(Message::Dashboard),
            ScreenData::RecipeGenerator(screen) => screen.view().map(Message::RecipeGenerator),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(screen)) => {
                *x = screen;
                Task::none()
            }
            (ScreenData::Login(page), Message::Login(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Login)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(login::ParentMessage::Authenticated) => {
                    if !state.session.is_authenticated() {
                        tracing::warn!("Ignoring authenticated notice from a closed gate");
                        return Task::none();
                    }
                    Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                        ScreenData::authenticated(state.config.variant),
                    )))
                }
            },
            (ScreenData::Dashboard(page), Message::Dashboard(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Dashboard)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(never) => match never {},
            },
            (ScreenData::RecipeGenerator(page), Message::RecipeGenerator(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::RecipeGenerator)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(never) => match never {},
            },
            // A message for a screen that is no longer shown, e.g. a recipe
            // response arriving after the generator went away.
            (_, message) => {
                tracing::debug!(?message, "Dropping message for inactive screen");
                Task::none()
            }
        }
    }
}

#[cfg(all(test, feature = "gui"))]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        AppConfig, HttpRecipeBoundary, RecipeRequestController,
        core::Recipe,
        gui::screens::recipe_generator::RecipeGeneratorMessage,
    };

    fn app_state() -> AppState {
        let config = AppConfig::default();
        let boundary = HttpRecipeBoundary::new(&config.api_base).expect("default base is valid");
        AppState::new(config, Arc::new(boundary))
    }

    #[test]
    fn late_recipe_response_for_closed_generator_is_dropped() {
        let mut state = app_state();
        let mut screen = ScreenData::Dashboard(dashboard::DashboardScreen::default());
        let ticket = RecipeRequestController::new()
            .begin()
            .expect("idle controller accepts a submit")
            .ticket;

        let task = screen.update(
            Message::RecipeGenerator(ScreenMessage::ScreenMessage(
                RecipeGeneratorMessage::Settled(ticket, Ok(vec![Recipe::new("Soup", "Stir.")])),
            )),
            &mut state,
        );

        assert_eq!(task.units(), 0);
        assert!(matches!(screen, ScreenData::Dashboard(_)));
    }
}
