use std::sync::Arc;

use iced::{Element, Task, Theme};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, login::LoginScreen},
};
use crate::{AppConfig, HttpRecipeBoundary, RecipeBoundary};

pub struct WelcomeDeskApp {
    state: AppState,
    screen: ScreenData,
}

fn unwrap_screen_message(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}

impl WelcomeDeskApp {
    pub fn new(config: AppConfig, boundary: Arc<dyn RecipeBoundary>) -> Self {
        Self {
            state: AppState::new(config, boundary),
            screen: ScreenData::Login(LoginScreen::default()),
        }
    }

    /// Open the window and block until it is closed.
    pub fn run(config: AppConfig) -> anyhow::Result<()> {
        let boundary: Arc<dyn RecipeBoundary> = Arc::new(HttpRecipeBoundary::new(&config.api_base)?);
        tracing::info!(variant = ?config.variant, api_base = %config.api_base, "Starting desktop client");
        iced::application(
            move || WelcomeDeskApp::new(config.clone(), boundary.clone()),
            WelcomeDeskApp::update,
            WelcomeDeskApp::view,
        )
        .title(WelcomeDeskApp::title)
        .theme(WelcomeDeskApp::theme)
        .run()?;
        Ok(())
    }

    fn title(&self) -> String {
        match &self.screen {
            ScreenData::Login(_) => "Welcome Desk - Sign in".to_string(),
            ScreenData::Dashboard(_) => "Welcome Desk - Onboarding".to_string(),
            ScreenData::RecipeGenerator(_) => "Welcome Desk - Recipe Generator".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_screen_message)
    }

    fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(unwrap_screen_message)
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}
