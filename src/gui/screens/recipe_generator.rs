use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, scrollable, text, text_input},
};
use time::OffsetDateTime;

use crate::{
    core::{
        Recipe, RecipeRequestController,
        recipes::RequestTicket,
    },
    error::RecipeFetchError,
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{error_text, panel},
    },
};

#[derive(Debug, Clone)]
pub struct RecipeGeneratorScreen {
    controller: RecipeRequestController,
    footer_year: i32,
}

#[derive(Debug, Clone)]
pub enum RecipeGeneratorMessage {
    IngredientsChanged(String),
    Submit,
    Settled(RequestTicket, Result<Vec<Recipe>, RecipeFetchError>),
}

type Msg = ScreenMessage<RecipeGeneratorScreen>;

fn msg(message: RecipeGeneratorMessage) -> Msg {
    ScreenMessage::ScreenMessage(message)
}

impl RecipeGeneratorScreen {
    pub fn new() -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self {
            controller: RecipeRequestController::new(),
            footer_year: now.year(),
        }
    }

    fn recipe_list(&self) -> Element<'_, Msg> {
        let recipes = self.controller.recipes();
        if recipes.is_empty() {
            return column![].into();
        }
        let items = recipes.iter().enumerate().map(|(i, recipe)| {
            panel(
                column![
                    text(recipe.display_title(i + 1)).size(18),
                    text(recipe.instructions.as_str()),
                ]
                .spacing(8),
            )
            .width(Length::Fill)
            .into()
        });
        column![
            text("Recipe Suggestions").size(22),
            column(items).spacing(16),
        ]
        .spacing(12)
        .into()
    }
}

impl Default for RecipeGeneratorScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for RecipeGeneratorScreen {
    type Message = RecipeGeneratorMessage;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let loading = self.controller.is_loading();
        let label = if loading { "Generating..." } else { "Generate Recipes" };
        let submit = (!loading).then(|| msg(RecipeGeneratorMessage::Submit));

        let mut form = column![
            text("AI Recipe Generator").size(30),
            text("Enter your available ingredients and get delicious recipe ideas instantly!"),
            text_input("e.g. chicken, rice, broccoli, garlic", self.controller.ingredients())
                .on_input(|v| msg(RecipeGeneratorMessage::IngredientsChanged(v)))
                .on_submit_maybe(submit.clone()),
            button(text(label)).width(Length::Fill).on_press_maybe(submit),
        ]
        .spacing(14)
        .align_x(Center);

        if !self.controller.error_message().is_empty() {
            form = form.push(error_text(self.controller.error_message().to_string()));
        }

        let content = column![
            panel(column![form, self.recipe_list()].spacing(24)).max_width(640),
            text(format!("© {} AI Recipe Generator", self.footer_year)).size(12),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        container(scrollable(content))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            RecipeGeneratorMessage::IngredientsChanged(v) => {
                self.controller.set_ingredients(v);
                Task::none()
            }
            RecipeGeneratorMessage::Submit => {
                let Some(pending) = self.controller.begin() else {
                    return Task::none();
                };
                let boundary = state.boundary.clone();
                let ticket = pending.ticket;
                let ingredients = pending.ingredients;
                Task::perform(
                    async move { boundary.generate_recipes(&ingredients).await },
                    move |outcome| msg(RecipeGeneratorMessage::Settled(ticket, outcome)),
                )
            }
            RecipeGeneratorMessage::Settled(ticket, outcome) => {
                self.controller.settle(ticket, outcome);
                Task::none()
            }
        }
    }
}
