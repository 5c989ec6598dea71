use crate::gui::screens::{
    ScreenData, ScreenMessage, dashboard::DashboardScreen, login::LoginScreen,
    recipe_generator::RecipeGeneratorScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    Login(ScreenMessage<LoginScreen>),
    Dashboard(ScreenMessage<DashboardScreen>),
    RecipeGenerator(ScreenMessage<RecipeGeneratorScreen>),
    ChangeScreen(ScreenData),
}
