use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, center, column, container, opaque, stack, text, text_input},
};

use crate::{
    core::{FormMode, LoginForm},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{error_text, panel},
    },
};

#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    form: LoginForm,
}

#[derive(Debug, Clone)]
pub enum LoginMessage {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    OpenCreateUser,
    NewEmailChanged(String),
    NewPasswordChanged(String),
    SubmitNewUser,
    ReturnToLogin,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Authenticated,
}

fn msg(message: LoginMessage) -> ScreenMessage<LoginScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl LoginScreen {
    fn sign_in_form(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut content = column![
            text("Login").size(28),
            text("Email"),
            text_input("you@company.com", &self.form.login.email)
                .on_input(|v| msg(LoginMessage::EmailChanged(v)))
                .on_submit(msg(LoginMessage::Submit)),
            text("Password"),
            text_input("", &self.form.login.password)
                .secure(true)
                .on_input(|v| msg(LoginMessage::PasswordChanged(v)))
                .on_submit(msg(LoginMessage::Submit)),
        ]
        .spacing(10);

        if let Some(err) = self.form.error() {
            content = content.push(error_text(err.to_string()));
        }

        content
            .push(
                button(text("Login"))
                    .width(Length::Fill)
                    .on_press(msg(LoginMessage::Submit)),
            )
            .push(
                button(text("Create User"))
                    .width(Length::Fill)
                    .on_press(msg(LoginMessage::OpenCreateUser)),
            )
            .into()
    }

    fn create_user_form(&self) -> Element<'_, ScreenMessage<Self>> {
        column![
            text("Create User").size(28),
            text("Email"),
            text_input("you@company.com", &self.form.new_user.email)
                .on_input(|v| msg(LoginMessage::NewEmailChanged(v)))
                .on_submit(msg(LoginMessage::SubmitNewUser)),
            text("Password"),
            text_input("", &self.form.new_user.password)
                .secure(true)
                .on_input(|v| msg(LoginMessage::NewPasswordChanged(v)))
                .on_submit(msg(LoginMessage::SubmitNewUser)),
            button(text("SUBMIT"))
                .width(Length::Fill)
                .on_press(msg(LoginMessage::SubmitNewUser)),
        ]
        .spacing(10)
        .into()
    }
}

impl Screen for LoginScreen {
    type Message = LoginMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let form = match self.form.mode() {
            FormMode::SignIn => self.sign_in_form(),
            FormMode::CreateUser => self.create_user_form(),
        };
        let base = container(panel(form).width(380))
            .center_x(Length::Fill)
            .center_y(Length::Fill);

        match self.form.modal_message() {
            Some(message) => {
                let modal = panel(
                    column![
                        text(message).size(18),
                        button(text("Return to Login"))
                            .width(Length::Fill)
                            .on_press(msg(LoginMessage::ReturnToLogin)),
                    ]
                    .spacing(16)
                    .align_x(Center),
                )
                .width(320);
                stack![base, opaque(center(modal))].into()
            }
            None => base.into(),
        }
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LoginMessage::EmailChanged(v) => self.form.login.email = v,
            LoginMessage::PasswordChanged(v) => self.form.login.password = v,
            LoginMessage::NewEmailChanged(v) => self.form.new_user.email = v,
            LoginMessage::NewPasswordChanged(v) => self.form.new_user.password = v,
            LoginMessage::OpenCreateUser => self.form.open_create_user(),
            LoginMessage::SubmitNewUser => self.form.submit_new_user(&state.session),
            LoginMessage::ReturnToLogin => self.form.return_to_login(),
            LoginMessage::Submit => {
                if self.form.submit_login(&mut state.session) {
                    return Task::done(ScreenMessage::ParentMessage(
                        ParentMessage::Authenticated,
                    ));
                }
            }
        }
        Task::none()
    }
}
