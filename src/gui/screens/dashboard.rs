use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, progress_bar, row, text},
};

use crate::{
    core::{
        Card, DashboardNavigator, Panel,
        content::{
            CHECKLIST_TASKS, MENTORS, PROGRESS_PERCENT, SOCIAL_EVENTS, TEAM, TEAM_ACTIONS,
            TODAYS_TASKS, TaskItem,
        },
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{carousel_dots, layout, panel},
    },
};

#[derive(Debug, Clone, Default)]
pub struct DashboardScreen {
    navigator: DashboardNavigator,
}

#[derive(Debug, Clone)]
pub enum DashboardMessage {
    SelectSection(usize),
    PreviousCard,
    NextCard,
    /// Buttons that only decorate the sample content.
    Noop,
}

type Msg = ScreenMessage<DashboardScreen>;

fn msg(message: DashboardMessage) -> Msg {
    ScreenMessage::ScreenMessage(message)
}

fn task_line(task: &TaskItem) -> Element<'_, Msg> {
    let mark = if task.done { "[x]" } else { "[ ]" };
    let mut line = row![text(mark), text(task.text)].spacing(8);
    if let Some(due) = task.due {
        line = line.push(text(due).size(12));
    }
    line.into()
}

fn action_button(label: &str) -> Element<'_, Msg> {
    button(text(label)).on_press(msg(DashboardMessage::Noop)).into()
}

fn card_view(card: Card) -> Element<'static, Msg> {
    let body: Element<'static, Msg> = match card {
        Card::Checklist => column![
            text("Progress").size(14),
            progress_bar(0.0..=100.0, PROGRESS_PERCENT),
            button(text("Customize Checklist"))
                .style(button::text)
                .on_press(msg(DashboardMessage::Noop)),
            text("Tasks").size(16),
            column(CHECKLIST_TASKS.iter().map(task_line)).spacing(4),
            text("Tip: You can update your progress anytime.").size(12),
        ]
        .spacing(10)
        .into(),
        Card::ResourceLibrary => column![
            text("Access the Resource Library"),
            action_button("Explore"),
            text("Find guides, FAQs, and more."),
            action_button("Learn More"),
        ]
        .spacing(10)
        .into(),
        Card::InteractiveTutorials => column![
            text("Step-by-step onboarding help"),
            action_button("Start Tutorial"),
        ]
        .spacing(10)
        .into(),
    };
    panel(column![text(card.title()).size(20), body].spacing(12))
        .width(320)
        .into()
}

impl DashboardScreen {
    fn cards_panel(&self) -> Element<'_, Msg> {
        let carousel = self.navigator.carousel();
        column![
            text("Onboarding Journey").size(24),
            carousel_dots(&carousel.indicator()),
            row![
                button(text("◀")).on_press(msg(DashboardMessage::PreviousCard)),
                card_view(carousel.active_card()),
                button(text("▶")).on_press(msg(DashboardMessage::NextCard)),
            ]
            .spacing(16)
            .align_y(Center),
        ]
        .spacing(20)
        .align_x(Center)
        .into()
    }

    fn overview_panel(&self) -> Element<'_, Msg> {
        let overview = panel(column![
            text("My Onboarding Overview").size(20),
            text(format!("{PROGRESS_PERCENT:.0}%")).size(28),
            text("Today's Tasks").size(16),
            column(TODAYS_TASKS.iter().map(task_line)).spacing(4),
        ]
        .spacing(12))
        .width(Length::FillPortion(1));

        let rows = TEAM.iter().map(|member| {
            row![
                text(member.name).width(Length::FillPortion(2)),
                text(member.role).width(Length::FillPortion(2)),
                text(member.completion.to_string()).width(Length::FillPortion(1)),
            ]
            .into()
        });
        let team = panel(column![
            text("Team & HR Dashboard").size(20),
            row![
                text("Name").width(Length::FillPortion(2)),
                text("Role").width(Length::FillPortion(2)),
                text("Completion").width(Length::FillPortion(1)),
            ],
            column(rows).spacing(6),
            row(TEAM_ACTIONS.iter().map(|action| action_button(action))).spacing(8),
        ]
        .spacing(12))
        .width(Length::FillPortion(1));

        row![overview, team].spacing(20).padding(20).into()
    }

    fn mentorship_panel(&self) -> Element<'_, Msg> {
        let mentors = MENTORS.iter().map(|mentor| {
            column![
                text(mentor.name).size(16),
                text(mentor.focus).size(13),
                text(format!("Next session: {}", mentor.next_session)).size(12),
            ]
            .spacing(2)
            .into()
        });
        panel(column![
            text("Mentorship").size(20),
            column(mentors).spacing(12),
            action_button("Request a Mentor"),
        ]
        .spacing(14))
        .width(420)
        .into()
    }

    fn social_panel(&self) -> Element<'_, Msg> {
        let events = SOCIAL_EVENTS.iter().map(|event| text(*event).into());
        panel(column![
            text("Social").size(20),
            text("Upcoming events").size(16),
            column(events).spacing(6),
            action_button("Introduce Yourself"),
        ]
        .spacing(14))
        .width(420)
        .into()
    }
}

impl Screen for DashboardScreen {
    type Message = DashboardMessage;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let content = match self.navigator.panel() {
            Panel::Cards => self.cards_panel(),
            Panel::Overview => self.overview_panel(),
            Panel::Mentorship => self.mentorship_panel(),
            Panel::Social => self.social_panel(),
        };
        layout(
            self.navigator.section(),
            |index| msg(DashboardMessage::SelectSection(index)),
            content,
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            DashboardMessage::SelectSection(index) => {
                self.navigator.select_section(index);
            }
            DashboardMessage::PreviousCard => {
                self.navigator.previous_card();
            }
            DashboardMessage::NextCard => {
                self.navigator.next_card();
            }
            DashboardMessage::Noop => {}
        }
        Task::none()
    }
}
