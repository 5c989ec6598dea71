use iced::{
    Alignment::Center,
    Color, Element, Length, Theme, border,
    widget::{Container, button, column, container, container::Style, row, text},
};
use iced_widget::container::bordered_box;

use crate::core::Section;

const ERROR_RED: Color = Color::from_rgb(0.86, 0.2, 0.2);
const DOT_ACTIVE: Color = Color::from_rgb(0.15, 0.39, 0.92);
const DOT_IDLE: Color = Color::from_rgb(0.82, 0.84, 0.86);

/// Bordered box used for cards, forms and modals.
pub fn panel<'a, Message>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message>
where
    Message: 'a,
{
    container(content).style(bordered_box).padding(24)
}

pub fn error_text<'a>(message: String) -> iced::widget::Text<'a> {
    text(message).color(ERROR_RED)
}

fn sidebar_style(active: bool) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let style = bordered_box(theme).border(border::width(if active { 3.0 } else { 1.0 }));
        // dim the inactive entries
        if active {
            style.background(theme.palette().primary)
        } else {
            let mut color_rgba = theme.palette().background.into_rgba8();
            color_rgba[0] /= 2;
            color_rgba[1] /= 2;
            color_rgba[2] /= 2;
            style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
        }
    }
}

/// Sidebar with one entry per section next to the active panel.
pub fn layout<'a, Message>(
    active: Section,
    on_select: impl Fn(usize) -> Message,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let entries = Section::ALL.iter().map(|section| {
        container(
            button(text(section.label()))
                .width(Length::Fill)
                .style(button::text)
                .on_press(on_select(section.index())),
        )
        .style(sidebar_style(*section == active))
        .padding(6)
        .into()
    });

    container(row![
        container(column(entries).spacing(8).padding(10))
            .height(Length::Fill)
            .width(Length::FillPortion(1)),
        container(main_content.into())
            .center_x(Length::FillPortion(4))
            .center_y(Length::Fill),
    ])
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// One dot per card; the highlighted dot is the active card.
pub fn carousel_dots<'a, Message>(markers: &[bool]) -> Element<'a, Message>
where
    Message: 'a,
{
    let dots = markers.iter().map(|&active| {
        let (size, color): (u16, Color) = if active { (16, DOT_ACTIVE) } else { (12, DOT_IDLE) };
        container(text(""))
            .width(f32::from(size))
            .height(f32::from(size))
            .style(move |_theme: &Theme| {
                Style::default()
                    .background(color)
                    .border(border::rounded(8.0))
            })
            .into()
    });
    row(dots).spacing(8).align_y(Center).into()
}
