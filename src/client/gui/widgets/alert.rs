// Inline alert bar shown in place of the product grid on load failure
use crate::client::models::messages::Message;
use iced::widget::{Container, Row, Text};
use iced::{Color, Element, Font, Length};

const ALERT_BG: Color = Color::from_rgba(1.0, 0.2, 0.2, 0.15);
const ALERT_TEXT: Color = Color::from_rgb(0.97, 0.44, 0.44);

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

pub fn view(msg: &str) -> Element<'_, Message> {
    Container::new(
        Row::new()
            .spacing(12)
            .push(Text::new("❌").font(EMOJI_FONT).size(18).style(ALERT_TEXT))
            .push(Text::new(msg).size(16).style(ALERT_TEXT)),
    )
    .padding([12, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        |_: &iced::Theme| iced::widget::container::Appearance {
            background: Some(iced::Background::Color(ALERT_BG)),
            text_color: Some(ALERT_TEXT),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            shadow: iced::Shadow {
                offset: iced::Vector::new(0.0, 0.0),
                blur_radius: 0.0,
                color: Color::TRANSPARENT,
            },
        },
    )))
    .into()
}
