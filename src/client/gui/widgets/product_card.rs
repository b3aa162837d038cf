use crate::client::models::messages::Message;
use crate::common::models::Product;
use iced::widget::{image, Button, Column, Container, Image, Row, Space, Text};
use iced::{Alignment, Color, ContentFit, Element, Font, Length};

const CARD_BG: Color = Color::from_rgb(0.08, 0.11, 0.18);
const MEDIA_BG: Color = Color::from_rgb(0.05, 0.08, 0.14);
const BADGE_BG: Color = Color::from_rgb(0.16, 0.19, 0.27);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.75, 0.8);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn media_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(MEDIA_BG)),
        text_color: Some(TEXT_SECONDARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn badge_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BADGE_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 4.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

/// Product card: art, title with category badge, description, price row.
/// `art` is None until the image bytes arrive; a placeholder keeps the slot.
pub fn view<'a>(product: &'a Product, art: Option<&image::Handle>) -> Element<'a, Message> {
    let media: Element<Message> = match art {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(180.0))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Text::new("🖼️").font(EMOJI_FONT).size(32))
            .width(Length::Fill)
            .height(Length::Fixed(180.0))
            .center_x()
            .center_y()
            .style(iced::theme::Container::Custom(Box::new(media_appearance)))
            .into(),
    };

    let badge = Container::new(Text::new(&product.category).size(11))
        .padding([4, 8])
        .style(iced::theme::Container::Custom(Box::new(badge_appearance)));

    let title_row = Row::new()
        .spacing(12)
        .align_items(Alignment::Start)
        .push(
            Text::new(&product.title)
                .font(BOLD_FONT)
                .size(17)
                .style(TEXT_PRIMARY)
                .width(Length::Fill),
        )
        .push(badge);

    let description = Text::new(&product.description)
        .size(13)
        .style(TEXT_SECONDARY);

    let price_row = Row::new()
        .align_items(Alignment::Center)
        .push(
            Text::new(product.display_price())
                .font(BOLD_FONT)
                .size(20)
                .style(TEXT_PRIMARY),
        )
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(
            Button::new(Text::new("Add to cart").size(13))
                .style(iced::theme::Button::Primary)
                .on_press(Message::NoOp)
                .padding([8, 12]),
        );

    let body = Column::new()
        .spacing(10)
        .padding(16)
        .push(title_row)
        .push(description)
        .push(price_row);

    Container::new(Column::new().push(media).push(body))
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}
