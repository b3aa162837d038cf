use crate::client::gui::widgets::{alert, product_card};
use crate::client::models::app_state::StoreState;
use crate::client::models::messages::Message;
use crate::common::models::Category;
use chrono::{Datelike, Utc};
use iced::widget::{Button, Column, Container, Row, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

// Color palette for the storefront (dark slate with cyan accent)
const BG_MAIN: Color = Color::from_rgb(0.01, 0.03, 0.09); // Near-black slate
const HEADER_BG: Color = Color::from_rgb(0.06, 0.09, 0.16); // Slate header band
const HERO_BG: Color = Color::from_rgb(0.04, 0.07, 0.14); // Hero backdrop
const ACCENT_COLOR: Color = Color::from_rgb(0.02, 0.71, 0.83); // Cyan accent
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.75, 0.8);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

// Custom container styles
fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn header_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(HEADER_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn hero_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(HERO_BG)),
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

fn brand_mark_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(ACCENT_COLOR)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 8.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

// Navbar: brand mark, inert navigation entries, inert account actions
fn header_view() -> Element<'static, Message> {
    let brand = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(
            Container::new(Text::new("E").font(BOLD_FONT).size(18))
                .width(Length::Fixed(36.0))
                .height(Length::Fixed(36.0))
                .center_x()
                .center_y()
                .style(iced::theme::Container::Custom(Box::new(
                    brand_mark_appearance,
                ))),
        )
        .push(Text::new("ElectroX").font(BOLD_FONT).size(20).style(TEXT_PRIMARY));

    let nav = Row::new()
        .spacing(24)
        .align_items(Alignment::Center)
        .push(Text::new("Products").size(14).style(TEXT_SECONDARY))
        .push(Text::new("About").size(14).style(TEXT_SECONDARY))
        .push(Text::new("Contact").size(14).style(TEXT_SECONDARY));

    let actions = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(
            Button::new(Text::new("Sign in").size(14))
                .style(iced::theme::Button::Secondary)
                .on_press(Message::NoOp)
                .padding([8, 12]),
        )
        .push(
            Button::new(Text::new("Cart (0)").font(BOLD_FONT).size(14))
                .style(iced::theme::Button::Primary)
                .on_press(Message::NoOp)
                .padding([8, 12]),
        );

    let header_row = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(brand)
        .push(Container::new(nav).width(Length::Fill).center_x())
        .push(actions);

    Container::new(header_row)
        .padding([16, 24])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(header_appearance)))
        .into()
}

// Hero panel standing in for the web storefront's animated scene
fn hero_view() -> Element<'static, Message> {
    let copy = Column::new()
        .spacing(16)
        .push(
            Text::new("Futuristic electronics for creators and gamers")
                .font(BOLD_FONT)
                .size(42)
                .style(TEXT_PRIMARY),
        )
        .push(
            Text::new(
                "Shop performance laptops, immersive audio, and pro displays with a minimalist aesthetic.",
            )
            .size(16)
            .style(TEXT_SECONDARY),
        )
        .push(
            Row::new()
                .spacing(12)
                .push(
                    Button::new(Text::new("Shop now").font(BOLD_FONT).size(14))
                        .style(iced::theme::Button::Primary)
                        .on_press(Message::NoOp)
                        .padding([12, 20]),
                )
                .push(
                    Button::new(Text::new("Learn more").size(14))
                        .style(iced::theme::Button::Secondary)
                        .on_press(Message::NoOp)
                        .padding([12, 20]),
                ),
        );

    Container::new(copy)
        .padding(48)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(hero_appearance)))
        .into()
}

// One filter button per category, the selected one highlighted
fn filter_row(selected: Category) -> Element<'static, Message> {
    let mut row = Row::new().spacing(8).align_items(Alignment::Center);
    for category in Category::all() {
        let style = if *category == selected {
            iced::theme::Button::Primary
        } else {
            iced::theme::Button::Secondary
        };
        row = row.push(
            Button::new(Text::new(category.as_str()).size(13))
                .style(style)
                .on_press(Message::CategorySelected(*category))
                .padding([8, 12]),
        );
    }
    row.into()
}

// Card grid, three columns, catalog order
fn grid_view(state: &StoreState) -> Element<'_, Message> {
    let filtered = state.filtered_products();

    let mut grid = Column::new().spacing(24);
    for chunk in filtered.chunks(3) {
        let mut row = Row::new().spacing(24);
        for product in chunk {
            row = row.push(
                Container::new(product_card::view(
                    product,
                    state.product_images.get(&product.id),
                ))
                .width(Length::FillPortion(1)),
            );
        }
        // Pad short rows so cards keep their column width
        for _ in chunk.len()..3 {
            row = row.push(Space::new(Length::FillPortion(1), Length::Fixed(0.0)));
        }
        grid = grid.push(row);
    }
    grid.into()
}

fn footer_view() -> Element<'static, Message> {
    let year = Utc::now().year();
    let footer_row = Row::new()
        .spacing(24)
        .align_items(Alignment::Center)
        .push(
            Text::new(format!("© {} ElectroX. All rights reserved.", year))
                .size(13)
                .style(TEXT_SECONDARY),
        )
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(Text::new("Privacy").size(13).style(TEXT_SECONDARY))
        .push(Text::new("Terms").size(13).style(TEXT_SECONDARY))
        .push(Text::new("Support").size(13).style(TEXT_SECONDARY));

    Container::new(footer_row)
        .padding([24, 24])
        .width(Length::Fill)
        .into()
}

pub fn view(state: &StoreState) -> Element<'_, Message> {
    let section_header = Row::new()
        .align_items(Alignment::Center)
        .push(
            Text::new("Featured products")
                .font(BOLD_FONT)
                .size(28)
                .style(TEXT_PRIMARY),
        )
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(filter_row(state.category));

    // Loading and error replace the grid, never coexist with it
    let catalog: Element<Message> = if state.loading {
        Text::new("Loading products…")
            .size(16)
            .style(TEXT_SECONDARY)
            .into()
    } else if let Some(message) = &state.error {
        alert::view(message)
    } else {
        grid_view(state)
    };

    let products_section = Column::new()
        .spacing(24)
        .padding([32, 24])
        .push(section_header)
        .push(catalog);

    let page = Column::new()
        .push(header_view())
        .push(
            Container::new(hero_view())
                .padding([24, 24, 0, 24])
                .width(Length::Fill),
        )
        .push(products_section)
        .push(footer_view())
        .width(Length::Fill);

    Container::new(
        iced::widget::scrollable(page)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
    .into()
}
