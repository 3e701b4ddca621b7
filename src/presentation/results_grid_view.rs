use std::collections::HashMap;

use iced::widget::{button, column, container, image, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

use super::app_theme;
use crate::core::models::ImageResult;
use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultCardMessage {
    Download(String),
    Share(String),
    OpenPhotographerProfile(String),
}

/// Lays results out in fixed-width rows, keeping the provider's order
/// left-to-right, top-to-bottom.
pub fn render_results_grid<'a>(
    results: &'a [ImageResult],
    previews: &'a HashMap<String, image::Handle>,
) -> Element<'a, ResultCardMessage> {
    if results.is_empty() {
        return container(
            text(global_constants::USER_MESSAGE_EMPTY_STATE)
                .size(16)
                .style(app_theme::muted_text_style),
        )
        .width(Length::Fill)
        .padding(48)
        .align_x(Alignment::Center)
        .into();
    }

    let rows = results
        .chunks(global_constants::RESULT_GRID_COLUMNS)
        .map(|chunk| {
            let mut cards: Vec<Element<'a, ResultCardMessage>> = chunk
                .iter()
                .map(|result| render_result_card(result, previews.get(&result.url)))
                .collect();

            while cards.len() < global_constants::RESULT_GRID_COLUMNS {
                cards.push(Space::new().width(Length::Fill).into());
            }

            Row::with_children(cards).spacing(16).width(Length::Fill).into()
        })
        .collect::<Vec<Element<'a, ResultCardMessage>>>();

    Column::with_children(rows)
        .spacing(16)
        .width(Length::Fill)
        .into()
}

fn render_result_card<'a>(
    result: &'a ImageResult,
    preview: Option<&'a image::Handle>,
) -> Element<'a, ResultCardMessage> {
    let picture: Element<'a, ResultCardMessage> = match preview {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(global_constants::RESULT_CARD_IMAGE_SIZE))
            .into(),
        None => container(
            text(global_constants::USER_MESSAGE_PREVIEW_LOADING)
                .size(13)
                .style(app_theme::muted_text_style),
        )
        .width(Length::Fill)
        .height(Length::Fixed(global_constants::RESULT_CARD_IMAGE_SIZE))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into(),
    };

    let credit = row![
        text("Photo by").size(12),
        button(text(&result.attribution.photographer).size(12))
            .padding(0)
            .style(app_theme::link_button_style)
            .on_press(ResultCardMessage::OpenPhotographerProfile(
                result.attribution.photographer_url.clone(),
            )),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    let actions = row![
        button(text("Download").size(13))
            .padding([6, 12])
            .style(app_theme::secondary_button_style)
            .on_press(ResultCardMessage::Download(result.url.clone())),
        button(text("Share").size(13))
            .padding([6, 12])
            .style(app_theme::secondary_button_style)
            .on_press(ResultCardMessage::Share(
                result.attribution.unsplash_url.clone()
            )),
    ]
    .spacing(8);

    container(column![picture, credit, actions].spacing(8))
        .padding(10)
        .width(Length::Fill)
        .style(app_theme::card_container_style)
        .into()
}
