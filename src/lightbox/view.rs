// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay rendering.
//!
//! Layers, bottom to top: the dimmed backdrop (press to close), the photo or
//! its loading/error placeholder, the caption, the edge arrows, and the top
//! bar with the counter and actions.

use super::component::{DisplayedImage, Message, State};
use crate::i18n::fluent::I18n;
use crate::media::LoadError;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, column, container, image, mouse_area, opaque, row, text, Space, Stack};
use iced::{alignment, Background, Color, ContentFit, Element, Length, Theme};

/// Environment information required to render the lightbox.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Renders the overlay, or an empty element while closed.
    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        if !self.is_open() {
            return Space::new().width(Length::Shrink).height(Length::Shrink).into();
        }

        let backdrop = mouse_area(
            container(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(backdrop_style),
        )
        .on_release(Message::BackdropPressed);

        let mut stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(self.photo_layer(&env));

        if self.has_previous() {
            stack = stack.push(edge_arrow(
                "◀",
                env.i18n.tr("lightbox-previous"),
                Message::Previous,
                alignment::Horizontal::Left,
            ));
        }
        if self.has_next() {
            stack = stack.push(edge_arrow(
                "▶",
                env.i18n.tr("lightbox-next"),
                Message::Next,
                alignment::Horizontal::Right,
            ));
        }

        stack.push(self.top_bar(&env)).into()
    }

    fn photo_layer<'a>(&'a self, env: &ViewEnv<'a>) -> Element<'a, Message> {
        let content: Element<'a, Message> = match self.frame() {
            Frame::Photo(displayed) => image(displayed.image.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
            Frame::Failed(error) => {
                container(text(env.i18n.tr(error.i18n_key())).size(typography::BODY))
                    .padding(spacing::MD)
                    .style(styles::overlay::indicator(radius::MD))
                    .into()
            }
            Frame::Loading => column![
                AnimatedSpinner::new(palette::WHITE, self.spinner_rotation()).into_element(),
                text(env.i18n.tr("lightbox-loading"))
                    .size(typography::BODY)
                    .color(palette::WHITE),
            ]
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .into(),
            Frame::Blank => return Space::new().width(Length::Fill).height(Length::Fill).into(),
        };

        let caption = self
            .options()
            .show_captions
            .then(|| self.current_photo().and_then(|photo| photo.title.as_deref()))
            .flatten()
            .map(|title| {
                container(text(title).size(typography::BODY).color(palette::WHITE))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::overlay::indicator(radius::SM))
            });

        let mut body = column![opaque(content)]
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center);
        if let Some(caption) = caption {
            body = body.push(opaque(caption));
        }

        container(body)
            .padding([spacing::XXL, sizing::ICON_XXL])
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn top_bar<'a>(&'a self, env: &ViewEnv<'a>) -> Element<'a, Message> {
        let counter = self.counter().map(|(current, total)| {
            container(
                text(env.i18n.tr_with_args(
                    "lightbox-counter",
                    &[
                        ("current", current.to_string()),
                        ("total", total.to_string()),
                    ],
                ))
                .size(typography::BODY),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(styles::overlay::indicator(radius::SM))
        });

        let mut actions = row![].spacing(spacing::XS);
        if self.can_share() {
            actions = actions.push(bar_button(env.i18n.tr("lightbox-share"), Message::Share));
        }
        if self.can_download() {
            actions = actions.push(bar_button(
                env.i18n.tr("lightbox-download"),
                Message::Download,
            ));
        }
        actions = actions.push(bar_button("✕".to_string(), Message::Close));

        let mut bar = row![].align_y(alignment::Vertical::Center);
        if let Some(counter) = counter {
            bar = bar.push(opaque(counter));
        }
        bar = bar
            .push(Space::new().width(Length::Fill))
            .push(opaque(actions));

        container(bar)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_y(alignment::Vertical::Top)
            .into()
    }

    /// What the photo area shows.
    fn frame(&self) -> Frame<'_> {
        if self.current_photo().is_none() {
            Frame::Blank
        } else if let Some(displayed) = self.displayed() {
            Frame::Photo(displayed)
        } else if let Some(error) = self.load_error() {
            Frame::Failed(error)
        } else if self.is_loading() {
            Frame::Loading
        } else {
            Frame::Blank
        }
    }

    /// One-based position and total, when the counter is shown.
    fn counter(&self) -> Option<(usize, usize)> {
        let total = self.photos().len();
        (self.options().show_counter && total > 0).then(|| (self.current_index() + 1, total))
    }
}

#[derive(Debug)]
enum Frame<'a> {
    Photo(&'a DisplayedImage),
    Failed(&'a LoadError),
    Loading,
    /// Nothing to show, e.g. the sequence was emptied while open.
    Blank,
}

fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

fn bar_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .into()
}

fn edge_arrow<'a>(
    glyph: &'static str,
    label: String,
    message: Message,
    side: alignment::Horizontal,
) -> Element<'a, Message> {
    let arrow = button(
        text(glyph)
            .size(typography::TITLE_MD)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(message)
    .width(Length::Fixed(sizing::ICON_XL))
    .height(Length::Fixed(sizing::ICON_XXL))
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));

    let labelled = iced::widget::tooltip(
        arrow,
        container(text(label).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::overlay::indicator(radius::SM)),
        iced::widget::tooltip::Position::Bottom,
    );

    container(opaque(labelled))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .center_y(Length::Fill)
        .into()
}
