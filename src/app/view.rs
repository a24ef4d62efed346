// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering with the lightbox stacked on top.

use super::{App, Message};
use crate::lightbox;
use crate::media::ImageSource;
use crate::photo::PhotoDescriptor;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{
    button, column, container, image, opaque, scrollable, text, Row, Stack,
};
use iced::{alignment, ContentFit, Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let gallery = gallery(app);

    if !app.lightbox.is_open() {
        return gallery;
    }

    // The overlay swallows pointer input so the gallery underneath
    // neither scrolls nor reacts to clicks while the lightbox is open.
    let overlay = app
        .lightbox
        .view(lightbox::ViewEnv { i18n: &app.i18n })
        .map(Message::Lightbox);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(gallery)
        .push(opaque(overlay))
        .into()
}

fn gallery(app: &App) -> Element<'_, Message> {
    let photos = app.lightbox.photos();

    let body: Element<'_, Message> = if app.resolving {
        centered(AnimatedSpinner::new(palette::PRIMARY_500, 0.0).into_element())
    } else if photos.is_empty() {
        centered(
            text(app.i18n.tr("gallery-empty"))
                .size(typography::BODY)
                .align_x(alignment::Horizontal::Center),
        )
    } else {
        let tiles: Row<'_, Message> = photos
            .iter()
            .enumerate()
            .fold(Row::new(), |tiles, (index, photo)| {
                tiles.push(thumbnail(index, photo))
            })
            .spacing(spacing::SM);

        scrollable(
            container(tiles.wrap().vertical_spacing(spacing::SM))
                .padding(spacing::MD)
                .width(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    };

    let mut layout = column![].spacing(spacing::XS);
    if let Some(key) = &app.warning {
        layout = layout.push(
            container(text(app.i18n.tr(key)).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::overlay::indicator(radius::SM)),
        );
    }
    if !photos.is_empty() {
        layout = layout.push(
            text(app.i18n.tr("gallery-open-hint"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    container(layout.push(body))
        .padding(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn thumbnail(index: usize, photo: &PhotoDescriptor) -> Element<'_, Message> {
    // Local raster files are previewed directly; remote and SVG photos get
    // a placeholder glyph.
    let source = ImageSource::parse(&photo.image_url);
    let preview: Element<'_, Message> = match &source {
        ImageSource::File(path) if !source.is_svg() => {
            image(image::Handle::from_path(path.clone()))
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        _ => container(text("🖼").size(typography::TITLE_MD))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    };

    let label = text(photo.display_title())
        .size(typography::CAPTION)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    button(
        column![
            container(preview)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::THUMBNAIL - spacing::LG)),
            label,
        ]
        .spacing(spacing::XXS),
    )
    .on_press(Message::ThumbnailPressed(index))
    .padding(spacing::XXS)
    .width(Length::Fixed(sizing::THUMBNAIL))
    .height(Length::Fixed(sizing::THUMBNAIL))
    .style(styles::button::thumbnail)
    .into()
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Hooks;
    use crate::config::Config;
    use crate::i18n::fluent::I18n;
    use crate::media::{ImageLoader, LoadFuture};
    use crate::photo::PhotoSequence;
    use futures_util::FutureExt;
    use std::sync::Arc;

    #[derive(Debug)]
    struct PendingLoader;

    impl ImageLoader for PendingLoader {
        fn load(&self, _image_url: &str) -> LoadFuture {
            futures_util::future::pending().boxed()
        }
    }

    #[test]
    fn view_builds_in_every_state() {
        let mut app = App::with_parts(
            I18n::default(),
            &Config::default(),
            Hooks::new(),
            Arc::new(PendingLoader),
        );
        let _ = view(&app);

        let _ = app.lightbox.set_photos(PhotoSequence::new(vec![
            PhotoDescriptor::new("https://example.com/a.jpg"),
            PhotoDescriptor::new("/tmp/b.png"),
        ]));
        let _ = view(&app);

        let _ = app.lightbox.open(1);
        let _ = view(&app);
    }
}
