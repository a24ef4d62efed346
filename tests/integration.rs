// SPDX-License-Identifier: MPL-2.0
use futures_util::FutureExt;
use photo_lightbox::actions::Hooks;
use photo_lightbox::config::{self, Config, LightboxConfig};
use photo_lightbox::i18n::fluent::I18n;
use photo_lightbox::lightbox::{Command, Effect, Message, Options, State};
use photo_lightbox::media::{DefaultImageLoader, ImageData, ImageLoader, LoadError, LoadFuture};
use photo_lightbox::photo::{scanner, PhotoDescriptor, PhotoSequence};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

/// Loader whose futures never resolve; results are fed back by the test.
#[derive(Debug, Default)]
struct ManualLoader {
    requested: Mutex<Vec<String>>,
}

impl ImageLoader for ManualLoader {
    fn load(&self, image_url: &str) -> LoadFuture {
        self.requested.lock().unwrap().push(image_url.to_string());
        futures_util::future::pending().boxed()
    }
}

fn sequence(urls: &[&str]) -> PhotoSequence {
    urls.iter().map(|url| PhotoDescriptor::new(*url)).collect()
}

fn lightbox(urls: &[&str]) -> State {
    State::new(sequence(urls), Hooks::new(), Arc::new(ManualLoader::default()))
}

fn pixel() -> ImageData {
    ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
}

fn write_png(path: &std::path::Path, width: u32, height: u32) {
    image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([10, 20, 30, 255]))
        .save(path)
        .expect("write png fixture");
}

#[test]
fn three_photo_walkthrough() {
    let mut lightbox = lightbox(&["a.jpg", "b.jpg", "c.jpg"]);

    let (effect, _) = lightbox.handle_message(Message::Open(2));
    assert_eq!(effect, Effect::Opened { index: 2 });
    assert!(lightbox.is_open());

    let _ = lightbox.next();
    assert_eq!(lightbox.current_index(), 2);

    let _ = lightbox.prev();
    assert_eq!(lightbox.current_index(), 1);

    let (effect, _) = lightbox.handle_message(Message::Key(Command::Close));
    assert_eq!(effect, Effect::Closed);
    assert!(!lightbox.is_open());
}

#[test]
fn empty_sequence_never_opens() {
    let mut lightbox = lightbox(&[]);

    let _ = lightbox.open(0);
    let _ = lightbox.next();
    let _ = lightbox.prev();

    assert!(!lightbox.is_open());
    assert_eq!(lightbox.current_index(), 0);
}

#[test]
fn open_clamps_any_index() {
    for requested in [0usize, 1, 4, 5, 1_000, usize::MAX] {
        let mut lightbox = lightbox(&["0", "1", "2", "3", "4"]);
        let _ = lightbox.open(requested);
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_index(), requested.min(4));
    }
}

#[test]
fn closing_twice_equals_closing_once() {
    let mut lightbox = lightbox(&["a.jpg", "b.jpg"]);
    let _ = lightbox.open(1);

    let (first, _) = lightbox.handle_message(Message::Close);
    let (second, _) = lightbox.handle_message(Message::Close);

    assert_eq!(first, Effect::Closed);
    assert_eq!(second, Effect::None);
    assert!(!lightbox.is_open());
    // Reopening resumes where the user left off.
    assert_eq!(lightbox.current_index(), 1);
}

#[test]
fn late_first_load_does_not_override_second() {
    let mut lightbox = lightbox(&["a.jpg", "b.jpg"]);
    let _ = lightbox.open(0);
    let first = lightbox.load_token();
    let _ = lightbox.next();
    let second = lightbox.load_token();
    assert!(second > first);

    lightbox.handle_message(Message::ImageLoaded {
        token: second,
        result: Ok(pixel()),
    });
    lightbox.handle_message(Message::ImageLoaded {
        token: first,
        result: Err(LoadError::Network("reset".into())),
    });

    let displayed = lightbox.displayed().expect("second photo shown");
    assert_eq!(displayed.index, 1);
    assert!(lightbox.load_error().is_none());
}

#[test]
fn shrinking_sequence_clamps_without_closing() {
    let mut lightbox = lightbox(&["a.jpg", "b.jpg", "c.jpg", "d.jpg"]);
    let _ = lightbox.open(3);

    let _ = lightbox.set_photos(sequence(&["a.jpg", "b.jpg"]));

    assert!(lightbox.is_open());
    assert_eq!(lightbox.current_index(), 1);
    assert_eq!(
        lightbox.current_photo().map(|p| p.image_url.as_str()),
        Some("b.jpg")
    );
}

#[test]
fn missing_url_is_a_load_failure() {
    let mut lightbox = lightbox(&[""]);
    let _ = lightbox.open(0);
    let token = lightbox.load_token();

    lightbox.handle_message(Message::ImageLoaded {
        token,
        result: Err(LoadError::MissingUrl),
    });

    assert!(!lightbox.is_loading());
    assert!(lightbox.displayed().is_none());
    assert_eq!(lightbox.load_error(), Some(&LoadError::MissingUrl));
}

#[test]
fn operations_after_destroy_are_silent() {
    let mut lightbox = lightbox(&["a.jpg"]);
    lightbox.destroy();

    let _ = lightbox.open(0);
    let _ = lightbox.next();
    let _ = lightbox.prev();
    lightbox.close();
    let _ = lightbox.set_photos(sequence(&["x.jpg"]));
    lightbox.destroy();

    assert!(lightbox.is_destroyed());
    assert!(!lightbox.is_open());
    assert!(lightbox.photos().is_empty());
}

#[tokio::test]
async fn default_loader_feeds_scanned_directory_into_lightbox() {
    let dir = tempdir().expect("temp dir");
    write_png(&dir.path().join("b.png"), 3, 2);
    write_png(&dir.path().join("a.png"), 4, 5);

    let photos = scanner::scan_directory(dir.path()).expect("scan");
    assert_eq!(photos.len(), 2);

    let loader = Arc::new(DefaultImageLoader::new());
    let mut lightbox = State::new(photos.clone(), Hooks::new(), loader.clone());
    let _ = lightbox.open(0);
    let token = lightbox.load_token();

    // Run the same load the lightbox scheduled and hand the result back.
    let result = loader.load(&photos[0].image_url).await;
    lightbox.handle_message(Message::ImageLoaded { token, result });

    let displayed = lightbox.displayed().expect("photo decoded");
    assert_eq!((displayed.image.width, displayed.image.height), (4, 5));
    assert_eq!(lightbox.current_photo().and_then(|p| p.title.as_deref()), Some("a"));
}

#[tokio::test]
async fn default_loader_reports_missing_file() {
    let dir = tempdir().expect("temp dir");
    let missing = dir.path().join("gone.png");

    let result = DefaultImageLoader::new()
        .load(&missing.to_string_lossy())
        .await;

    assert!(matches!(result, Err(LoadError::NotFound(_))));
}

#[test]
fn settings_file_drives_options_and_language() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.general.language = Some("fr".to_string());
    saved.lightbox = LightboxConfig {
        swipe_threshold_px: Some(1_000.0),
        show_counter: Some(false),
        show_captions: Some(true),
        close_on_backdrop: Some(false),
    };
    config::save_to_path(&saved, &path).expect("save config");

    let loaded = config::load_from_path(&path).expect("load config");
    let options = Options::from(&loaded);
    assert_eq!(options.swipe_threshold.value(), config::MAX_SWIPE_THRESHOLD_PX);
    assert!(!options.show_counter);
    assert!(!options.close_on_backdrop);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("lightbox-next"), "Photo suivante");
}
