// SPDX-License-Identifier: MPL-2.0
use photo_lightbox::app::{self, Flags};
use photo_lightbox::logging;

const HELP: &str = "\
Photo Lightbox

USAGE:
  photo_lightbox [OPTIONS] [SOURCE]...

SOURCES:
  Image files, folders, http(s):// or file:// URLs, and .toml manifests.

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --start <INDEX>        Open the lightbox on this photo (1-based)
  --config-dir <DIR>     Read settings.toml from DIR
  --log-level <FILTER>   Log level or tracing filter (default: info)
  -h, --help             Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let log_level: Option<String> = args.opt_value_from_str("--log-level").unwrap_or_else(|err| {
        eprintln!("Invalid --log-level: {err}");
        None
    });
    logging::init(log_level.as_deref());

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --lang");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --config-dir");
        None
    });
    let start_index = args
        .opt_value_from_str::<_, usize>("--start")
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid --start");
            None
        })
        .map(|position| position.saturating_sub(1));

    let sources = args
        .finish()
        .into_iter()
        .filter_map(|arg| match arg.into_string() {
            Ok(source) => Some(source),
            Err(raw) => {
                tracing::warn!(source = ?raw, "skipping non UTF-8 argument");
                None
            }
        })
        .collect();

    app::run(Flags {
        lang,
        sources,
        start_index,
        config_dir,
    })
}
