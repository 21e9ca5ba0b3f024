// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
Usage: iced_gallery [OPTIONS]

Options:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --limit <COUNT>        Number of photos to request
  --backend <NAME>       Listing API: jsonplaceholder or picsum
  --config-dir <PATH>    Directory holding settings.toml
  -h, --help             Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        limit: args.opt_value_from_str("--limit")?,
        backend: args.opt_value_from_str("--backend")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iced_gallery=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{USAGE}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    tracing::info!(?flags, "starting gallery");
    app::run(flags)
}
