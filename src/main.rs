// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use iced_toasts::config::paths;
use iced_toasts::logging;

const HELP: &str = "\
iced_toasts demo

USAGE:
  iced_toasts [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Read settings.toml from DIR
  --reduced-motion     Never animate toasts
  -h, --help           Print this help
";

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            tracing::error!(%err, "invalid --config-dir");
            eprint!("{HELP}");
            std::process::exit(2);
        }
    };

    let flags = Flags {
        reduced_motion: args.contains("--reduced-motion"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    paths::init_cli_override(config_dir);
    app::run(flags)
}
