// SPDX-License-Identifier: MPL-2.0
use raytracer_showcase::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
RayTracerNG showcase

USAGE:
  raytracer_showcase [OPTIONS]

OPTIONS:
  --catalog <PATH>      Load the gallery from a TOML catalog file
  --config-dir <DIR>    Read settings.toml from DIR
  --theme <dark|light>  Override the configured theme
  -h, --help            Print this help

ENVIRONMENT:
  RAYTRACER_SHOWCASE_CONFIG_DIR  Config directory when --config-dir is absent
  RUST_LOG                       Log filter (default: info)
";

fn init_tracing() {
    // RUST_LOG=raytracer_showcase=debug,wgpu=warn
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wgpu=warn,naga=warn,iced_wgpu=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();
}

/// Parses the command line. Returns `None` when help was requested.
fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        catalog: args.opt_value_from_str("--catalog")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_str("--theme")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::info!(?flags, "starting showcase");
    app::run(flags)
}
