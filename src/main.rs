use std::process;

use clap::Parser;
use log::{error, info};

use thinkpad_rotate::backends::xrandr::XrandrBackend;
use thinkpad_rotate::cli::Cli;
use thinkpad_rotate::config::{self, Config};
use thinkpad_rotate::desktop::UnityLauncher;
use thinkpad_rotate::devices::xinput::XinputManager;
use thinkpad_rotate::hooks::ScriptHooks;
use thinkpad_rotate::logging;
use thinkpad_rotate::rotate::{self, Backends, Outcome};
use thinkpad_rotate::vkeyboard::SystemProcesses;

fn main() {
    let cli = Cli::parse();
    logging::init(u64::from(cli.verbose));

    let path = cli.config.clone().unwrap_or_else(config::default_path);
    let config = match Config::load_or_default(&path) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let mut display = XrandrBackend::new();
    let mut input = XinputManager::new();
    let mut launcher = UnityLauncher;
    let mut processes = SystemProcesses;
    let mut hooks = ScriptHooks;
    let mut backends = Backends {
        display: &mut display,
        input: &mut input,
        launcher: &mut launcher,
        processes: &mut processes,
        hooks: &mut hooks,
    };

    let result = rotate::run(&cli.request(), &config, &mut backends);
    match &result {
        Ok(Outcome::Rotated(rotation)) => info!("rotated to {}", rotation),
        Ok(Outcome::Aborted) => {}
        Err(e) => error!("{}", e),
    }
    process::exit(rotate::exit_code(&result));
}
