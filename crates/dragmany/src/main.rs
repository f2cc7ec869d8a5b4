use std::process::ExitCode;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use winit::dpi::LogicalSize;

use dragmany::config::SEED_ENV;
use dragmany::{DemoConfig, DragApp, Scene};
use dragmany_engine::device::GpuInit;
use dragmany_engine::logging::{LoggingConfig, init_logging};
use dragmany_engine::window::{Runtime, RuntimeConfig};

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let seed_var = std::env::var(SEED_ENV).ok();
    let config = match DemoConfig::from_args(std::env::args_os().skip(1), seed_var.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(e.exit_code());
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dragmany: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: DemoConfig) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let scene = Scene::random(config.count, &mut rng);
    log::info!(
        "generated {} shapes (seed: {})",
        scene.len(),
        config.seed.map_or_else(|| "random".to_string(), |s| s.to_string())
    );

    let side = f64::from(config.panel_size);
    let runtime = RuntimeConfig {
        title:        config.title,
        initial_size: LogicalSize::new(side, side),
        resizable:    false,
    };

    Runtime::run(runtime, GpuInit::default(), DragApp::new(scene))
}
