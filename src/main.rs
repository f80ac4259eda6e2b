mod blackboard; // shared render/flight state
mod bus; // broadcast topics between the render loop and the runtime
mod graphics; // macroquad front end
mod settings; // layered configuration

use anyhow::Context;
use blackboard::{Blackboard, raise_fault};
use bus::Topic;
use mascot_navigation::{FlightCommand, Frame, Mascot, PathPlanner, run_flight_task};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Mascot flight started. Loading settings and spawning the flight task...");

    let settings = settings::load_settings().context("failed to load settings")?;
    let planner = PathPlanner::new(settings.planner).context("invalid planner settings")?;

    let tokio_rt = tokio::runtime::Runtime::new().context("failed to build Tokio runtime")?;

    let bb: Blackboard = Arc::default();
    let command_topic: Topic<FlightCommand> = Topic::new(16);
    let frame_topic: Topic<Frame> = Topic::new(256);
    let frame_rx_for_vis = frame_topic.subscribe();

    tokio_rt.spawn({
        let bb = Arc::clone(&bb);
        let mut command_rx = command_topic.subscribe();
        let frame_tx = frame_topic.sender();
        let mascot = Mascot::new(planner, settings.animation.start());
        let interval = settings.animation.frame_interval();
        async move {
            match run_flight_task(mascot, &mut command_rx, frame_tx, interval).await {
                Ok(()) => info!("Flight task finished."),
                Err(e) => {
                    error!("Flight task failed: {:?}", e);
                    raise_fault(&bb, &format!("flight task: {e}"));
                }
            }
        }
    });

    let scene = graphics::Scene::new(
        settings.planner.cell_size,
        settings.animation.card,
        settings.animation.trail_length,
    );
    macroquad::Window::from_config(
        graphics::window_conf(&settings.window),
        graphics::run_visualization_loop(scene, bb, frame_rx_for_vis, command_topic),
    );

    info!("Window closed. Shutting down.");
    Ok(())
}
