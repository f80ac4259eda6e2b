use macroquad::prelude::*;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

use mascot_geometry::{ElementRect, Point};
use mascot_navigation::{FlightCommand, Frame, StateKind, Viewport};

use crate::blackboard::{Blackboard, snapshot, touch_cmd};
use crate::bus::Topic;
use crate::settings::WindowSettings;

const MASCOT_RADIUS: f32 = 18.0;
const ARM_LENGTH: f32 = 30.0;

// Function to configure the macroquad window
pub fn window_conf(settings: &WindowSettings) -> Conf {
    Conf {
        window_title: settings.title.clone(),
        window_width: settings.width,
        window_height: settings.height,
        high_dpi: true,
        ..Default::default()
    }
}

/// Static parts of the picture.
pub struct Scene {
    cell_size: f64,
    card: ElementRect,
    trail_length: usize,
}

impl Scene {
    pub fn new(cell_size: f64, card: ElementRect, trail_length: usize) -> Self {
        Self {
            cell_size,
            card,
            trail_length,
        }
    }
}

pub async fn run_visualization_loop(
    scene: Scene,
    bb: Blackboard,
    mut frame_rx: broadcast::Receiver<Arc<Frame>>,
    commands: Topic<FlightCommand>,
) {
    let mut trail: VecDeque<Point> = VecDeque::with_capacity(scene.trail_length);
    let mut current: Option<Frame> = None;

    info!("Visualization loop starting inside graphics module...");

    loop {
        // Drain everything the flight task produced since the last render.
        loop {
            match frame_rx.try_recv() {
                Ok(frame) => {
                    if trail.len() == scene.trail_length {
                        trail.pop_front();
                    }
                    trail.push_back(frame.position);
                    current = Some(*frame);
                }
                Err(broadcast::error::TryRecvError::Empty) => break,
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    warn!("Visualization frame receiver lagged by {} frames.", n);
                }
                Err(broadcast::error::TryRecvError::Closed) => {
                    error!("Frame channel closed. Exiting visualization loop.");
                    return;
                }
            }
        }

        {
            let mut state = bb.write();
            state.viewport = Viewport::new(screen_width() as f64, screen_height() as f64);
            state.frame = current;
        }
        let state = snapshot(&bb);

        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            let target = Point::new(x as f64, y as f64);
            info!(%target, "Fly-to requested");
            commands.publish(FlightCommand::FlyTo {
                target,
                viewport: state.viewport,
            });
            touch_cmd(&bb);
        }
        if is_key_pressed(KeyCode::H) {
            info!("Hold requested");
            commands.publish(FlightCommand::Hold { card: scene.card });
            touch_cmd(&bb);
        }
        if is_key_pressed(KeyCode::R) {
            info!("Release requested");
            commands.publish(FlightCommand::Release);
            touch_cmd(&bb);
        }

        clear_background(LIGHTGRAY);
        draw_grid(scene.cell_size as f32);
        draw_card(&scene.card, state.frame.map(|f| f.state) == Some(StateKind::Holding));
        draw_trail(&trail);
        if let Some(frame) = &state.frame {
            draw_mascot(frame);
        }

        let status = match state.frame {
            Some(f) => format!(
                "Mascot: {} at {} tilt {:.1}",
                f.state, f.position, f.rotation
            ),
            None => "Mascot: waiting for first frame".to_string(),
        };
        draw_text(&status, 10.0, 20.0, 20.0, BLACK);
        draw_text(
            &format!(
                "Last command {:.1}s ago | click: fly, H: hold card, R: release",
                state.last_cmd_ts.elapsed().as_secs_f32()
            ),
            10.0,
            40.0,
            20.0,
            BLACK,
        );
        for (i, fault) in state.faults.iter().enumerate() {
            draw_text(fault, 10.0, 60.0 + 20.0 * i as f32, 20.0, RED);
        }

        next_frame().await
    }
}

fn draw_grid(cell: f32) {
    let (w, h) = (screen_width(), screen_height());
    let mut x = 0.0;
    while x <= w {
        draw_line(x, 0.0, x, h, 1.0, GRAY);
        x += cell;
    }
    let mut y = 0.0;
    while y <= h {
        draw_line(0.0, y, w, y, 1.0, GRAY);
        y += cell;
    }
}

fn draw_card(card: &ElementRect, held: bool) {
    let (x, y, w, h) = (
        card.left as f32,
        card.top as f32,
        card.width as f32,
        card.height as f32,
    );
    draw_rectangle(x, y, w, h, WHITE);
    draw_rectangle_lines(x, y, w, h, 3.0, if held { DARKGREEN } else { DARKGRAY });
    draw_text("Results", x + 12.0, y + 28.0, 24.0, DARKGRAY);
}

fn draw_trail(trail: &VecDeque<Point>) {
    for (a, b) in trail.iter().zip(trail.iter().skip(1)) {
        draw_line(a.x as f32, a.y as f32, b.x as f32, b.y as f32, 2.0, SKYBLUE);
    }
}

fn draw_mascot(frame: &Frame) {
    let (x, y) = (frame.position.x as f32, frame.position.y as f32);
    let body = match frame.state {
        StateKind::Idle => BLUE,
        StateKind::Flying => DARKBLUE,
        StateKind::Holding => DARKGREEN,
    };
    draw_circle(x, y, MASCOT_RADIUS, body);

    // Arm reaching right, tilted clockwise (screen y points down).
    let tilt = (frame.rotation as f32).to_radians();
    let arm_end = vec2(x + ARM_LENGTH * tilt.cos(), y + ARM_LENGTH * tilt.sin());
    draw_line(x, y, arm_end.x, arm_end.y, 4.0, body);
    draw_circle(x + 6.0, y - 5.0, 4.0, WHITE);
}
