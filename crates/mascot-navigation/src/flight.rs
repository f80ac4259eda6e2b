//! Mascot flight state machine and the task that animates it.
//!
//! The mascot is always in exactly one of three states:
//!
//! - **Idle**: resting at a position.
//! - **Flying**: consuming a planned path, one sample per animation frame.
//! - **Holding**: resting beside a card, tilted towards it.
//!
//! Transitions happen on commands (`fly_to`, `hold`, `release`) and when a
//! flight runs out of samples. Planning is delegated to the stateless
//! [`PathPlanner`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use mascot_geometry::{
    ElementRect, Point, calculate_holding_position, find_shortest_path, generate_smooth_path,
};
use tokio::sync::broadcast;
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::error::NavigationError;
use crate::grid::Viewport;
use crate::planner::PathPlanner;

/// What the mascot does once the current flight ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arrival {
    /// Go idle at the last sample.
    Rest,
    /// Hold at the last sample with the given tilt (degrees).
    Hold {
        /// Tilt towards the card (degrees).
        rotation: f64,
    },
}

/// Full state of the mascot.
#[derive(Debug, Clone, PartialEq)]
pub enum MascotState {
    /// Resting, not holding anything.
    Idle {
        /// Resting position.
        position: Point,
    },
    /// Following `path`; `frame` is the index of the next sample to show.
    Flying {
        /// Dense per-frame samples.
        path: Vec<Point>,
        /// Next sample index.
        frame: usize,
        /// State entered after the last sample.
        arrival: Arrival,
    },
    /// Resting beside a card.
    Holding {
        /// Resting position.
        position: Point,
        /// Tilt towards the card (degrees).
        rotation: f64,
    },
}

impl MascotState {
    /// Discriminant without the payload.
    pub fn kind(&self) -> StateKind {
        match self {
            MascotState::Idle { .. } => StateKind::Idle,
            MascotState::Flying { .. } => StateKind::Flying,
            MascotState::Holding { .. } => StateKind::Holding,
        }
    }
}

/// Which state the mascot is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    /// See [`MascotState::Idle`].
    Idle,
    /// See [`MascotState::Flying`].
    Flying,
    /// See [`MascotState::Holding`].
    Holding,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKind::Idle => write!(f, "idle"),
            StateKind::Flying => write!(f, "flying"),
            StateKind::Holding => write!(f, "holding"),
        }
    }
}

/// One animation frame: where to draw the mascot and how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Mascot position (px).
    pub position: Point,
    /// Mascot tilt (degrees).
    pub rotation: f64,
    /// State after this frame.
    pub state: StateKind,
}

/// Commands accepted by [`run_flight_task`].
#[derive(Debug, Clone, PartialEq)]
pub enum FlightCommand {
    /// Fly to a screen position, snapped to the grid of `viewport`.
    FlyTo {
        /// Target position (px).
        target: Point,
        /// Viewport at the time of the request.
        viewport: Viewport,
    },
    /// Fly beside a card and hold it.
    Hold {
        /// Card bounding box.
        card: ElementRect,
    },
    /// Let go of the held card.
    Release,
}

/// The mascot: a state machine driven one frame at a time.
#[derive(Debug, Clone)]
pub struct Mascot {
    planner: PathPlanner,
    state: MascotState,
    position: Point,
    rotation: f64,
}

impl Mascot {
    /// Creates an idle mascot at `position`.
    pub fn new(planner: PathPlanner, position: Point) -> Self {
        Self {
            planner,
            state: MascotState::Idle { position },
            position,
            rotation: 0.0,
        }
    }

    /// Gets the current state.
    pub fn state(&self) -> &MascotState {
        &self.state
    }

    /// Gets the position last shown.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Gets the tilt last shown (degrees).
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Plans a flight from the current position to `target` and starts it.
    ///
    /// Allowed from any state; a flight in progress is replaced and a held
    /// card is dropped. On a planning error the state is left untouched.
    pub fn fly_to(&mut self, viewport: Viewport, target: Point) -> Result<(), NavigationError> {
        let path = self.planner.plan(viewport, self.position, target)?;
        info!(from = %self.position, to = %target, frames = path.len(), "Mascot taking off");
        self.start_flight(path, Arrival::Rest);
        Ok(())
    }

    /// Flies along an upward arc to the holding position beside `card`.
    ///
    /// The holding position is reached exactly rather than snapped to the grid.
    pub fn hold(&mut self, card: &ElementRect) {
        let holding = calculate_holding_position(card, self.position);
        let arc = find_shortest_path(self.position, holding.position);
        let path = generate_smooth_path(&arc, self.planner.config().segments_per_span);
        info!(to = %holding, frames = path.len(), "Mascot flying to hold card");
        self.start_flight(
            path,
            Arrival::Hold {
                rotation: holding.rotation,
            },
        );
    }

    /// Drops the held card and goes idle in place.
    ///
    /// # Returns
    /// `true` if the mascot was holding, `false` otherwise (no change).
    pub fn release(&mut self) -> bool {
        match self.state {
            MascotState::Holding { position, .. } => {
                info!(at = %position, "Mascot released card");
                self.state = MascotState::Idle { position };
                self.rotation = 0.0;
                true
            }
            _ => false,
        }
    }

    /// Applies a command received from the driver.
    pub fn apply(&mut self, command: &FlightCommand) -> Result<(), NavigationError> {
        match command {
            FlightCommand::FlyTo { target, viewport } => self.fly_to(*viewport, *target),
            FlightCommand::Hold { card } => {
                self.hold(card);
                Ok(())
            }
            FlightCommand::Release => {
                self.release();
                Ok(())
            }
        }
    }

    /// Advances one animation frame.
    ///
    /// While flying, shows the next sample; showing the last sample moves the
    /// mascot into the flight's arrival state. Otherwise the resting position
    /// is shown again.
    pub fn tick(&mut self) -> Frame {
        if let MascotState::Flying {
            path,
            frame,
            arrival,
        } = &mut self.state
        {
            if let Some(&sample) = path.get(*frame) {
                self.position = sample;
                *frame += 1;
            }
            if *frame >= path.len() {
                let arrival = *arrival;
                self.arrive(arrival);
            }
        }

        Frame {
            position: self.position,
            rotation: self.rotation,
            state: self.state.kind(),
        }
    }

    fn start_flight(&mut self, path: Vec<Point>, arrival: Arrival) {
        self.rotation = 0.0;
        self.state = MascotState::Flying {
            path,
            frame: 0,
            arrival,
        };
    }

    fn arrive(&mut self, arrival: Arrival) {
        let position = self.position;
        self.state = match arrival {
            Arrival::Rest => MascotState::Idle { position },
            Arrival::Hold { rotation } => {
                self.rotation = rotation;
                MascotState::Holding { position, rotation }
            }
        };
        debug!(at = %position, state = %self.state.kind(), "Mascot landed");
    }
}

/// Frame-rate animation task.
///
/// # Arguments
/// * `mascot` - The state machine to drive.
/// * `command_rx` - A Tokio broadcast receiver for `Arc<FlightCommand>`s.
/// * `frame_tx` - A Tokio broadcast sender to publish each `Arc<Frame>`.
/// * `frame_interval` - Time between frames.
///
/// Runs until the command channel closes, which is reported as an error.
pub async fn run_flight_task(
    mut mascot: Mascot,
    command_rx: &mut broadcast::Receiver<Arc<FlightCommand>>,
    frame_tx: broadcast::Sender<Arc<Frame>>,
    frame_interval: Duration,
) -> anyhow::Result<()> {
    info!(
        position = %mascot.position(),
        interval_ms = frame_interval.as_millis() as u64,
        "Flight task started"
    );
    let mut ticker = time::interval(frame_interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let frame = mascot.tick();
                if frame_tx.receiver_count() > 0 {
                    if let Err(e) = frame_tx.send(Arc::new(frame)) {
                        warn!("Failed to publish frame from flight task: {}", e);
                    }
                }
            }
            result = command_rx.recv() => {
                match result {
                    Ok(command) => {
                        debug!(?command, "Flight command received");
                        if let Err(e) = mascot.apply(&command) {
                            warn!(error = %e, ?command, "Flight command rejected");
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Command receiver lagged by {} messages in flight task.", n);
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        error!("Command channel closed. Flight task cannot continue.");
                        return Err(anyhow::anyhow!("Command channel closed for flight task"));
                    }
                }
            }
        }
    }
}
