use parking_lot::RwLock;
use std::{sync::Arc, time::Instant};

use mascot_navigation::{Frame, Viewport};

/// Latest shared view of the animation, written by the render loop and the flight task.
#[derive(Clone)]
pub struct State {
    pub viewport: Viewport,
    pub frame: Option<Frame>,
    pub last_cmd_ts: Instant,
    pub faults: Vec<String>,
}

impl Default for State {
    fn default() -> Self {
        State {
            viewport: Viewport::new(0.0, 0.0),
            frame: None,
            last_cmd_ts: Instant::now(),
            faults: Vec::new(),
        }
    }
}

pub type Blackboard = Arc<RwLock<State>>;

pub fn snapshot(bb: &Blackboard) -> State {
    (*bb.read()).clone()
}

pub fn touch_cmd(bb: &Blackboard) {
    bb.write().last_cmd_ts = Instant::now();
}

pub fn raise_fault(bb: &Blackboard, msg: &str) {
    let mut g = bb.write();
    if !g.faults.iter().any(|s| s == msg) {
        g.faults.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faults_are_deduplicated() {
        let bb: Blackboard = Arc::default();
        raise_fault(&bb, "flight task stopped");
        raise_fault(&bb, "flight task stopped");
        raise_fault(&bb, "invalid viewport");
        assert_eq!(snapshot(&bb).faults.len(), 2);
    }

    #[test]
    fn test_snapshot_carries_viewport_and_frame() {
        use mascot_geometry::Point;
        use mascot_navigation::StateKind;

        let bb: Blackboard = Arc::default();
        let frame = Frame {
            position: Point::new(150.0, 250.0),
            rotation: 0.0,
            state: StateKind::Flying,
        };
        {
            let mut state = bb.write();
            state.viewport = Viewport::new(1000.0, 800.0);
            state.frame = Some(frame);
        }
        let state = snapshot(&bb);
        assert_eq!(state.viewport, Viewport::new(1000.0, 800.0));
        assert_eq!(state.frame, Some(frame));
    }

    #[test]
    fn test_touch_cmd_moves_timestamp_forward() {
        let bb: Blackboard = Arc::default();
        let before = snapshot(&bb).last_cmd_ts;
        touch_cmd(&bb);
        assert!(snapshot(&bb).last_cmd_ts >= before);
    }
}
