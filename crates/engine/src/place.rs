use crate::core::{GameState, PlaceOutcome};
use crate::types::RunState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    NotStarted,
    Ended,
    NoMover,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotStarted | PlaceError::Ended => "not_running",
            PlaceError::NoMover => "no_mover",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NotStarted => "game has not started",
            PlaceError::Ended => "run has ended; restart to play again",
            PlaceError::NoMover => "next block has not spawned yet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaceReport {
    Stacked { level: u32, trimmed: f64 },
    Won { level: u32 },
    Lost { level: u32 },
}

/// Place the mover, explaining why when the call is a no-op.
///
/// The state is untouched whenever this returns `Err`.
pub fn apply_place(state: &mut GameState) -> Result<PlaceReport, PlaceError> {
    match state.run_state() {
        RunState::Setup => return Err(PlaceError::NotStarted),
        RunState::Ended { .. } => return Err(PlaceError::Ended),
        RunState::Running => {}
    }

    if state.mover().is_none() {
        return Err(PlaceError::NoMover);
    }

    let level = state.level();
    match state.place() {
        PlaceOutcome::Ignored => Err(PlaceError::NoMover),
        PlaceOutcome::Stacked { block, trimmed } => Ok(PlaceReport::Stacked {
            level: block.layer,
            trimmed,
        }),
        PlaceOutcome::Won { block } => Ok(PlaceReport::Won { level: block.layer }),
        PlaceOutcome::Lost { .. } => Ok(PlaceReport::Lost { level }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TICK_MS;

    #[test]
    fn place_rejected_before_start() {
        let mut gs = GameState::default();
        let before = gs.snapshot();
        assert_eq!(apply_place(&mut gs), Err(PlaceError::NotStarted));
        assert_eq!(gs.snapshot(), before);
    }

    #[test]
    fn place_rejected_while_spawn_pending() {
        let mut gs = GameState::default();
        gs.start();
        for _ in 0..30 {
            gs.tick(TICK_MS);
        }
        assert!(matches!(
            apply_place(&mut gs),
            Ok(PlaceReport::Stacked { level: 1, .. })
        ));

        let err = apply_place(&mut gs).unwrap_err();
        assert_eq!(err, PlaceError::NoMover);
        assert_eq!(err.code(), "no_mover");
    }

    #[test]
    fn place_rejected_after_loss() {
        let mut gs = GameState::default();
        gs.start();
        // Mover is still off-field, so this misses.
        assert_eq!(apply_place(&mut gs), Ok(PlaceReport::Lost { level: 0 }));

        let err = apply_place(&mut gs).unwrap_err();
        assert_eq!(err, PlaceError::Ended);
        assert_eq!(err.code(), "not_running");
    }
}
