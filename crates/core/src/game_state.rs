//! Game state module - the game controller
//!
//! Owns the tower, the active mover, and the run state machine
//! (`Setup -> Running -> Ended`). All inputs are plain method calls that
//! mutate this one struct; rendering reads it through [`GameSnapshot`].
//!
//! The pause between a placement and the next mover is a deferred spawn
//! tagged with the generation it was scheduled in. Every setup bumps the
//! generation, so a spawn scheduled before a restart can never fire into
//! the fresh tower.

use tracing::{debug, info};

use crate::config::{ConfigError, GameConfig};
use crate::mover::Mover;
use crate::placement::{self, Placement};
use crate::snapshot::GameSnapshot;
use crate::tower::{Block, Tower};
use crate::types::*;

/// What a call to [`GameState::place`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaceOutcome {
    /// Not running, or no mover is active. Nothing changed.
    Ignored,
    /// A block was added and the next mover is scheduled.
    Stacked { block: Block, trimmed: f64 },
    /// A block was added and the tower reached the win target.
    Won { block: Block },
    /// The mover missed the top block; the tower is unchanged.
    Lost { overlap: f64 },
}

/// A scheduled mover spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSpawn {
    generation: u32,
    remaining_ms: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    tower: Tower,
    mover: Option<Mover>,
    run_state: RunState,
    /// Whether the per-frame tick loop is live.
    loop_running: bool,
    /// Bumped on every setup; invalidates pending spawns.
    generation: u32,
    pending_spawn: Option<PendingSpawn>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id of spawned movers.
    mover_id: u32,
    /// Ticks processed in the current run.
    ticks: u32,
}

impl GameState {
    /// Create a game in `Setup` with only the base block.
    ///
    /// The win target is clamped to what the tower can hold; call
    /// [`GameState::try_new`] to reject an invalid config instead.
    pub fn new(mut config: GameConfig) -> Self {
        config.win_target = config.win_target.clamp(1, MAX_TOWER_HEIGHT as u32 - 1);

        Self {
            tower: Tower::new(config.base_left(), config.base_width),
            config,
            mover: None,
            run_state: RunState::Setup,
            loop_running: false,
            generation: 0,
            pending_spawn: None,
            episode_id: 0,
            mover_id: 0,
            ticks: 0,
        }
    }

    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Leave `Setup` and start the first run.
    pub fn start(&mut self) -> bool {
        if self.run_state != RunState::Setup {
            return false;
        }
        self.setup();
        true
    }

    /// Reset the tower and start a new run.
    ///
    /// Accepted while running or ended. In `Setup` nothing has been built yet,
    /// so this is a no-op; use [`GameState::start`].
    pub fn restart(&mut self) -> bool {
        if self.run_state == RunState::Setup {
            return false;
        }
        self.episode_id = self.episode_id.wrapping_add(1);
        self.setup();
        true
    }

    fn setup(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending_spawn = None;
        self.tower.reset(self.config.base_left(), self.config.base_width);
        self.ticks = 0;
        self.run_state = RunState::Running;
        self.spawn_mover();
        self.loop_running = true;

        debug!(
            episode = self.episode_id,
            generation = self.generation,
            "run set up"
        );
    }

    fn spawn_mover(&mut self) {
        let top = self.tower.top();
        self.mover = Some(Mover::spawn(top.width, self.tower.len() as u32));
        self.mover_id = self.mover_id.wrapping_add(1);
    }

    /// Stop the tick loop. Safe to call any number of times.
    pub fn stop_loop(&mut self) {
        self.loop_running = false;
    }

    fn end(&mut self, outcome: Outcome) {
        self.run_state = RunState::Ended {
            win: outcome == Outcome::Win,
        };
        self.mover = None;
        self.pending_spawn = None;
        self.stop_loop();

        info!(
            ?outcome,
            level = self.tower.level(),
            episode = self.episode_id,
            "run ended"
        );
    }

    /// Advance one frame.
    ///
    /// Fires a due deferred spawn first, then moves the mover, so a freshly
    /// spawned mover is already inside the field when the tick returns.
    /// Returns whether anything moved or spawned.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.run_state.is_running() || !self.loop_running {
            return false;
        }

        self.ticks = self.ticks.wrapping_add(1);
        let mut changed = false;

        if let Some(mut pending) = self.pending_spawn.take() {
            if pending.generation != self.generation {
                debug!(
                    stale = pending.generation,
                    current = self.generation,
                    "dropping stale spawn"
                );
            } else {
                pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
                if pending.remaining_ms == 0 {
                    self.spawn_mover();
                    changed = true;
                } else {
                    self.pending_spawn = Some(pending);
                }
            }
        }

        if let Some(mover) = self.mover.as_mut() {
            mover.advance(self.config.mover_speed, self.config.field_width);
            changed = true;
        }

        changed
    }

    /// Drop the mover onto the tower.
    ///
    /// Fires at most once per mover: after a hit the mover is cleared until
    /// the deferred spawn runs, so repeated calls are ignored.
    pub fn place(&mut self) -> PlaceOutcome {
        if !self.run_state.is_running() {
            return PlaceOutcome::Ignored;
        }
        let Some(mover) = self.mover.take() else {
            return PlaceOutcome::Ignored;
        };

        let prev = self.tower.top();
        match placement::resolve(&prev, &mover) {
            Placement::Missed => {
                let overlap = placement::overlap(&prev, &mover).width;
                debug!(overlap, mover_left = mover.left, "placement missed");
                self.end(Outcome::Loss);
                PlaceOutcome::Lost { overlap }
            }
            Placement::Stacked { left, width } => {
                let Some(block) = self.tower.push(left, width) else {
                    // Unreachable: new() clamps the win target below capacity.
                    self.end(Outcome::Win);
                    return PlaceOutcome::Won { block: prev };
                };
                debug!(
                    layer = block.layer,
                    left = block.left,
                    width = block.width,
                    "block stacked"
                );

                if self.tower.len() > self.config.win_target as usize {
                    self.end(Outcome::Win);
                    return PlaceOutcome::Won { block };
                }

                self.pending_spawn = Some(PendingSpawn {
                    generation: self.generation,
                    remaining_ms: self.config.spawn_delay_ms,
                });
                PlaceOutcome::Stacked {
                    block,
                    trimmed: mover.width - block.width,
                }
            }
        }
    }

    /// Apply an input action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Place => self.place() != PlaceOutcome::Ignored,
            GameAction::Restart => self.restart(),
            GameAction::Activate => match self.run_state {
                RunState::Setup => self.start(),
                RunState::Running => self.place() != PlaceOutcome::Ignored,
                RunState::Ended { .. } => self.restart(),
            },
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.run_state.outcome()
    }

    /// Result text for display, once the run has ended.
    pub fn message(&self) -> Option<&'static str> {
        self.outcome().map(|o| o.message())
    }

    /// Placements above the base.
    pub fn level(&self) -> u32 {
        self.tower.level()
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    pub fn mover(&self) -> Option<Mover> {
        self.mover
    }

    pub fn loop_running(&self) -> bool {
        self.loop_running
    }

    pub fn spawn_pending(&self) -> bool {
        self.pending_spawn.is_some()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn mover_id(&self) -> u32 {
        self.mover_id
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    #[cfg(test)]
    pub(crate) fn mover_mut(&mut self) -> Option<&mut Mover> {
        self.mover.as_mut()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.field_width = self.config.field_width;
        out.field_height = self.config.field_height;
        out.layer_height = self.config.layer_height;
        out.win_target = self.config.win_target;
        out.blocks.clear();
        // Same capacity on both sides.
        let _ = out.blocks.try_extend_from_slice(self.tower.blocks());
        out.mover = self.mover;
        out.run_state = self.run_state;
        out.level = self.tower.level();
        out.message = self.message();
        out.loop_running = self.loop_running;
        out.spawn_pending = self.pending_spawn.is_some();
        out.episode_id = self.episode_id;
        out.mover_id = self.mover_id;
        out.tick = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
