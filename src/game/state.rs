use std::collections::VecDeque;

use log::{debug, info};

use crate::config::game::KILL_REWARD;
use crate::config::LevelParams;
use crate::error::ConfigError;
use crate::game::entities::{spawn_enemies, Enemy, Player};
use crate::game::events::GameEvent;
use crate::game::grid::Grid;
use crate::game::snapshot::Snapshot;
use crate::game::systems::{
    apply_intent, evaluate_status, remove_dead_enemies, resolve_pump, update_enemies, update_rocks, ChasePolicy,
    EnemyPolicy,
};
use crate::game::types::{Intent, TerminalStatus};

/// The whole simulation: one level, advanced one fixed step at a time.
#[derive(Debug)]
pub struct GameState {
    pub grid: Grid,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub tick: u64,
    pub status: TerminalStatus,
    pub(crate) params: LevelParams,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) policy: Box<dyn EnemyPolicy>,
    pending: VecDeque<Intent>,
}

impl GameState {
    /// Build a level with the seeded default enemy policy.
    pub fn new(params: LevelParams) -> Result<Self, ConfigError> {
        let policy = Box::new(ChasePolicy::from_params(&params));
        Self::with_policy(params, policy)
    }

    pub fn with_policy(params: LevelParams, policy: Box<dyn EnemyPolicy>) -> Result<Self, ConfigError> {
        params.validate()?;
        let mut state = Self {
            grid: Grid::generate(&params.layout),
            player: Player::new(params.layout.player),
            enemies: spawn_enemies(&params),
            score: 0,
            tick: 0,
            status: TerminalStatus::Running,
            params,
            events: Vec::new(),
            policy,
            pending: VecDeque::new(),
        };
        state.reset();
        Ok(state)
    }

    /// Restore the level to its initial layout. Score and tick go back to zero.
    pub fn reset(&mut self) {
        self.grid = Grid::generate(&self.params.layout);
        self.player = Player::new(self.params.layout.player);
        self.enemies = spawn_enemies(&self.params);
        self.score = 0;
        self.tick = 0;
        self.status = TerminalStatus::Running;
        self.events.clear();
        self.pending.clear();
        self.policy.reset();
        info!(
            "[GameState] Level reset size={}x{} enemies={} rocks={}",
            self.grid.width(),
            self.grid.height(),
            self.enemies.len(),
            self.grid.rocks().len()
        );
    }

    pub fn params(&self) -> &LevelParams {
        &self.params
    }

    /// Queue an intent. One queued intent is consumed per tick.
    pub fn queue_intent(&mut self, intent: Intent) {
        self.pending.push_back(intent);
    }

    pub fn pending_intents(&self) -> usize {
        self.pending.len()
    }

    /// Events produced by the latest tick.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.tick, self.score, self.status, &self.grid, &self.player, &self.enemies)
    }

    /// Advance the simulation by one step. Once the level is over this does nothing
    /// until `reset`.
    pub fn tick(&mut self) -> TerminalStatus {
        if self.status.is_terminal() {
            return self.status;
        }
        self.events.clear();
        self.tick += 1;

        let intent = self.pending.pop_front();
        apply_intent(self, intent);
        resolve_pump(self);
        update_enemies(self);
        update_rocks(self);
        remove_dead_enemies(self);
        self.status = evaluate_status(self);

        debug!(
            "[GameState] tick={} score={} enemies={} events={}",
            self.tick,
            self.score,
            self.enemies.len(),
            self.events.len()
        );
        if self.status.is_terminal() {
            info!("[GameState] Level over tick={} status={:?} score={}", self.tick, self.status, self.score);
        }
        self.status
    }

    /// One agent step: queue `intent` behind any pending ones and tick once.
    ///
    /// Returns the resulting snapshot, the reward and whether the level is over. The
    /// reward is the score gained this tick plus [`KILL_REWARD`] per enemy removed.
    pub fn step(&mut self, intent: Option<Intent>) -> (Snapshot, i64, bool) {
        let score_before = self.score;
        let enemies_before = self.enemies.len();
        if let Some(intent) = intent {
            self.queue_intent(intent);
        }
        let done = self.tick().is_terminal();

        let killed = enemies_before.saturating_sub(self.enemies.len()) as i64;
        let reward = i64::from(self.score) - i64::from(score_before) + killed * KILL_REWARD;
        (self.snapshot(), reward, done)
    }
}
