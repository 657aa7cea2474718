//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no windowing or rendering), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::commands::PlayerCommand;
use skyraid_core::constants::MAX_TIME_SCALE;
use skyraid_core::enums::GamePhase;
use skyraid_core::events::GameEvent;
use skyraid_core::input::InputState;
use skyraid_core::state::GameStateSnapshot;
use skyraid_core::types::SimTime;

use crate::camera::Camera;
use crate::config::SimConfig;
use crate::registry::EnemyRegistry;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::wave_spawner::WaveSchedule;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    config: SimConfig,
    rng: ChaCha8Rng,
    registry: EnemyRegistry,
    camera: Camera,
    input: InputState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    wave_schedule: WaveSchedule,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            registry: EnemyRegistry::new(),
            camera: Camera::default(),
            input: InputState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            wave_schedule: WaveSchedule::default(),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the held-key state used by subsequent ticks.
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Advance the simulation by one tick of `config.dt`.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.step(self.config.dt)
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    pub fn step(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();

        if matches!(self.phase, GamePhase::Active | GamePhase::GameOver) {
            self.run_systems(dt);
            self.time.advance(dt);

            if self.phase == GamePhase::Active && self.score.ship_destroyed {
                info!(
                    "game over at tick {} ({} of {} enemies destroyed)",
                    self.time.tick, self.score.enemies_destroyed, self.score.enemies_deployed
                );
                self.phase = GamePhase::GameOver;
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.camera,
            events,
            &self.score,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn registry(&self) -> &EnemyRegistry {
        &self.registry
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn wave_schedule(&self) -> &WaveSchedule {
        &self.wave_schedule
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMission => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.start_mission();
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase != GamePhase::MainMenu {
                    self.reset_world();
                    self.input = InputState::default();
                    self.phase = GamePhase::MainMenu;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
            }
        }
    }

    /// Clear the world and deploy the ship plus a fresh wave schedule.
    fn start_mission(&mut self) {
        self.reset_world();

        let ship = world_setup::spawn_ship(&mut self.world, &self.config.ship);
        self.camera.set_target(ship);

        self.wave_schedule = if let Some(waves) = &self.config.waves {
            WaveSchedule::from_entries(waves.clone())
        } else if let Some(count) = self.config.random_waves {
            WaveSchedule::random(&mut self.rng, count)
        } else {
            WaveSchedule::default_mission()
        };

        self.phase = GamePhase::Active;
        info!(
            "mission started: {} waves, {} enemies",
            self.wave_schedule.waves.len(),
            self.wave_schedule.total_enemies()
        );
    }

    fn reset_world(&mut self) {
        self.world.clear();
        self.registry.clear();
        self.camera.clear();
        self.despawn_buffer.clear();
        self.events.clear();
        self.wave_schedule = WaveSchedule::default();
        self.score = ScoreState::default();
        self.time = SimTime::default();
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Input
        let shots = systems::ship::process_input(
            &mut self.world,
            &self.input,
            dt,
            &self.config.missile,
            &mut self.events,
        );
        self.score.shots_fired += shots;
        // 2. Wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.registry,
            &mut self.wave_schedule,
            self.time.elapsed_secs,
            &self.config.enemy,
            &mut self.events,
            &mut self.score,
        );
        // 3. Per-entity update
        systems::ship::update(&mut self.world, dt);
        let arrivals = systems::enemy::update(
            &mut self.world,
            dt,
            self.config.happy_spin(),
            &mut self.events,
        );
        self.score.enemies_arrived += arrivals;
        systems::missile::update(&mut self.world, dt);
        systems::bomb::update(&mut self.world, dt);
        // 4. Collision
        if systems::ship::late_update(
            &mut self.world,
            &self.registry,
            &mut self.camera,
            self.config.bomb_lifetime_secs,
            &mut self.events,
        ) {
            self.score.ship_destroyed = true;
        }
        let hits =
            systems::missile::late_update(&mut self.world, &self.registry, &mut self.events);
        // 5. Markers follow their enemies
        let orphans = systems::marker::run(&mut self.world);
        if hits > 0 || orphans > 0 {
            debug!(
                "tick {}: {} missile hits, {} orphaned markers",
                self.time.tick, hits, orphans
            );
        }
        // 6. Cleanup
        systems::cleanup::run(
            &mut self.world,
            &mut self.registry,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.score,
        );
    }
}
