//! Scene engine: the tick loop around the castle scene.
//!
//! `SceneEngine` owns the scene, processes player commands, runs the systems
//! and produces `SceneSnapshot`s. Headless, so runs are reproducible from a
//! seed.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use castlez_collision::{Resolver, Scene};
use castlez_core::commands::PlayerCommand;
use castlez_core::components::WalkIntent;
use castlez_core::constants::DEFAULT_SEED;
use castlez_core::error::{Capability, CapabilityError};
use castlez_core::events::SceneEvent;
use castlez_core::state::SceneSnapshot;
use castlez_core::types::{SceneTime, Vec2};

use crate::systems;
use crate::world_setup::{self, CastleWorld};

/// Configuration for a new scene.
pub struct SceneConfig {
    /// RNG seed for warp rolls. Same seed = same run.
    pub seed: u64,
    /// Where the knight starts.
    pub knight_start: Vec2,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            knight_start: Vec2::ZERO,
        }
    }
}

/// The scene engine. Owns the scene and all per-run state.
pub struct SceneEngine {
    scene: Scene,
    resolver: Resolver,
    layout: CastleWorld,
    time: SceneTime,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    drop_marker: bool,
    events: Vec<SceneEvent>,
}

impl SceneEngine {
    /// Build the castle scene.
    pub fn new(config: SceneConfig) -> Result<Self, CapabilityError> {
        let mut scene = Scene::new();
        let layout = world_setup::setup_castle_world(&mut scene, config.knight_start)?;

        Ok(Self {
            scene,
            resolver: Resolver::default(),
            layout,
            time: SceneTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            drop_marker: false,
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> Result<SceneSnapshot, CapabilityError> {
        self.process_commands()?;
        self.run_systems()?;
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.scene, &self.resolver, &self.time, events)
    }

    pub fn time(&self) -> SceneTime {
        self.time
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn layout(&self) -> &CastleWorld {
        &self.layout
    }

    /// Is the knight standing on a collider?
    pub fn knight_on_floor(&mut self) -> Result<bool, CapabilityError> {
        self.resolver.is_on_floor(&mut self.scene, self.layout.knight)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) -> Result<(), CapabilityError> {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command)?;
        }
        Ok(())
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) -> Result<(), CapabilityError> {
        match command {
            PlayerCommand::Walk { x, y } => {
                let knight = self.layout.knight;
                let mut intent = self
                    .scene
                    .world_mut()
                    .get::<&mut WalkIntent>(knight)
                    .map_err(|_| CapabilityError::new(knight, Capability::Entity))?;
                let step = Vec2::new(f32::from(x.clamp(-1, 1)), f32::from(y.clamp(-1, 1)));
                intent.direction = (intent.direction + step).clamp(Vec2::NEG_ONE, Vec2::ONE);
            }
            PlayerCommand::DropMarker => {
                self.drop_marker = true;
            }
        }
        Ok(())
    }

    /// Run all systems in order.
    fn run_systems(&mut self) -> Result<(), CapabilityError> {
        // 1. Walking
        systems::walk::run(&mut self.scene, &self.resolver)?;
        // 2. Marker drop, after the knight has moved
        if std::mem::take(&mut self.drop_marker) {
            let event = systems::markers::drop_at(&mut self.scene, self.layout.knight)?;
            self.events.push(event);
        }
        // 3. Warp points
        systems::warp::run(&mut self.scene, &mut self.rng, &mut self.events)?;
        Ok(())
    }
}
