//! Scripted movement scenarios run through the full frame/tick loop.

use std::collections::BTreeSet;
use std::str::FromStr;

use glam::{Vec2, Vec3};
use quickmove_common::Transform;
use quickmove_input::{InputFrame, InputSource, ScriptedInput, SimpleController};
use quickmove_kernel::{
    AdvancedCharacter, Arena, CharacterEvent, KinematicBody, MoveMedium, MovementHost, Platform,
    WallPlane,
};
use quickmove_present::{CharacterPresenter, RecordingAnimator};

use crate::config::QuickConfig;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("unknown scenario `{0}` (expected one of: walk, wall-climb, double-jump, ledge)")]
    Unknown(String),
    #[error("scenario duration must be in (0, {max}] seconds, got {0}s", max = MAX_SCENARIO_SECONDS)]
    InvalidDuration(f32),
}

/// Longest simulated duration a scenario accepts.
pub const MAX_SCENARIO_SECONDS: f32 = 3600.0;

/// Built-in scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    /// Walk forward on flat ground.
    Walk,
    /// Run at a wall backed by a raised platform, jump, and climb.
    WallClimb,
    /// Jump twice in quick succession and land.
    DoubleJump,
    /// Walk off a ledge, jump late, then try once more.
    Ledge,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 4] = [
        ScenarioKind::Walk,
        ScenarioKind::WallClimb,
        ScenarioKind::DoubleJump,
        ScenarioKind::Ledge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScenarioKind::Walk => "walk",
            ScenarioKind::WallClimb => "wall-climb",
            ScenarioKind::DoubleJump => "double-jump",
            ScenarioKind::Ledge => "ledge",
        }
    }
}

impl FromStr for ScenarioKind {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ScenarioError::Unknown(s.to_owned()))
    }
}

/// Level, spawn point and input script for one run.
pub struct Scenario {
    pub kind: ScenarioKind,
    pub arena: Arena,
    pub spawn: Vec3,
    pub input: ScriptedInput,
    pub frames: usize,
}

fn forward() -> InputFrame {
    InputFrame::moving(Vec2::Y)
}

fn forward_jump() -> InputFrame {
    InputFrame {
        jump: true,
        ..forward()
    }
}

impl Scenario {
    pub fn build(kind: ScenarioKind, seconds: f32, frame_dt: f32) -> Result<Self, ScenarioError> {
        if !(seconds.is_finite() && seconds > 0.0 && seconds <= MAX_SCENARIO_SECONDS) {
            return Err(ScenarioError::InvalidDuration(seconds));
        }
        let frames = (seconds / frame_dt).ceil() as usize;

        let (arena, spawn, input) = match kind {
            ScenarioKind::Walk => (
                Arena::flat(),
                Vec3::ZERO,
                ScriptedInput::default().then_forever(forward()),
            ),
            ScenarioKind::WallClimb => (
                Arena::flat()
                    .with_wall(WallPlane::new(
                        Vec3::new(0.0, 0.0, 4.0),
                        Vec3::NEG_Z,
                        10.0,
                        0.0,
                        2.0,
                    ))
                    .with_platform(Platform {
                        min: Vec2::new(-10.0, 4.0),
                        max: Vec2::new(10.0, 10.0),
                        height: 2.0,
                    }),
                Vec3::ZERO,
                ScriptedInput::default()
                    .hold(forward(), 60)
                    .then(forward_jump())
                    .then_forever(forward()),
            ),
            ScenarioKind::DoubleJump => (
                Arena::flat(),
                Vec3::ZERO,
                ScriptedInput::default()
                    .hold(forward(), 30)
                    .then(forward_jump())
                    .hold(forward(), 15)
                    .then(forward_jump())
                    .then_forever(InputFrame::default()),
            ),
            ScenarioKind::Ledge => (
                Arena::flat().with_platform(Platform {
                    min: Vec2::new(-5.0, -5.0),
                    max: Vec2::new(5.0, 2.0),
                    height: 3.0,
                }),
                Vec3::new(0.0, 3.0, 0.0),
                ScriptedInput::default()
                    .hold(forward(), 40)
                    .then(forward_jump())
                    .hold(forward(), 5)
                    .then(forward_jump())
                    .then_forever(forward()),
            ),
        };

        Ok(Self {
            kind,
            arena,
            spawn,
            input,
            frames,
        })
    }
}

/// Outcome of a scenario run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub frames: usize,
    pub ticks: u64,
    pub final_medium: MoveMedium,
    pub final_position: Vec3,
    pub visited: BTreeSet<&'static str>,
    pub medium_changes: Vec<(u64, MoveMedium, MoveMedium)>,
    pub jumps: usize,
    pub rejected_jumps: usize,
    pub animator: RecordingAnimator,
}

/// Character, body, camera and presentation wired together.
pub struct Rig {
    character: AdvancedCharacter,
    body: KinematicBody<Arena>,
    controller: SimpleController,
    camera: Transform,
    presenter: CharacterPresenter,
    animator: RecordingAnimator,
    fixed_dt: f32,
    frame_dt: f32,
    accumulator: f32,
}

impl Rig {
    pub fn new(config: &QuickConfig, arena: Arena, spawn: Vec3) -> Self {
        let body = KinematicBody::new(
            arena,
            config.character.capsule,
            spawn,
            config.simulation.fixed_dt,
        );
        let camera = Transform::from_position(body.top_center());
        Self {
            character: AdvancedCharacter::new(config.character.clone()),
            body,
            controller: SimpleController::new(config.controller.clone()),
            camera,
            presenter: CharacterPresenter::new(),
            animator: RecordingAnimator::new(),
            fixed_dt: config.simulation.fixed_dt,
            frame_dt: config.simulation.frame_dt,
            accumulator: 0.0,
        }
    }

    pub fn character(&self) -> &AdvancedCharacter {
        &self.character
    }

    pub fn body(&self) -> &KinematicBody<Arena> {
        &self.body
    }

    /// One render frame: input, jump, as many fixed ticks as are due, then
    /// presentation.
    pub fn frame(&mut self, input: &InputFrame) -> Vec<CharacterEvent> {
        self.controller
            .update(input, Some(&mut self.camera), &mut self.body);
        if input.jump {
            self.character.on_jump(&mut self.body);
        }

        self.accumulator += self.frame_dt;
        while self.accumulator >= self.fixed_dt {
            self.character
                .physics_update(&mut self.body, self.camera.forward());
            self.body.integrate();
            self.accumulator -= self.fixed_dt;
        }

        let events = self.character.drain_events();
        self.presenter.present(&events, &mut self.animator);
        let locomotion = self.character.locomotion(&self.body);
        self.presenter.locomotion(&locomotion, &mut self.animator);
        events
    }
}

/// Run a scenario to completion.
pub fn run(config: &QuickConfig, mut scenario: Scenario) -> RunReport {
    let _span = tracing::info_span!("scenario", name = scenario.kind.name()).entered();
    let mut rig = Rig::new(config, scenario.arena.clone(), scenario.spawn);

    let mut visited = BTreeSet::new();
    let mut medium_changes = Vec::new();
    let mut jumps = 0;
    let mut rejected_jumps = 0;

    for _ in 0..scenario.frames {
        let input = scenario.input.read();
        for event in rig.frame(&input) {
            match event {
                CharacterEvent::MediumChanged { tick, old, new } => {
                    tracing::info!(tick, %old, %new, "medium changed");
                    medium_changes.push((tick, old, new));
                }
                CharacterEvent::Jumped { tick, count } => {
                    tracing::info!(tick, count, "jump");
                    jumps += 1;
                }
                CharacterEvent::JumpRejected { tick, count } => {
                    tracing::info!(tick, count, "jump refused");
                    rejected_jumps += 1;
                }
            }
        }
        visited.insert(rig.character().medium().as_str());
    }

    let report = RunReport {
        frames: scenario.frames,
        ticks: rig.character().tick(),
        final_medium: rig.character().medium(),
        final_position: rig.body().position(),
        visited,
        medium_changes,
        jumps,
        rejected_jumps,
        animator: rig.animator,
    };
    tracing::debug!(ticks = report.ticks, medium = %report.final_medium, "scenario complete");
    report
}
