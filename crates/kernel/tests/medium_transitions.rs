//! Full physics ticks through the reference host.

use glam::{Vec2, Vec3};
use quickmove_kernel::{
    AdvancedCharacter, Arena, Capsule, CharacterConfig, CharacterEvent, InputIntent,
    KinematicBody, MoveMedium, MovementHost, Platform, WallPlane,
};

const DT: f32 = 0.02;

fn tick(ch: &mut AdvancedCharacter, body: &mut KinematicBody<Arena>, forward: Vec3) -> MoveMedium {
    let medium = ch.physics_update(body, forward);
    body.integrate();
    medium
}

fn medium_changes(events: &[CharacterEvent]) -> Vec<(MoveMedium, MoveMedium)> {
    events
        .iter()
        .filter_map(|e| match e {
            CharacterEvent::MediumChanged { old, new, .. } => Some((*old, *new)),
            _ => None,
        })
        .collect()
}

#[test]
fn settles_on_ground_and_stays_there() {
    let mut body = KinematicBody::new(Arena::flat(), Capsule::default(), Vec3::ZERO, DT);
    let mut ch = AdvancedCharacter::new(CharacterConfig::default());
    body.add_movement_input(InputIntent::new(Vec3::X, 1.0));

    for _ in 0..100 {
        tick(&mut ch, &mut body, Vec3::X);
    }

    assert_eq!(ch.medium(), MoveMedium::Ground);
    assert_eq!(medium_changes(ch.events()), vec![(MoveMedium::Air, MoveMedium::Ground)]);
    assert!(body.position().x > 5.0);
    assert!(ch.locomotion(&body).running);
}

#[test]
fn jumping_at_a_faced_wall_starts_a_climb() {
    let arena = Arena::flat().with_wall(WallPlane::new(
        Vec3::new(0.0, 0.0, 2.0),
        Vec3::NEG_Z,
        5.0,
        0.0,
        6.0,
    ));
    let mut body = KinematicBody::new(arena, Capsule::default(), Vec3::ZERO, DT);
    let mut ch = AdvancedCharacter::new(CharacterConfig::default());
    body.add_movement_input(InputIntent::new(Vec3::Z, 1.0));

    for _ in 0..60 {
        tick(&mut ch, &mut body, Vec3::Z);
    }
    // Pressed against the wall but still on the floor.
    assert_eq!(ch.medium(), MoveMedium::Ground);
    assert!((body.position().z - 1.5).abs() < 1e-3);

    assert!(ch.on_jump(&mut body));
    let start_y = body.position().y;
    for _ in 0..20 {
        tick(&mut ch, &mut body, Vec3::Z);
    }

    assert_eq!(ch.medium(), MoveMedium::Wall);
    assert_eq!(ch.wall_surface().map(|w| w.normal), Some(Vec3::NEG_Z));
    assert!(body.position().y > start_y + 1.0);
    assert_eq!(
        medium_changes(ch.events()),
        vec![
            (MoveMedium::Air, MoveMedium::Ground),
            (MoveMedium::Ground, MoveMedium::Wall),
        ]
    );
}

#[test]
fn looking_away_from_the_wall_falls_instead_of_climbing() {
    let arena = Arena::flat().with_wall(WallPlane::new(
        Vec3::new(0.0, 0.0, 2.0),
        Vec3::NEG_Z,
        5.0,
        0.0,
        6.0,
    ));
    let mut body = KinematicBody::new(arena, Capsule::default(), Vec3::new(0.0, 0.0, 1.5), DT);
    let mut ch = AdvancedCharacter::new(CharacterConfig::default());
    body.add_movement_input(InputIntent::new(Vec3::Z, 1.0));

    // Camera turned almost sideways: the wall is not faced.
    let sideways = Vec3::new(1.0, 0.0, 0.2).normalize();
    tick(&mut ch, &mut body, sideways);
    assert!(ch.on_jump(&mut body));
    for _ in 0..5 {
        tick(&mut ch, &mut body, sideways);
    }
    assert_eq!(ch.medium(), MoveMedium::Air);
}

#[test]
fn ledge_walk_off_allows_one_late_air_jump() {
    let arena = Arena::default().with_platform(Platform {
        min: Vec2::new(-5.0, -5.0),
        max: Vec2::new(5.0, 1.0),
        height: 5.0,
    });
    let mut body = KinematicBody::new(arena, Capsule::default(), Vec3::new(0.0, 5.0, 0.0), DT);
    let mut ch = AdvancedCharacter::new(CharacterConfig::default());
    body.add_movement_input(InputIntent::new(Vec3::Z, 1.0));

    let mut ticks = 0;
    while ch.medium() != MoveMedium::Air || ticks < 2 {
        tick(&mut ch, &mut body, Vec3::Z);
        ticks += 1;
        assert!(ticks < 200, "never left the platform");
    }
    // Past the coyote window.
    for _ in 0..12 {
        tick(&mut ch, &mut body, Vec3::Z);
    }

    assert!(ch.on_jump(&mut body));
    assert!(!ch.on_jump(&mut body));

    let jumps: Vec<_> = ch
        .events()
        .iter()
        .filter(|e| !matches!(e, CharacterEvent::MediumChanged { .. }))
        .copied()
        .collect();
    assert!(matches!(jumps[0], CharacterEvent::Jumped { count: 2, .. }));
    assert!(matches!(jumps[1], CharacterEvent::JumpRejected { count: 2, .. }));
    assert_eq!(
        medium_changes(ch.events()),
        vec![
            (MoveMedium::Air, MoveMedium::Ground),
            (MoveMedium::Ground, MoveMedium::Air),
        ]
    );
}

#[test]
fn landing_after_double_jump_resets_jumps() {
    let mut body = KinematicBody::new(Arena::flat(), Capsule::default(), Vec3::ZERO, DT);
    let mut ch = AdvancedCharacter::new(CharacterConfig::default());
    tick(&mut ch, &mut body, Vec3::Z);

    assert!(ch.on_jump(&mut body));
    for _ in 0..5 {
        tick(&mut ch, &mut body, Vec3::Z);
    }
    assert!(ch.on_jump(&mut body));
    assert_eq!(body.jump_count(), 2);

    for _ in 0..300 {
        tick(&mut ch, &mut body, Vec3::Z);
        if ch.medium() == MoveMedium::Ground && body.is_on_floor() {
            break;
        }
    }
    assert_eq!(ch.medium(), MoveMedium::Ground);
    assert_eq!(body.jump_count(), 0);
    assert!(ch.on_jump(&mut body));
    assert_eq!(body.jump_count(), 1);
}
