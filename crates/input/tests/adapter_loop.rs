//! Input adapter driving the reference host end to end.

use glam::{Vec2, Vec3};
use quickmove_common::Transform;
use quickmove_input::{InputFrame, InputSource, ScriptedInput, SimpleController};
use quickmove_kernel::{
    AdvancedCharacter, Arena, Capsule, CharacterConfig, InputIntent, KinematicBody, MoveMedium,
    MovementHost,
};

const DT: f32 = 0.02;

#[test]
fn camera_snaps_to_capsule_top() {
    let mut body = KinematicBody::new(Arena::flat(), Capsule::default(), Vec3::new(3.0, 0.0, -1.0), DT);
    let mut ctl = SimpleController::default();
    let mut cam = Transform::default();

    ctl.update(&InputFrame::default(), Some(&mut cam), &mut body);
    assert_eq!(cam.position, Vec3::new(3.0, 2.0, -1.0));
}

#[test]
fn missing_control_transform_changes_nothing() {
    let mut body = KinematicBody::new(Arena::flat(), Capsule::default(), Vec3::ZERO, DT);
    let mut ctl = SimpleController::default();
    let frame = InputFrame {
        look: Vec2::new(0.0, 40.0),
        movement: Vec2::Y,
        jump: false,
    };

    assert!(ctl.update(&frame, None, &mut body).is_none());
    assert_eq!(ctl.pitch(), 0.0);
    assert_eq!(body.intent(), InputIntent::default());
}

#[test]
fn turned_camera_walks_the_character_sideways() {
    let mut body = KinematicBody::new(Arena::flat(), Capsule::default(), Vec3::ZERO, DT);
    let mut ch = AdvancedCharacter::new(CharacterConfig::default());
    let mut ctl = SimpleController::default();
    let mut cam = Transform::default();

    // Turn 90 degrees right, then walk forward.
    let mut input = ScriptedInput::default()
        .then(InputFrame {
            look: Vec2::new(180.0, 0.0),
            ..Default::default()
        })
        .hold(InputFrame::moving(Vec2::Y), 60);

    for _ in 0..61 {
        let frame = input.read();
        ctl.update(&frame, Some(&mut cam), &mut body);
        ch.physics_update(&mut body, cam.forward());
        body.integrate();
    }

    assert_eq!(ch.medium(), MoveMedium::Ground);
    let p = body.position();
    assert!(p.x > 3.0, "moved to {p:?}");
    assert!(p.z.abs() < 1e-3);
    assert!((cam.position - body.top_center()).length() < 0.2);
}

#[test]
fn strafing_keeps_half_input_speed() {
    let mut body = KinematicBody::new(Arena::flat(), Capsule::default(), Vec3::ZERO, DT);
    let mut ch = AdvancedCharacter::new(CharacterConfig::default());
    let mut ctl = SimpleController::default();
    let mut cam = Transform::default();
    let frame = InputFrame::moving(Vec2::new(-0.5, 0.0));

    for _ in 0..50 {
        let intent = ctl.update(&frame, Some(&mut cam), &mut body).unwrap();
        assert_eq!(intent.magnitude, 0.5);
        ch.physics_update(&mut body, cam.forward());
        body.integrate();
    }

    let v = body.velocity();
    let gait_speed = CharacterConfig::default().gait.speed;
    assert!((v.x + gait_speed * 0.5).abs() < 1e-3);
}
