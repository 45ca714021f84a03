use super::*;
use crate::core::Vec2;
use crate::domain::WorldConfig;
use crate::geometry::Line;
use crate::systems::body::{Bodies, Body, BodyId, BodyKind};
use crate::systems::collisions::{CollisionKind, ListenerOptions, Listeners, Subject};

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-4
}

fn world_with_gravity(x: f32, y: f32) -> WorldCore {
    WorldCore::from_config(&WorldConfig::default().with_gravity(x, y))
}

/// Records every pass the orchestrator makes and forwards to the built-in systems
#[derive(Default)]
struct Recorder {
    calls: Vec<&'static str>,
    /// (sub-step dt, acceleration of each body at the start of the sub-step)
    seen: Vec<(f32, Vec<Vec2>)>,
    inner: DefaultPipeline,
}

impl Pipeline for Recorder {
    fn step(&mut self, bodies: &mut Bodies, dt: f32) {
        self.calls.push("step");
        self.seen.push((dt, bodies.iter().map(|b| b.acceleration).collect()));
        self.inner.step(bodies, dt);
    }

    fn query(&mut self, bodies: &Bodies, listeners: &mut Listeners) -> usize {
        self.calls.push("query");
        self.inner.query(bodies, listeners)
    }

    fn separate(&mut self, bodies: &mut Bodies, listeners: &mut Listeners) -> usize {
        self.calls.push("separate");
        self.inner.separate(bodies, listeners)
    }

    fn notify(&mut self, listeners: &mut Listeners) -> usize {
        self.calls.push("notify");
        self.inner.notify(listeners)
    }
}

// === STEP ===

#[test]
fn step_zeroes_acceleration_and_keeps_velocity() {
    let mut world = world_with_gravity(0.0, -10.0);
    let id = world.add_body(Body::circle(0.0, 0.0, 1.0));

    assert!(world.step(1.0));

    let body = world.body(id).unwrap();
    assert_eq!(body.acceleration, Vec2::ZERO);
    assert!(approx(body.velocity, Vec2::new(0.0, -10.0)));
    assert_eq!(world.frame(), 1);
}

#[test]
fn gravity_is_added_once_per_tick() {
    let mut world = world_with_gravity(0.0, -10.0);
    world.set_iterations(4);
    world.add_body(Body::circle(0.0, 0.0, 1.0));

    let mut recorder = Recorder::default();
    assert!(world.step_with(&mut recorder, 1.0));

    assert_eq!(recorder.seen.len(), 4);
    for (dt, accels) in &recorder.seen {
        assert!((dt - 0.25).abs() < 1e-6);
        assert_eq!(accels, &vec![Vec2::new(0.0, -10.0)]);
    }
}

#[test]
fn substeps_run_step_query_separate_notify_in_order() {
    let mut world = world_with_gravity(0.0, 0.0);
    world.set_iterations(3);
    world.add_body(Body::circle(0.0, 0.0, 1.0));

    let mut recorder = Recorder::default();
    world.step_with(&mut recorder, 0.3);

    let cycle = ["step", "query", "separate", "notify"];
    let expected: Vec<&str> = cycle.iter().copied().cycle().take(12).collect();
    assert_eq!(recorder.calls, expected);
}

#[test]
fn gravity_adds_to_accumulated_acceleration() {
    let mut world = world_with_gravity(0.0, -10.0);
    let id = world.add_body(Body::circle(0.0, 0.0, 1.0));
    world.body_mut(id).unwrap().acceleration = Vec2::new(2.0, 0.0);

    let mut recorder = Recorder::default();
    world.step_with(&mut recorder, 1.0);

    assert_eq!(recorder.seen[0].1, vec![Vec2::new(2.0, -10.0)]);
    assert_eq!(world.body(id).unwrap().acceleration, Vec2::ZERO);
}

#[test]
fn gravity_scale_weights_world_gravity() {
    let mut world = world_with_gravity(0.0, -10.0);
    let light = world.add_body(Body::circle(0.0, 0.0, 1.0).with_gravity_scale(0.5));
    let fixed = world.add_body(Body::circle(10.0, 0.0, 1.0).with_kind(BodyKind::Static));

    world.step(1.0);

    assert!(approx(world.body(light).unwrap().velocity, Vec2::new(0.0, -5.0)));
    assert_eq!(world.body(fixed).unwrap().position, Vec2::new(10.0, 0.0));
}

#[test]
fn invalid_dt_changes_nothing() {
    let mut world = world_with_gravity(0.0, -10.0);
    world.enable_history(8);
    let id = world.add_body(Body::circle(0.0, 0.0, 1.0));

    for dt in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        assert!(!world.step(dt));
    }

    assert_eq!(world.frame(), 0);
    assert!(!world.can_undo());
    assert_eq!(world.body(id).unwrap().position, Vec2::ZERO);
}

#[test]
fn zero_iterations_are_rejected() {
    let mut world = WorldCore::new();
    assert!(!world.set_iterations(0));
    assert_eq!(world.iterations(), 1);
    assert!(world.set_iterations(5));
    assert_eq!(world.iterations(), 5);
}

#[test]
fn persistent_listener_reports_enter_then_exit() {
    let mut world = world_with_gravity(0.0, 0.0);
    let a = world.add_body(Body::circle(0.0, 0.0, 1.0).with_velocity(Vec2::new(4.0, 0.0)));
    let b = world.add_body(Body::circle(3.0, 0.0, 1.0).with_kind(BodyKind::Static));
    let options = ListenerOptions { separate: false, ..ListenerOptions::default() };
    let lid = world.add_listener(Subject::Body(a), Subject::Body(b), options);

    // 0.0 -> 2.0: overlapping b
    world.step(0.5);
    // 2.0 -> 6.0: fully past b
    world.step(1.0);

    let kinds: Vec<_> = world
        .listener_mut(lid)
        .unwrap()
        .drain_events()
        .into_iter()
        .map(|e| e.kind)
        .collect();
    assert_eq!(kinds, vec![CollisionKind::Enter, CollisionKind::Exit]);
    assert_eq!(world.listener(lid).unwrap().cycles().queries, 2);
}

#[test]
fn resting_on_static_floor() {
    let mut world = world_with_gravity(0.0, -10.0);
    world.set_iterations(4);
    let floor = world.add_body(Body::rect(0.0, -1.0, 20.0, 2.0).with_kind(BodyKind::Static));
    let ball = world.add_body(Body::circle(0.0, 1.0, 1.0).with_restitution(0.0));
    world.add_listener(Subject::Body(floor), Subject::Body(ball), ListenerOptions::default());

    for _ in 0..60 {
        world.step(1.0 / 60.0);
    }

    let y = world.body(ball).unwrap().position.y;
    assert!((y - 1.0).abs() < 0.05, "ball sank to {y}");
}

#[test]
fn perf_stats_count_substeps() {
    let mut world = world_with_gravity(0.0, -10.0);
    world.set_iterations(3);
    world.enable_perf_metrics(true);
    world.enable_history(4);
    world.add_body(Body::circle(0.0, 0.0, 1.0));
    world.add_body(Body::circle(5.0, 0.0, 1.0));

    world.step(0.1);

    let stats = world.get_perf_stats();
    assert_eq!(stats.substeps(), 3);
    assert_eq!(stats.body_count(), 2);
    assert_eq!(stats.snapshot_bodies(), 2);

    world.enable_perf_metrics(false);
    assert_eq!(world.get_perf_stats().substeps(), 0);
}

// === HISTORY ===

#[test]
fn undo_restores_pose_but_not_acceleration() {
    let mut world = world_with_gravity(0.0, -10.0);
    world.enable_history(8);
    let id = world.add_body(Body::circle(0.0, 0.0, 1.0));

    world.step(1.0);
    world.body_mut(id).unwrap().acceleration = Vec2::new(5.0, 5.0);

    assert!(world.undo());

    let body = world.body(id).unwrap();
    assert_eq!(body.position, Vec2::ZERO);
    assert_eq!(body.velocity, Vec2::ZERO);
    assert_eq!(body.acceleration, Vec2::new(5.0, 5.0));
    // World shapes follow the restored position
    assert!(body.bounds().contains(Vec2::ZERO));
}

/// Undo keeps the live rotational velocity while redo restores it.
#[test]
fn undo_leaves_rotational_velocity() {
    let mut world = world_with_gravity(0.0, 0.0);
    world.enable_history(8);
    let id = world.add_body(Body::circle(0.0, 0.0, 1.0));
    world.body_mut(id).unwrap().rotational_velocity = 2.0;

    world.step(1.0);
    world.body_mut(id).unwrap().rotational_velocity = 7.0;
    world.undo();

    let body = world.body(id).unwrap();
    assert_eq!(body.rotation, 0.0);
    assert_eq!(body.rotational_velocity, 7.0);
}

#[test]
fn redo_restores_acceleration_and_rotational_velocity() {
    let mut world = world_with_gravity(0.0, -10.0);
    world.enable_history(8);
    let id = world.add_body(Body::circle(0.0, 0.0, 1.0));
    {
        let body = world.body_mut(id).unwrap();
        body.acceleration = Vec2::new(3.0, 0.0);
        body.rotational_velocity = 2.0;
    }

    world.step(1.0);
    let after_step = world.body(id).unwrap().position;
    assert!(approx(after_step, Vec2::new(3.0, -10.0)));

    {
        let body = world.body_mut(id).unwrap();
        body.acceleration = Vec2::new(9.0, 9.0);
        body.rotational_velocity = 7.0;
    }
    assert!(world.undo());
    {
        let body = world.body_mut(id).unwrap();
        body.acceleration = Vec2::ZERO;
        body.rotational_velocity = 0.0;
        body.position = Vec2::new(100.0, 100.0);
    }

    assert!(world.redo());

    let body = world.body(id).unwrap();
    assert!(approx(body.position, after_step));
    assert!(approx(body.velocity, Vec2::new(3.0, -10.0)));
    assert!((body.rotation - 2.0).abs() < 1e-6);
    assert_eq!(body.acceleration, Vec2::new(9.0, 9.0));
    assert_eq!(body.rotational_velocity, 7.0);
}

#[test]
fn undo_redo_without_history_are_noops() {
    let mut world = world_with_gravity(0.0, -10.0);
    let id = world.add_body(Body::circle(0.0, 0.0, 1.0));
    world.step(1.0);
    let position = world.body(id).unwrap().position;

    assert!(!world.undo());
    assert!(!world.redo());
    assert!(world.history().is_none());
    assert_eq!(world.body(id).unwrap().position, position);
}

#[test]
fn empty_history_is_a_noop() {
    let mut world = WorldCore::new();
    world.enable_history(4);
    world.add_body(Body::circle(0.0, 0.0, 1.0));
    assert!(!world.undo());
    assert!(!world.redo());
}

#[test]
fn undo_walks_back_tick_by_tick() {
    let mut world = world_with_gravity(0.0, 0.0);
    world.enable_history(8);
    let id = world.add_body(Body::circle(0.0, 0.0, 1.0).with_velocity(Vec2::new(1.0, 0.0)));

    for _ in 0..3 {
        world.step(1.0);
    }
    assert!(approx(world.body(id).unwrap().position, Vec2::new(3.0, 0.0)));

    world.undo();
    assert!(approx(world.body(id).unwrap().position, Vec2::new(2.0, 0.0)));
    world.undo();
    world.undo();
    assert!(approx(world.body(id).unwrap().position, Vec2::ZERO));
    assert!(!world.undo());

    world.redo();
    world.redo();
    assert!(approx(world.body(id).unwrap().position, Vec2::new(2.0, 0.0)));
}

#[test]
fn step_after_undo_drops_redo() {
    let mut world = world_with_gravity(0.0, -10.0);
    world.enable_history(8);
    world.add_body(Body::circle(0.0, 0.0, 1.0));

    world.step(0.1);
    world.step(0.1);
    world.undo();
    assert!(world.can_redo());

    world.step(0.1);
    assert!(!world.can_redo());
    assert!(!world.redo());
}

#[test]
fn history_capacity_limits_undo_depth() {
    let mut world = WorldCore::from_config(&WorldConfig::default().with_history(2));
    world.add_body(Body::circle(0.0, 0.0, 1.0));
    for _ in 0..5 {
        world.step(0.1);
    }

    assert!(world.undo());
    assert!(world.undo());
    assert!(!world.undo());
}

#[test]
fn restore_skips_bodies_missing_on_either_side() {
    let mut world = world_with_gravity(0.0, 0.0);
    world.enable_history(8);
    let a = world.add_body(Body::circle(0.0, 0.0, 1.0).with_velocity(Vec2::new(1.0, 0.0)));
    let b = world.add_body(Body::circle(10.0, 0.0, 1.0));

    world.step(1.0);
    world.remove_body(b);
    let late = world.add_body(Body::circle(20.0, 0.0, 1.0).with_velocity(Vec2::new(0.0, 1.0)));

    assert!(world.undo());

    assert_eq!(world.body(a).unwrap().position, Vec2::ZERO);
    assert!(world.body(b).is_none());
    assert_eq!(world.body(late).unwrap().velocity, Vec2::new(0.0, 1.0));
}

// === CHECK ===

#[test]
fn check_with_one_subject_scopes_it_against_itself() {
    let mut world = world_with_gravity(0.0, -10.0);
    world.set_iterations(6);
    let a = world.add_body(Body::circle(0.0, 0.0, 1.0));
    let b = world.add_body(Body::circle(1.0, 0.0, 1.0));
    let outsider = world.add_body(Body::circle(1.5, 0.0, 1.0));

    let group = Subject::Bodies(vec![a, b]);
    let listener = world.check(Some(group.clone()), None, ListenerOptions::default());

    assert_eq!(listener.subjects_a(), &group);
    assert_eq!(listener.subjects_b(), &group);
    assert_eq!(listener.contacts().len(), 1);
    assert_eq!((listener.contacts()[0].a, listener.contacts()[0].b), (a, b));
    assert!(!listener.is_active(b, outsider));

    let cycles = listener.cycles();
    assert_eq!((cycles.queries, cycles.separations, cycles.notifications), (1, 1, 1));

    // No time passes
    assert_eq!(world.frame(), 0);
    assert_eq!(world.iterations(), 6);
    assert_eq!(world.gravity(), Vec2::new(0.0, -10.0));
    assert_eq!(world.body(a).unwrap().velocity.y, 0.0);
}

#[test]
fn check_second_subject_only_mirrors_it() {
    let mut world = WorldCore::new();
    let a = world.add_body(Body::circle(0.0, 0.0, 1.0));
    let listener = world.check(None, Some(Subject::Body(a)), ListenerOptions::default());
    assert_eq!(listener.subjects_a(), &Subject::Body(a));
    assert_eq!(listener.subjects_b(), &Subject::Body(a));
    assert!(listener.contacts().is_empty());
}

#[test]
fn check_without_subjects_separates_whole_world() {
    let mut world = WorldCore::new();
    let a = world.add_body(Body::circle(0.0, 0.0, 1.0));
    let b = world.add_body(Body::circle(1.0, 0.0, 1.0));
    world.add_body(Body::circle(50.0, 0.0, 1.0));

    let listener = world.check(None, None, ListenerOptions::default());

    assert_eq!(listener.subjects_a(), &Subject::All);
    assert_eq!(listener.contacts().len(), 1);
    assert_eq!(listener.events().len(), 1);
    assert_eq!(listener.events()[0].kind, CollisionKind::Enter);
    let gap = world.body(b).unwrap().position.x - world.body(a).unwrap().position.x;
    assert!((gap - 2.0).abs() < 1e-4);
}

#[test]
fn check_leaves_persistent_listeners_alone() {
    let mut world = WorldCore::new();
    let a = world.add_body(Body::circle(0.0, 0.0, 1.0));
    let b = world.add_body(Body::circle(1.0, 0.0, 1.0));
    let lid = world.add_listener(Subject::Body(a), Subject::Body(b), ListenerOptions::default());

    world.check(Some(Subject::Body(a)), Some(Subject::Body(b)), ListenerOptions::default());

    let persistent = world.listener(lid).unwrap();
    assert_eq!(persistent.cycles().queries, 0);
    assert!(persistent.events().is_empty());
    assert_eq!(world.listeners().len(), 1);
}

#[test]
fn check_runs_one_cycle_regardless_of_iterations() {
    let mut world = WorldCore::new();
    world.set_iterations(8);
    world.add_body(Body::circle(0.0, 0.0, 1.0));

    let mut recorder = Recorder::default();
    world.check_with(&mut recorder, CheckScope::Neither, ListenerOptions::default());

    assert_eq!(recorder.calls, vec!["query", "separate", "notify"]);
}

// === LINECAST ===

fn two_boxes() -> (WorldCore, BodyId, BodyId) {
    let mut world = WorldCore::new();
    let near = world.add_body(Body::rect(5.0, 0.0, 2.0, 2.0));
    let far = world.add_body(Body::rect(10.0, 0.0, 2.0, 2.0));
    (world, near, far)
}

#[test]
fn linecast_picks_closest_body() {
    let (world, near, _) = two_boxes();
    let hit = world
        .linecast(&Line::from_points(Vec2::ZERO, Vec2::new(20.0, 0.0)), &Subject::All)
        .unwrap();
    assert_eq!(hit.body, near);
    assert!((hit.distance - 4.0).abs() < 1e-4);
    assert!(approx(hit.normal, Vec2::new(-1.0, 0.0)));
}

#[test]
fn linecast_honours_target_subject() {
    let (world, _, far) = two_boxes();
    let line = Line::from_points(Vec2::ZERO, Vec2::new(20.0, 0.0));
    let hit = world.linecast(&line, &Subject::Body(far)).unwrap();
    assert_eq!(hit.body, far);
    assert!((hit.distance - 9.0).abs() < 1e-4);
    assert!(world.linecast(&line, &Subject::Bodies(Vec::new())).is_none());
}

#[test]
fn linecast_skips_unknown_ids_in_target() {
    let (mut world, near, far) = two_boxes();
    let line = Line::from_points(Vec2::ZERO, Vec2::new(20.0, 0.0));

    let hit = world.linecast(&line, &Subject::Bodies(vec![99, far, near])).unwrap();
    assert_eq!(hit.body, near);
    assert!(world.linecast(&line, &Subject::Bodies(vec![99])).is_none());

    world.remove_body(near);
    let hit = world.linecast(&line, &Subject::Bodies(vec![near, far])).unwrap();
    assert_eq!(hit.body, far);
}

#[test]
fn linecast_constructors_agree() {
    let (world, near, _) = two_boxes();
    let by_points = world.linecast_points(Vec2::ZERO, Vec2::new(20.0, 0.0), &Subject::All);
    let by_delta = world.linecast_delta(0.0, 0.0, 20.0, 0.0, &Subject::All);
    let by_angle = world.linecast_angle(Vec2::ZERO, 0.0, 20.0, &Subject::All);

    for hit in [by_points, by_delta, by_angle] {
        let hit = hit.unwrap();
        assert_eq!(hit.body, near);
        assert!(approx(hit.point, Vec2::new(4.0, 0.0)));
    }
}

#[test]
fn linecast_short_of_everything_misses() {
    let (world, _, _) = two_boxes();
    assert!(world.linecast_delta(0.0, 0.0, 3.0, 0.0, &Subject::All).is_none());
    assert!(world.linecast_delta(0.0, 5.0, 20.0, 0.0, &Subject::All).is_none());
}

// === CONFIG ===

#[test]
fn world_from_config_json() {
    let world = WorldCore::from_config_json(
        r#"{ "gravity": { "x": 0.0, "y": -20.0 }, "iterations": 4, "history": { "capacity": 16 } }"#,
    )
    .unwrap();
    assert_eq!(world.gravity(), Vec2::new(0.0, -20.0));
    assert_eq!(world.iterations(), 4);
    assert_eq!(world.history().map(History::capacity), Some(16));
}

#[test]
fn world_from_bad_config_json_fails() {
    assert!(WorldCore::from_config_json("{ nope").is_err());
    assert!(WorldCore::from_config_json(r#"{ "iterations": 0 }"#).is_err());
}

#[test]
fn clear_empties_world_and_history() {
    let mut world = WorldCore::new();
    world.enable_history(4);
    let a = world.add_body(Body::circle(0.0, 0.0, 1.0));
    world.add_listener(Subject::All, Subject::All, ListenerOptions::default());
    world.step(0.1);

    world.clear();

    assert_eq!(world.body_count(), 0);
    assert!(world.listeners().is_empty());
    assert!(!world.can_undo());
    assert_ne!(world.add_body(Body::circle(0.0, 0.0, 1.0)), a);
}
