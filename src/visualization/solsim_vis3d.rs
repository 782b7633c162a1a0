use bevy::math::primitives::Sphere;
use bevy::prelude::*;

use crate::simulation::scenario::Scenario;

/// Component tagging each sphere with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Component tagging the sun mesh for its cosmetic spin
#[derive(Component)]
struct SunSpin;

/// Camera placement looking down at the ecliptic from above and behind
const CAMERA_POS: Vec3 = Vec3::new(0.0, 80.0, 120.0);

/// Cosmetic sun spin per frame, radians
const SUN_SPIN_RATE: f32 = 0.002;

/// Run the Bevy viewer on a built scenario
pub fn run_3d(scenario: Scenario) {
    println!(
        "run_3d: starting Bevy 3D viewer with {} bodies",
        scenario.system.bodies.len()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(
            Update,
            (control_params, physics_step_3d, sync_transforms_3d, draw_trails_3d),
        )
        .run();
}

/// Startup system: spawn camera, lights, the sun, and one sphere per body
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    // Camera looking at the origin against a near-black sky
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.02)),
            ..Default::default()
        },
        transform: Transform::from_translation(CAMERA_POS).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    // The sun is the only real light source
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 2_000_000.0,
            range: 500.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Faint ambient fill so the night sides of planets stay visible
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.13, 0.13, 0.2),
        brightness: 80.0,
    });

    // Sun mesh at the origin, emissive so it glows without lighting itself
    let sun_cfg = &scenario.config.sun;
    let [r, g, b] = sun_cfg.color;
    let [er, eg, eb] = sun_cfg.emissive;
    commands.spawn((
        PbrBundle {
            mesh: meshes.add(Sphere::new(sun_cfg.radius as f32).mesh()),
            material: materials.add(StandardMaterial {
                base_color: Color::srgb(r, g, b),
                emissive: LinearRgba::rgb(er * 1.5, eg * 1.5, eb * 1.5),
                ..Default::default()
            }),
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..Default::default()
        },
        SunSpin,
    ));

    // Spawn one sphere per body
    for (i, bc) in scenario.config.bodies.iter().enumerate() {
        let [r, g, b] = bc.color;
        let body = &scenario.system.bodies[i];

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(bc.radius as f32).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(r, g, b),
                    perceptual_roughness: 0.7,
                    metallic: 0.1,
                    ..Default::default()
                }),
                transform: Transform::from_xyz(
                    body.x.x as f32,
                    body.x.y as f32,
                    body.x.z as f32,
                ),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Per-frame physics: snapshot the parameters once, then hand the raw frame
/// delta to the engine
fn physics_step_3d(mut scenario: ResMut<Scenario>, time: Res<Time>) {
    let Scenario {
        engine,
        parameters,
        system,
        forces,
        ..
    } = &mut *scenario;

    // One consistent snapshot for the whole frame
    let params = *parameters;
    engine.advance(system, forces, &params, time.delta_seconds() as f64);
}

/// Copy simulated positions into the rendered transforms and apply the
/// cosmetic sun spin
fn sync_transforms_3d(
    scenario: Res<Scenario>,
    mut bodies: Query<(&BodyIndex, &mut Transform), Without<SunSpin>>,
    mut sun: Query<&mut Transform, With<SunSpin>>,
) {
    for (BodyIndex(i), mut transform) in &mut bodies {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation = Vec3::new(b.x.x as f32, b.x.y as f32, b.x.z as f32);
        }
    }

    for mut transform in &mut sun {
        transform.rotate_y(SUN_SPIN_RATE);
    }
}

/// Draw each body's trail as a polyline, oldest to newest
fn draw_trails_3d(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    if !scenario.parameters.show_trails {
        return;
    }

    for (b, bc) in scenario.system.bodies.iter().zip(&scenario.config.bodies) {
        let [r, g, bl] = bc.trail_color;
        let color = Color::srgba(r, g, bl, 0.5);
        gizmos.linestrip(
            b.trail
                .iter()
                .map(|p| Vec3::new(p.x as f32, p.y as f32, p.z as f32)),
            color,
        );
    }
}

#[derive(Default)]
struct PauseMemory {
    resume_time_scale: f64,
}

/// Keyboard parameter surface
///
/// T      toggle trail visibility
/// Space  pause / resume (time scale 0 and back)
/// Up     / Down      time scale +/- 0.25
/// Left   / Right     gravitational constant / and * 1.1
/// PgDown / PgUp      sun mass / and * 1.1
/// R      reset the scenario from its configuration
fn control_params(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut pause: Local<PauseMemory>,
) {
    if keys.just_pressed(KeyCode::KeyT) {
        scenario.parameters.show_trails = !scenario.parameters.show_trails;
    }

    if keys.just_pressed(KeyCode::Space) {
        if scenario.parameters.time_scale != 0.0 {
            pause.resume_time_scale = scenario.parameters.time_scale;
            scenario.parameters.time_scale = 0.0;
        } else {
            // Resume at the speed active before the pause, falling back to
            // the configured value on a scenario that started paused
            let fallback = scenario.config.parameters.time_scale;
            scenario.parameters.time_scale = if pause.resume_time_scale != 0.0 {
                pause.resume_time_scale
            } else {
                fallback
            };
        }
    }

    if keys.just_pressed(KeyCode::ArrowUp) {
        scenario.parameters.time_scale += 0.25;
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        scenario.parameters.time_scale = (scenario.parameters.time_scale - 0.25).max(0.0);
    }

    if keys.just_pressed(KeyCode::ArrowRight) {
        scenario.parameters.G *= 1.1;
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        scenario.parameters.G /= 1.1;
    }

    if keys.just_pressed(KeyCode::PageUp) {
        scenario.parameters.sun_mass *= 1.1;
    }
    if keys.just_pressed(KeyCode::PageDown) {
        scenario.parameters.sun_mass /= 1.1;
    }

    if keys.just_pressed(KeyCode::KeyR) {
        scenario.reset();
    }
}
