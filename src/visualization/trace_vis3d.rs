use bevy::prelude::*;
use bevy::log::LogPlugin;
use bevy::math::primitives::Sphere;
use bevy::time::Real;
use bevy::window::PrimaryWindow;

use crate::simulation::session::{FrameInput, SessionState, SimulationSession};
use crate::simulation::states::NVec3;

/// Frame loop's handle on the session
#[derive(Resource)]
struct SessionResource(SimulationSession);

/// Component tagging the sphere that follows the readout position
#[derive(Component)]
struct ParticleMarker;

/// Which piece of on-screen text an entity holds
#[derive(Component, Clone, Copy)]
enum HudText {
    Status,
    Position,
    Panel,
}

/// Pieces of the scrub panel, laid out from the window size every frame
#[derive(Component, Clone, Copy)]
enum PanelPart {
    Background,
    Readout,
    Track,
    Knob,
}

const FONTSIZE: f32 = 20.0;
const PADDING: f32 = 15.0;
const KNOB_RADIUS: f32 = 8.0;
const PARTICLE_RADIUS: f32 = 2.0;

/// Ground grid: cells per side and cell size in world units
const GRID_SLICES: i32 = 25;
const GRID_SPACING: f32 = 10.0;

const RAY_WHITE: Color = Color::srgb(0.96, 0.96, 0.96);
const DARK_GRAY: Color = Color::srgb(0.31, 0.31, 0.31);
const LIGHT_GRAY: Color = Color::srgb(0.78, 0.78, 0.78);
const ORANGE: Color = Color::srgb(1.0, 0.63, 0.0);
const PURPLE: Color = Color::srgb(0.78, 0.48, 1.0);
const GREEN: Color = Color::srgb(0.0, 0.89, 0.19);
const RED: Color = Color::srgb(0.9, 0.16, 0.22);
const BLUE: Color = Color::srgb(0.0, 0.47, 0.95);

/// Open the window and drive `session` once per frame until it is closed
pub fn run_3d(session: SimulationSession) {
    log::info!("run_3d: starting Bevy viewer, run {}", session.runs());

    App::new()
        .insert_resource(SessionResource(session))
        .insert_resource(ClearColor(RAY_WHITE))
        .add_plugins(
            DefaultPlugins
                .build()
                .disable::<LogPlugin>() // env_logger already owns the log facade
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Particle Simulation - Lagrange Interpolation".into(),
                        resolution: (900.0, 600.0).into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
        )
        .add_systems(Startup, setup_3d)
        .add_systems(
            Update,
            (session_step, sync_particle, draw_scene, update_hud_text, layout_scrub_panel).chain(),
        )
        .run();
}

/// Startup system: camera, light, the particle sphere and the HUD
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    session: Res<SessionResource>,
) {
    commands.spawn(Camera3dBundle {
        projection: Projection::Perspective(PerspectiveProjection {
            fov: 45.0_f32.to_radians(),
            ..Default::default()
        }),
        transform: Transform::from_xyz(200.0, 200.0, 200.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(100.0, 200.0, 100.0),
        ..Default::default()
    });

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(Sphere::new(PARTICLE_RADIUS).mesh()),
            material: materials.add(StandardMaterial {
                base_color: ORANGE,
                unlit: true,
                ..Default::default()
            }),
            transform: Transform::from_translation(to_vec3(&session.0.readout().position)),
            ..Default::default()
        },
        ParticleMarker,
    ));

    spawn_hud(&mut commands);
}

// ========================================================================================
// Input -> session
// ========================================================================================

/// Collect this frame's input and tick the session once
fn session_step(
    mut session: ResMut<SessionResource>,
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time<Real>>,
) {
    let pointer = windows
        .get_single()
        .ok()
        .and_then(|window| pointer_on_slider(window, &mouse));

    let input = FrameInput {
        now_millis: time.elapsed().as_millis() as i64,
        toggle_pause: keys.just_pressed(KeyCode::Space),
        end_simulation: keys.just_pressed(KeyCode::Enter),
        new_run: keys.just_pressed(KeyCode::KeyN),
        toggle_trace: keys.just_pressed(KeyCode::KeyP),
        pointer,
    };

    if let Err(e) = session.0.tick(&input) {
        log::error!("session tick failed: {e}");
    }
}

/// Slider track in window coordinates (origin top-left, y down)
struct SliderGeometry {
    panel_left: f32,
    panel_width: f32,
    panel_height: f32,
    left: f32,
    right: f32,
    y: f32,
}

impl SliderGeometry {
    /// Panel takes the top-right quarter of the width and 40% of the height
    fn of(window: &Window) -> Self {
        let panel_width = window.width() / 4.0;
        let panel_left = window.width() - panel_width;
        Self {
            panel_left,
            panel_width,
            panel_height: window.height() / 2.5,
            left: panel_left + PADDING,
            right: window.width() - PADDING,
            y: FONTSIZE * 7.0 + PADDING * 4.0,
        }
    }
}

/// Normalized track position under the cursor while the left button drags the slider
fn pointer_on_slider(window: &Window, mouse: &ButtonInput<MouseButton>) -> Option<f64> {
    if !mouse.pressed(MouseButton::Left) {
        return None;
    }
    let cursor = window.cursor_position()?;
    let geo = SliderGeometry::of(window);

    let on_track = cursor.x >= geo.left - KNOB_RADIUS
        && cursor.x <= geo.right + KNOB_RADIUS
        && (cursor.y - geo.y).abs() <= KNOB_RADIUS * 2.0;
    if !on_track || geo.right <= geo.left {
        return None;
    }

    Some((((cursor.x - geo.left) / (geo.right - geo.left)) as f64).clamp(0.0, 1.0))
}

// ========================================================================================
// Scene
// ========================================================================================

fn to_vec3(v: &NVec3) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

/// Live position while running, reconstructed position while scrubbing
fn sync_particle(session: Res<SessionResource>, mut query: Query<&mut Transform, With<ParticleMarker>>) {
    let position = to_vec3(&session.0.readout().position);
    for mut transform in &mut query {
        transform.translation = position;
    }
}

/// Ground grid plus the recorded trace when it is switched on
fn draw_scene(session: Res<SessionResource>, mut gizmos: Gizmos) {
    let half = (GRID_SLICES / 2) as f32 * GRID_SPACING;
    for i in -(GRID_SLICES / 2)..=(GRID_SLICES / 2) {
        let offset = i as f32 * GRID_SPACING;
        gizmos.line(Vec3::new(offset, 0.0, -half), Vec3::new(offset, 0.0, half), LIGHT_GRAY);
        gizmos.line(Vec3::new(-half, 0.0, offset), Vec3::new(half, 0.0, offset), LIGHT_GRAY);
    }

    let samples = session.0.samples();
    if session.0.show_trace() && samples.len() > 1 {
        gizmos.linestrip(samples.iter().map(|s| to_vec3(&s.position)), PURPLE);
    }
}

// ========================================================================================
// HUD
// ========================================================================================

fn spawn_hud(commands: &mut Commands) {
    let style = TextStyle {
        font_size: FONTSIZE,
        color: DARK_GRAY,
        ..Default::default()
    };

    commands.spawn((
        TextBundle::from_section("", style.clone()).with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(PADDING),
            left: Val::Px(PADDING),
            ..Default::default()
        }),
        HudText::Status,
    ));

    commands.spawn((
        TextBundle::from_section("", style.clone()).with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(FONTSIZE + PADDING * 2.0),
            left: Val::Px(PADDING),
            ..Default::default()
        }),
        HudText::Position,
    ));

    commands.spawn((
        NodeBundle {
            style: Style {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                border: UiRect::all(Val::Px(2.0)),
                ..Default::default()
            },
            background_color: RAY_WHITE.into(),
            border_color: DARK_GRAY.into(),
            visibility: Visibility::Hidden,
            z_index: ZIndex::Global(1),
            ..Default::default()
        },
        PanelPart::Background,
    ));

    // sections: header, x, y, z, time, velocity, acceleration
    let axis_style = |color: Color| TextStyle {
        font_size: FONTSIZE * 0.98,
        color,
        ..Default::default()
    };
    commands.spawn((
        TextBundle {
            z_index: ZIndex::Global(2),
            ..TextBundle::from_sections([
                TextSection::new("Pos:\n", style.clone()),
                TextSection::new("", axis_style(GREEN)),
                TextSection::new("", axis_style(RED)),
                TextSection::new("", axis_style(BLUE)),
                TextSection::new("", style.clone()),
                TextSection::new("", style.clone()),
                TextSection::new("", style),
            ])
            .with_style(Style {
                position_type: PositionType::Absolute,
                top: Val::Px(PADDING),
                ..Default::default()
            })
        },
        HudText::Panel,
        PanelPart::Readout,
    ));

    commands.spawn((
        NodeBundle {
            style: Style {
                position_type: PositionType::Absolute,
                height: Val::Px(4.0),
                ..Default::default()
            },
            background_color: LIGHT_GRAY.into(),
            visibility: Visibility::Hidden,
            z_index: ZIndex::Global(2),
            ..Default::default()
        },
        PanelPart::Track,
    ));

    commands.spawn((
        NodeBundle {
            style: Style {
                position_type: PositionType::Absolute,
                width: Val::Px(KNOB_RADIUS * 2.0),
                height: Val::Px(KNOB_RADIUS * 2.0),
                border: UiRect::all(Val::Px(1.0)),
                ..Default::default()
            },
            background_color: RAY_WHITE.into(),
            border_color: DARK_GRAY.into(),
            border_radius: BorderRadius::all(Val::Px(KNOB_RADIUS)),
            visibility: Visibility::Hidden,
            z_index: ZIndex::Global(3),
            ..Default::default()
        },
        PanelPart::Knob,
    ));
}

fn status_line(state: SessionState) -> &'static str {
    match state {
        SessionState::Paused => "simulation: PAUSED  [SPACE] - resume  [N] - new simulation  [ENTER] - end simulation",
        SessionState::Running => "simulation: ON  [SPACE] - pause  [ENTER] - end simulation  [N] - new simulation",
        SessionState::Stopped => "simulation: OFF  [N] - new simulation  [P] - plot/unplot graph",
    }
}

fn update_hud_text(session: Res<SessionResource>, mut texts: Query<(&HudText, &mut Text)>) {
    let session = &session.0;
    let state = session.state();
    let r = session.readout();

    for (kind, mut text) in &mut texts {
        match kind {
            HudText::Status => text.sections[0].value = status_line(state).to_string(),
            HudText::Position => {
                text.sections[0].value = match state {
                    SessionState::Stopped => String::new(),
                    _ => format!(
                        "particle position: ({:.6}, {:.6}, {:.6})",
                        r.position.x, r.position.y, r.position.z
                    ),
                };
            }
            HudText::Panel => {
                let values = [
                    format!("  x: {:.6}\n", r.position.x),
                    format!("  y: {:.6}\n", r.position.y),
                    format!("  z: {:.6}\n\n", r.position.z),
                    format!("Time: {:.6}s\n", r.time),
                    format!("Velo: {:.6}m/s\n", r.speed),
                    format!("Acce: {:.6}m/s²", r.accel),
                ];
                for (section, value) in text.sections.iter_mut().skip(1).zip(values) {
                    section.value = value;
                }
            }
        }
    }
}

/// Place and show the scrub panel; hidden unless the run has stopped
fn layout_scrub_panel(
    session: Res<SessionResource>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut parts: Query<(&PanelPart, &mut Style, &mut Visibility)>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let geo = SliderGeometry::of(window);
    let stopped = session.0.state() == SessionState::Stopped;
    let marker = session.0.scrub_position();

    for (part, mut style, mut visibility) in &mut parts {
        *visibility = if stopped { Visibility::Inherited } else { Visibility::Hidden };

        match part {
            PanelPart::Background => {
                style.left = Val::Px(geo.panel_left);
                style.width = Val::Px(geo.panel_width);
                style.height = Val::Px(geo.panel_height);
            }
            PanelPart::Readout => {
                style.left = Val::Px(geo.panel_left + PADDING);
            }
            PanelPart::Track => {
                style.left = Val::Px(geo.left);
                style.top = Val::Px(geo.y - 2.0);
                style.width = Val::Px((geo.right - geo.left).max(0.0));
            }
            PanelPart::Knob => {
                // no marker until a trajectory exists
                let Some(p) = marker else {
                    *visibility = Visibility::Hidden;
                    continue;
                };
                style.left = Val::Px(geo.left + p as f32 * (geo.right - geo.left) - KNOB_RADIUS);
                style.top = Val::Px(geo.y - KNOB_RADIUS);
            }
        }
    }
}
