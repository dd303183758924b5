//! Sun Dodge visuals: background, sun / plasma art with primitive fallbacks,
//! flare rings, HUD and the summary screen.

use bevy::prelude::*;

use super::components::{DodgeScoped, Plasma, Sun};
use super::session::{DodgePhase, DodgeSession};
use crate::app::state::AppState;
use crate::core::components::Layer;
use crate::core::config::GameConfig;
use crate::core::playfield::{FieldPos, Playfield};
use crate::core::system::PresentationSet;
use crate::rendering::art::{contain_size, paths, spawn_art_slot, ArtSlot, ShapeMeshes};
use crate::rendering::palette;
use crate::rendering::ui::{centered_text, overlay_root, text_at, FONT_BODY, FONT_LARGE, FONT_TITLE};

const FLARE_RINGS: usize = 10;
const RIM_WIDTH: f32 = 5.0;
const PLASMA_INNER_INSET: f32 = 5.0;

pub struct SunDodgeViewPlugin;

impl Plugin for SunDodgeViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DodgeMaterials>()
            .add_systems(OnEnter(AppState::SunDodge), (spawn_backdrop, spawn_hud))
            .add_systems(
                Update,
                (
                    attach_sun_visuals,
                    attach_plasma_visuals,
                    update_sun_visuals,
                    sync_flare_rings,
                    update_hud,
                )
                    .chain()
                    .in_set(PresentationSet)
                    .run_if(in_state(AppState::SunDodge).and(resource_exists::<DodgeSession>)),
            );
    }
}

#[derive(Resource)]
struct DodgeMaterials {
    plasma_outer: Handle<ColorMaterial>,
    plasma_inner: Handle<ColorMaterial>,
    /// One per ring; inner rings are the most opaque.
    flare: Vec<Handle<ColorMaterial>>,
}

impl FromWorld for DodgeMaterials {
    fn from_world(world: &mut World) -> Self {
        let mut mats = world.resource_mut::<Assets<ColorMaterial>>();
        let flare = (0..FLARE_RINGS)
            .map(|i| {
                let alpha = 1.0 - i as f32 / FLARE_RINGS as f32;
                mats.add(palette::FLARE.with_alpha(alpha))
            })
            .collect();
        Self {
            plasma_outer: mats.add(palette::PLASMA_OUTER),
            plasma_inner: mats.add(palette::PLASMA_INNER),
            flare,
        }
    }
}

/// Fallback discs of a sun; materials are per sun since the colour tracks charge.
#[derive(Component)]
struct SunDiscs {
    rim: Entity,
    body: Entity,
    rim_material: Handle<ColorMaterial>,
    body_material: Handle<ColorMaterial>,
}

#[derive(Component)]
struct FlareRing(usize);

#[derive(Component)]
struct HudRoot;
#[derive(Component)]
struct HudTime;
#[derive(Component)]
struct HudCharge;
#[derive(Component)]
struct FlareBanner;
#[derive(Component)]
struct SummaryScreen;
#[derive(Component)]
struct SummaryFlares;
#[derive(Component)]
struct SummaryTime;

fn spawn_backdrop(mut commands: Commands, asset_server: Res<AssetServer>, cfg: Res<GameConfig>) {
    let size = cfg.sun_dodge.window.size();
    let e = commands
        .spawn((
            DodgeScoped,
            FieldPos(size * 0.5),
            Layer::BACKDROP,
            Transform::default(),
            Visibility::default(),
        ))
        .id();
    // No fallback shapes: the clear colour is the fallback.
    spawn_art_slot(&mut commands, &asset_server, e, paths::DODGE_BACKGROUND, size);
}

fn spawn_hud(mut commands: Commands, cfg: Res<GameConfig>) {
    let h = cfg.sun_dodge.window.height;
    commands
        .spawn((DodgeScoped, HudRoot, overlay_root(Color::NONE)))
        .with_children(|p| {
            p.spawn((HudTime, text_at("Time: 0s", FONT_BODY, palette::TEXT, Vec2::new(10.0, 50.0))));
            p.spawn((HudCharge, text_at("Plasmas: 0", FONT_BODY, palette::TEXT, Vec2::new(10.0, 110.0))));
            p.spawn(centered_text("Eat the plasmas to grow!", FONT_BODY, palette::TEXT, 10.0 + FONT_BODY * 0.6));
        });
    commands
        .spawn((DodgeScoped, FlareBanner, overlay_root(Color::NONE), Visibility::Hidden))
        .with_children(|p| {
            p.spawn(centered_text("SOLAR FLARE RELEASE!", FONT_TITLE, palette::FLARE_TITLE, h / 2.0 - 50.0));
            p.spawn(centered_text("The sun has grown too large!", FONT_LARGE, palette::TEXT, h / 2.0 + 50.0));
        });
    commands
        .spawn((DodgeScoped, SummaryScreen, overlay_root(palette::FLARE_AFTERMATH), Visibility::Hidden))
        .with_children(|p| {
            p.spawn(centered_text("SOLAR FLARE COMPLETE", FONT_TITLE, palette::TEXT, h / 2.0 - 100.0));
            p.spawn((SummaryFlares, centered_text("Flares Released: 0", FONT_LARGE, palette::TEXT, h / 2.0 - 20.0)));
            p.spawn((SummaryTime, centered_text("Time Survived: 0s", FONT_LARGE, palette::TEXT, h / 2.0 + 20.0)));
            p.spawn(centered_text("Press SPACE to Restart", FONT_BODY, palette::TEXT_DIM, h / 2.0 + 80.0));
        });
}

fn attach_sun_visuals(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    cfg: Res<GameConfig>,
    shapes: Res<ShapeMeshes>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    q_new: Query<(Entity, &Sun), Added<Sun>>,
) {
    for (e, sun) in &q_new {
        let r = sun.radius(&cfg.sun_dodge.sun);
        let fallback = spawn_art_slot(&mut commands, &asset_server, e, paths::SUN, Vec2::splat(r * 2.0));
        let rim_material = materials.add(palette::sun_rim_color(sun.charge));
        let body_material = materials.add(palette::sun_color(sun.charge));
        let rim = commands
            .spawn((
                Mesh2d(shapes.circle.clone()),
                MeshMaterial2d(rim_material.clone()),
                Transform::from_scale(Vec3::splat(r)),
            ))
            .id();
        let body = commands
            .spawn((
                Mesh2d(shapes.circle.clone()),
                MeshMaterial2d(body_material.clone()),
                Transform::from_xyz(0.0, 0.0, 0.01).with_scale(Vec3::splat((r - RIM_WIDTH).max(0.0))),
            ))
            .id();
        commands.entity(fallback).add_children(&[rim, body]);
        commands.entity(e).insert(SunDiscs {
            rim,
            body,
            rim_material,
            body_material,
        });
    }
}

fn attach_plasma_visuals(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    shapes: Res<ShapeMeshes>,
    mats: Res<DodgeMaterials>,
    q_new: Query<(Entity, &Plasma), Added<Plasma>>,
) {
    for (e, plasma) in &q_new {
        let r = plasma.radius;
        let fallback = spawn_art_slot(&mut commands, &asset_server, e, paths::PLASMA, Vec2::splat(r * 2.0));
        let outer = commands
            .spawn((
                Mesh2d(shapes.circle.clone()),
                MeshMaterial2d(mats.plasma_outer.clone()),
                Transform::from_scale(Vec3::splat(r)),
            ))
            .id();
        let inner = commands
            .spawn((
                Mesh2d(shapes.circle.clone()),
                MeshMaterial2d(mats.plasma_inner.clone()),
                Transform::from_xyz(0.0, 0.0, 0.01).with_scale(Vec3::splat((r - PLASMA_INNER_INSET).max(0.0))),
            ))
            .id();
        commands.entity(fallback).add_children(&[outer, inner]);
    }
}

/// Size the sprite / discs to the current radius and recolour by charge.
fn update_sun_visuals(
    cfg: Res<GameConfig>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    q_sun: Query<(&Sun, &ArtSlot, &SunDiscs), Or<(Changed<Sun>, Changed<ArtSlot>)>>,
    mut q_sprite: Query<&mut Sprite>,
    mut q_tf: Query<&mut Transform, Without<Sun>>,
) {
    for (sun, slot, discs) in &q_sun {
        let r = sun.radius(&cfg.sun_dodge.sun);
        if let Ok(mut sprite) = q_sprite.get_mut(slot.sprite) {
            sprite.custom_size = Some(contain_size(slot.aspect, r * 2.0));
        }
        if let Ok(mut tf) = q_tf.get_mut(discs.rim) {
            tf.scale = Vec3::splat(r);
        }
        if let Ok(mut tf) = q_tf.get_mut(discs.body) {
            tf.scale = Vec3::splat((r - RIM_WIDTH).max(0.0));
        }
        if let Some(m) = materials.get_mut(&discs.rim_material) {
            m.color = palette::sun_rim_color(sun.charge);
        }
        if let Some(m) = materials.get_mut(&discs.body_material) {
            m.color = palette::sun_color(sun.charge);
        }
    }
}

/// Rings exist only during the flare; they expand from the sun over its duration.
fn sync_flare_rings(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    playfield: Res<Playfield>,
    session: Res<DodgeSession>,
    shapes: Res<ShapeMeshes>,
    mats: Res<DodgeMaterials>,
    q_sun: Query<&FieldPos, With<Sun>>,
    mut q_rings: Query<(Entity, &FlareRing, &mut Transform)>,
) {
    let DodgePhase::Flare { ticks } = session.phase else {
        for (e, _, _) in &q_rings {
            commands.entity(e).despawn();
        }
        return;
    };
    let progress = (ticks as f32 / cfg.sun_dodge.flare.duration_ticks.max(1) as f32).clamp(0.0, 1.0);
    let max_radius = playfield.width * 1.5 * progress;
    if q_rings.is_empty() {
        let Ok(center) = q_sun.single() else { return; };
        // Ring 0 would have zero radius.
        for i in 1..FLARE_RINGS {
            commands.spawn((
                DodgeScoped,
                FlareRing(i),
                *center,
                Layer(Layer::EFFECTS.0 + i as f32 * 0.01),
                Mesh2d(shapes.circle.clone()),
                MeshMaterial2d(mats.flare[i].clone()),
                Transform::from_scale(Vec3::ZERO),
            ));
        }
        return;
    }
    for (_, ring, mut tf) in &mut q_rings {
        let r = max_radius * ring.0 as f32 / FLARE_RINGS as f32;
        tf.scale = Vec3::new(r, r, 1.0);
    }
}

fn update_hud(
    cfg: Res<GameConfig>,
    session: Res<DodgeSession>,
    q_sun: Query<&Sun>,
    mut q_vis: ParamSet<(
        Query<&mut Visibility, With<HudRoot>>,
        Query<&mut Visibility, With<FlareBanner>>,
        Query<&mut Visibility, With<SummaryScreen>>,
    )>,
    mut q_text: ParamSet<(
        Query<&mut Text, With<HudTime>>,
        Query<&mut Text, With<HudCharge>>,
        Query<&mut Text, With<SummaryFlares>>,
        Query<&mut Text, With<SummaryTime>>,
    )>,
) {
    let show = |on: bool| if on { Visibility::Inherited } else { Visibility::Hidden };
    let (hud, banner, summary) = match session.phase {
        DodgePhase::Charging => (true, false, false),
        DodgePhase::Flare { .. } => (false, true, false),
        DodgePhase::GameOver { .. } => (false, false, true),
    };
    for mut v in &mut q_vis.p0() {
        v.set_if_neq(show(hud));
    }
    for mut v in &mut q_vis.p1() {
        v.set_if_neq(show(banner));
    }
    for mut v in &mut q_vis.p2() {
        v.set_if_neq(show(summary));
    }

    let secs = session.elapsed_secs(cfg.tick_hz);
    let charge = q_sun.iter().next().map_or(0, |s| s.charge);
    set_text(&mut q_text.p0(), format!("Time: {secs}s"));
    set_text(&mut q_text.p1(), format!("Plasmas: {charge}"));
    set_text(&mut q_text.p2(), format!("Flares Released: {}", session.flare_cycles));
    set_text(&mut q_text.p3(), format!("Time Survived: {secs}s"));
}

fn set_text<F: bevy::ecs::query::QueryFilter>(q: &mut Query<&mut Text, F>, value: String) {
    for mut text in q.iter_mut() {
        if text.0 != value {
            text.0 = value.clone();
        }
    }
}
