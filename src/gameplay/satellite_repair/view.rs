//! Satellite Repair visuals: sprites with magenta placeholders, hearts,
//! the minigame overlay and the mission summary with its "Try Again" button.

use bevy::prelude::*;

use super::components::{Astronaut, DamagedPanel, RepairScoped, SatelliteBody, SolarParticle};
use super::session::{MissionOutcome, RepairPhase, RepairSession, RetryMission};
use crate::app::state::AppState;
use crate::core::components::Layer;
use crate::core::config::GameConfig;
use crate::core::playfield::FieldPos;
use crate::core::system::PresentationSet;
use crate::rendering::art::{paths, spawn_art_slot, ArtSlot, ShapeMeshes};
use crate::rendering::palette;
use crate::rendering::ui::{centered_text, overlay_root, rect_node, FONT_BODY, FONT_LARGE};

const HEART_SIZE: f32 = 30.0;
const HEART_STRIDE: f32 = 35.0;
const HUD_MARGIN: f32 = 10.0;
const BUTTON_SIZE: Vec2 = Vec2::new(250.0, 50.0);
const BUTTON_OFFSET_Y: f32 = 120.0;

pub struct SatelliteRepairViewPlugin;

impl Plugin for SatelliteRepairViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RepairMaterials>()
            .add_systems(OnEnter(AppState::SatelliteRepair), (spawn_backdrop, spawn_hearts, spawn_overlays))
            .add_systems(
                Update,
                (
                    (attach_placeholder_art, attach_panel_visuals),
                    (tint_damaged_astronaut, recolor_panels, update_hearts, update_overlays),
                    retry_button,
                )
                    .chain()
                    .in_set(PresentationSet)
                    .run_if(in_state(AppState::SatelliteRepair).and(resource_exists::<RepairSession>)),
            );
    }
}

#[derive(Resource)]
struct RepairMaterials {
    placeholder: Handle<ColorMaterial>,
    placeholder_hurt: Handle<ColorMaterial>,
    damaged: Handle<ColorMaterial>,
    repaired: Handle<ColorMaterial>,
}

impl FromWorld for RepairMaterials {
    fn from_world(world: &mut World) -> Self {
        let mut mats = world.resource_mut::<Assets<ColorMaterial>>();
        Self {
            placeholder: mats.add(palette::PLACEHOLDER),
            placeholder_hurt: mats.add(palette::DAMAGE_TINT),
            damaged: mats.add(palette::PANEL_DAMAGED),
            repaired: mats.add(palette::PANEL_REPAIRED),
        }
    }
}

/// Fallback square of an entity drawn with a placeholder.
#[derive(Component)]
struct PlaceholderShape(Entity);

#[derive(Component)]
struct Heart(u32);

#[derive(Component)]
struct MinigameOverlay;
#[derive(Component)]
struct ProgressFill;
#[derive(Component)]
struct SummaryOverlay;
#[derive(Component)]
struct SummaryWon;
#[derive(Component)]
struct SummaryLost;
#[derive(Component)]
struct RetryButton;

fn spawn_backdrop(mut commands: Commands, asset_server: Res<AssetServer>, cfg: Res<GameConfig>) {
    let size = cfg.satellite_repair.window.size();
    let e = commands
        .spawn((
            RepairScoped,
            FieldPos(size * 0.5),
            Layer::BACKDROP,
            Transform::default(),
            Visibility::default(),
        ))
        .id();
    spawn_art_slot(&mut commands, &asset_server, e, paths::REPAIR_BACKGROUND, size);
}

fn spawn_placeholder_square(
    commands: &mut Commands,
    shapes: &ShapeMeshes,
    material: Handle<ColorMaterial>,
    fallback: Entity,
    size: Vec2,
) -> Entity {
    let square = commands
        .spawn((
            Mesh2d(shapes.square.clone()),
            MeshMaterial2d(material),
            Transform::from_scale(size.extend(1.0)),
        ))
        .id();
    commands.entity(fallback).add_child(square);
    square
}

fn spawn_hearts(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    cfg: Res<GameConfig>,
    shapes: Res<ShapeMeshes>,
    mats: Res<RepairMaterials>,
) {
    for i in 0..cfg.satellite_repair.astronaut.lives {
        let center = Vec2::new(HUD_MARGIN + i as f32 * HEART_STRIDE, HUD_MARGIN) + Vec2::splat(HEART_SIZE * 0.5);
        let e = commands
            .spawn((
                RepairScoped,
                Heart(i),
                FieldPos(center),
                Layer::HUD,
                Transform::default(),
                Visibility::default(),
            ))
            .id();
        let size = Vec2::splat(HEART_SIZE);
        let fallback = spawn_art_slot(&mut commands, &asset_server, e, paths::HEART, size);
        spawn_placeholder_square(&mut commands, &shapes, mats.placeholder.clone(), fallback, size);
    }
}

fn spawn_overlays(mut commands: Commands, cfg: Res<GameConfig>) {
    let sr = &cfg.satellite_repair;
    let (w, h) = (sr.window.width, sr.window.height);
    let [bx, by, bw, bh] = sr.minigame.bar;

    commands
        .spawn((RepairScoped, MinigameOverlay, overlay_root(palette::OVERLAY), Visibility::Hidden))
        .with_children(|p| {
            p.spawn((rect_node(bx, by, bw, bh), BackgroundColor(palette::BAR_BACKGROUND)));
            p.spawn((ProgressFill, rect_node(bx, by, 0.0, bh), BackgroundColor(palette::BAR_PROGRESS)));
            p.spawn((
                Node {
                    border: UiRect::all(Val::Px(2.0)),
                    ..rect_node(bx, by, bw, bh)
                },
                BorderColor(palette::TEXT),
            ));
            p.spawn(centered_text("Repairing!", FONT_LARGE, palette::TEXT, by - 50.0 + FONT_LARGE * 0.6));
            p.spawn(centered_text(
                "Press [SPACE] quickly to repair",
                FONT_BODY,
                palette::TEXT,
                by + 60.0 + FONT_BODY * 0.6,
            ));
        });

    commands
        .spawn((RepairScoped, SummaryOverlay, overlay_root(palette::OVERLAY), Visibility::Hidden))
        .with_children(|p| {
            p.spawn((SummaryWon, overlay_root(Color::NONE), Visibility::Hidden))
                .with_children(|p| {
                    p.spawn(centered_text("MISSION ACCOMPLISHED!", FONT_LARGE, palette::PANEL_REPAIRED, h / 2.0 - 20.0));
                    p.spawn(centered_text("You have repaired the satellite.", FONT_BODY, palette::TEXT, h / 2.0 + 20.0));
                });
            p.spawn((SummaryLost, overlay_root(Color::NONE), Visibility::Hidden))
                .with_children(|p| {
                    p.spawn(centered_text("MISSION FAILED", FONT_LARGE, palette::PANEL_DAMAGED, h / 2.0 - 100.0));
                    p.spawn(centered_text("The panels could not be repaired.", FONT_BODY, palette::TEXT, h / 2.0 - 60.0));
                    p.spawn(centered_text(
                        "Without power, the communications satellite is offline.",
                        FONT_BODY,
                        palette::TEXT,
                        h / 2.0,
                    ));
                    p.spawn(centered_text(
                        "Global communications and GPS will be affected.",
                        FONT_BODY,
                        palette::TEXT,
                        h / 2.0 + 30.0,
                    ));
                });
            p.spawn((
                RetryButton,
                Button,
                Node {
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..rect_node(w / 2.0 - BUTTON_SIZE.x / 2.0, h / 2.0 + BUTTON_OFFSET_Y, BUTTON_SIZE.x, BUTTON_SIZE.y)
                },
                BorderRadius::all(Val::Px(10.0)),
                BackgroundColor(palette::RETRY_BUTTON),
            ))
            .with_children(|b| {
                b.spawn((
                    Text::new("Try Again"),
                    TextFont {
                        font_size: FONT_LARGE,
                        ..default()
                    },
                    TextColor(palette::TEXT),
                ));
            });
        });
}

/// Sprites for every image-backed entity, with a magenta square while the art is missing.
fn attach_placeholder_art(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    cfg: Res<GameConfig>,
    shapes: Res<ShapeMeshes>,
    mats: Res<RepairMaterials>,
    q_astronaut: Query<Entity, Added<Astronaut>>,
    q_satellite: Query<(Entity, &SatelliteBody), Added<SatelliteBody>>,
    q_particles: Query<(Entity, &SolarParticle), Added<SolarParticle>>,
) {
    let attach = |commands: &mut Commands, owner: Entity, path: &'static str, size: Vec2| {
        let fallback = spawn_art_slot(commands, &asset_server, owner, path, size);
        let square = spawn_placeholder_square(commands, &shapes, mats.placeholder.clone(), fallback, size);
        commands.entity(owner).insert(PlaceholderShape(square));
    };
    for e in &q_astronaut {
        attach(&mut commands, e, paths::ASTRONAUT, Vec2::splat(cfg.satellite_repair.astronaut.size));
    }
    for (e, body) in &q_satellite {
        attach(&mut commands, e, paths::SATELLITE, body.size);
    }
    for (e, particle) in &q_particles {
        let path = paths::PARTICLES[particle.variant % paths::PARTICLES.len()];
        attach(&mut commands, e, path, Vec2::splat(particle.size));
    }
}

fn attach_panel_visuals(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    shapes: Res<ShapeMeshes>,
    mats: Res<RepairMaterials>,
    q_new: Query<(Entity, &DamagedPanel), Added<DamagedPanel>>,
) {
    let size = cfg.satellite_repair.panels.size;
    for (e, panel) in &q_new {
        let material = if panel.repaired { mats.repaired.clone() } else { mats.damaged.clone() };
        commands.entity(e).insert((
            Mesh2d(shapes.square.clone()),
            MeshMaterial2d(material),
            Transform::from_scale(Vec3::new(size, size, 1.0)),
        ));
    }
}

/// Red multiply tint while the damage flash runs.
fn tint_damaged_astronaut(
    mats: Res<RepairMaterials>,
    q_astronaut: Query<(&Astronaut, &ArtSlot, &PlaceholderShape), Changed<Astronaut>>,
    mut q_sprite: Query<&mut Sprite>,
    mut q_shape: Query<&mut MeshMaterial2d<ColorMaterial>>,
) {
    for (astronaut, slot, shape) in &q_astronaut {
        let hurt = astronaut.is_flashing();
        if let Ok(mut sprite) = q_sprite.get_mut(slot.sprite) {
            sprite.color = if hurt { palette::DAMAGE_TINT } else { Color::WHITE };
        }
        if let Ok(mut material) = q_shape.get_mut(shape.0) {
            material.0 = if hurt { mats.placeholder_hurt.clone() } else { mats.placeholder.clone() };
        }
    }
}

fn recolor_panels(
    mats: Res<RepairMaterials>,
    mut q: Query<(&DamagedPanel, &mut MeshMaterial2d<ColorMaterial>), Changed<DamagedPanel>>,
) {
    for (panel, mut material) in &mut q {
        material.0 = if panel.repaired { mats.repaired.clone() } else { mats.damaged.clone() };
    }
}

fn update_hearts(q_astronaut: Query<&Astronaut>, mut q_hearts: Query<(&Heart, &mut Visibility)>) {
    let lives = q_astronaut.iter().next().map_or(0, |a| a.lives);
    for (heart, mut vis) in &mut q_hearts {
        vis.set_if_neq(if heart.0 < lives { Visibility::Inherited } else { Visibility::Hidden });
    }
}

fn update_overlays(
    cfg: Res<GameConfig>,
    session: Res<RepairSession>,
    mut q_vis: ParamSet<(
        Query<&mut Visibility, With<MinigameOverlay>>,
        Query<&mut Visibility, With<SummaryOverlay>>,
        Query<&mut Visibility, With<SummaryWon>>,
        Query<&mut Visibility, With<SummaryLost>>,
    )>,
    mut q_fill: Query<&mut Node, With<ProgressFill>>,
) {
    let show = |on: bool| if on { Visibility::Inherited } else { Visibility::Hidden };
    let (minigame, outcome) = match session.phase {
        RepairPhase::Flying => (None, None),
        RepairPhase::Minigame { progress, .. } => (Some(progress), None),
        RepairPhase::GameOver(o) => (None, Some(o)),
    };
    for mut v in &mut q_vis.p0() {
        v.set_if_neq(show(minigame.is_some()));
    }
    for mut v in &mut q_vis.p1() {
        v.set_if_neq(show(outcome.is_some()));
    }
    for mut v in &mut q_vis.p2() {
        v.set_if_neq(show(outcome == Some(MissionOutcome::Accomplished)));
    }
    for mut v in &mut q_vis.p3() {
        v.set_if_neq(show(outcome == Some(MissionOutcome::Failed)));
    }
    if let Some(progress) = minigame {
        let mg = &cfg.satellite_repair.minigame;
        let width = progress_width(progress, mg.target, mg.bar[2]);
        for mut node in &mut q_fill {
            node.width = Val::Px(width);
        }
    }
}

/// Filled share of the repair bar, clamped to the bar.
pub fn progress_width(progress: u32, target: u32, bar_width: f32) -> f32 {
    if target == 0 {
        return bar_width;
    }
    (progress as f32 / target as f32 * bar_width).clamp(0.0, bar_width)
}

fn retry_button(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<RetryButton>)>,
    mut retry: EventWriter<RetryMission>,
) {
    for (interaction, mut bg) in &mut q {
        match interaction {
            Interaction::Pressed => {
                retry.write(RetryMission);
            }
            Interaction::Hovered => bg.0 = palette::RETRY_BUTTON_HOVER,
            Interaction::None => bg.0 = palette::RETRY_BUTTON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_is_proportional_and_clamped() {
        assert_eq!(progress_width(0, 100, 400.0), 0.0);
        assert_eq!(progress_width(50, 100, 400.0), 200.0);
        assert_eq!(progress_width(105, 100, 400.0), 400.0);
    }

    #[test]
    fn one_heart_per_remaining_life() {
        let mut app = App::new();
        app.add_systems(Update, update_hearts);
        app.world_mut().spawn(Astronaut::new(1));
        let hearts: Vec<Entity> = (0..3)
            .map(|i| app.world_mut().spawn((Heart(i), Visibility::Inherited)).id())
            .collect();
        app.update();
        let shown: Vec<bool> = hearts
            .iter()
            .map(|e| app.world().get::<Visibility>(*e) != Some(&Visibility::Hidden))
            .collect();
        assert_eq!(shown, vec![true, false, false]);

        // Retry refills the row.
        let mut q = app.world_mut().query::<&mut Astronaut>();
        for mut a in q.iter_mut(app.world_mut()) {
            a.lives = 3;
        }
        app.update();
        assert!(hearts
            .iter()
            .all(|e| app.world().get::<Visibility>(*e) == Some(&Visibility::Inherited)));
    }
}
