use bevy::pbr::CascadeShadowConfigBuilder;
use bevy::prelude::*;
use constants::lighting::{
    AMBIENT_BRIGHTNESS_PER_UNIT, AMBIENT_LIGHT_INTENSITY, DIRECTIONAL_LIGHT_INTENSITY,
    DIRECTIONAL_LIGHT_POSITION, DIRECTIONAL_LUX_PER_UNIT, POINT_LIGHT_RANGE, POINT_LIGHTS,
    POINT_LUMENS_PER_UNIT,
};
use constants::render_settings::SHADOW_MAX_DISTANCE;

/// Overhead shadow caster aimed at the origin.
pub fn spawn_directional_light(commands: &mut Commands) -> Entity {
    let cascades = CascadeShadowConfigBuilder {
        num_cascades: 1,
        maximum_distance: SHADOW_MAX_DISTANCE,
        ..default()
    }
    .build();

    commands
        .spawn((
            Name::new("Directional Light"),
            DirectionalLight {
                illuminance: DIRECTIONAL_LIGHT_INTENSITY * DIRECTIONAL_LUX_PER_UNIT,
                shadows_enabled: true,
                ..default()
            },
            // Straight down; up must not be parallel to the view direction.
            Transform::from_translation(DIRECTIONAL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Z),
            cascades,
        ))
        .id()
}

/// Ambient light is a global resource, not an entity.
pub fn insert_ambient_light(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        brightness: AMBIENT_LIGHT_INTENSITY * AMBIENT_BRIGHTNESS_PER_UNIT,
        ..default()
    });
}

pub fn spawn_point_lights(commands: &mut Commands) -> [Entity; 2] {
    POINT_LIGHTS.each_ref().map(|setup| {
        commands
            .spawn((
                Name::new("Point Light"),
                PointLight {
                    intensity: setup.intensity * POINT_LUMENS_PER_UNIT,
                    range: POINT_LIGHT_RANGE,
                    ..default()
                },
                Transform::from_translation(setup.position),
            ))
            .id()
    })
}
