use bevy_ecs::prelude::Component;

/// Whether the entity ended last tick resting on top of a platform tile.
///
/// Recomputed every frame by the landing system; the controller reads the
/// value from the previous frame to decide whether a jump is allowed.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grounded(pub bool);
