//! One-shot animation completion.
//!
//! [`render_animated_sprites`](crate::systems::animatedsprite::render_animated_sprites)
//! triggers an [`AnimationFinishedEvent`] on the draw where a one-shot sprite
//! runs past its last frame. It fires once per sprite.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<AnimationFinishedEvent>| {
//!     log::info!("{} is done", trigger.event().image_id);
//! });
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct AnimationFinishedEvent {
    /// The sprite entity that finished.
    pub entity: Entity,
    pub image_id: String,
}

/// Despawn sprites as soon as their one-shot animation ends.
pub fn despawn_finished_observer(trigger: On<AnimationFinishedEvent>, mut commands: Commands) {
    let entity = trigger.event().entity;
    log::debug!("Despawning finished sprite {:?}", entity);
    commands.entity(entity).despawn();
}
