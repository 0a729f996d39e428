use bevy::prelude::*;
use folio_particles_core::{ParticleField, Pointer};

/// The mounted particle field.
#[derive(Resource)]
pub struct ParticleFieldResource(pub ParticleField);

/// Latest normalized pointer, `[-1, 1]` with +y up. Written by the pointer
/// tracking system; hosts without a window may write it directly.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerSnapshot(pub Pointer);

/// Entity for each transform slot, filled when instances are spawned.
/// Empty means nothing is mounted yet and publishing is skipped.
#[derive(Resource, Default, Debug)]
pub struct InstanceSlots(pub Vec<Entity>);
