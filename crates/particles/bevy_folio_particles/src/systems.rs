use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::components::{IconSpin, ParticleInstance};
use crate::resources::{InstanceSlots, ParticleFieldResource, PointerSnapshot};
use folio_particles_core::{InstanceTransform, Pointer, TransformSink};

/// Map a window cursor position (pixels, origin top-left) to `[-1, 1]` with +y up.
pub fn normalize_cursor(cursor: Vec2, size: Vec2) -> Option<Pointer> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }
    let x = cursor.x / size.x * 2.0 - 1.0;
    let y = -(cursor.y / size.y * 2.0 - 1.0);
    Some(Pointer::new(x as f64, y as f64))
}

/// Reads the primary window cursor. Leaves the snapshot alone when the cursor
/// is outside the window so the field keeps drifting toward the last spot.
pub fn track_pointer_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerSnapshot>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    if let Some(p) = normalize_cursor(cursor, Vec2::new(window.width(), window.height())) {
        pointer.0 = p;
    }
}

/// Spawns one entity per transform slot and records them in [`InstanceSlots`].
/// Hosts attach meshes/materials by querying `Added<ParticleInstance>`.
pub fn spawn_particle_instances(
    mut commands: Commands,
    field: Res<ParticleFieldResource>,
    mut slots: ResMut<InstanceSlots>,
) {
    slots.0.clear();
    slots.0.reserve(field.0.len());
    for (i, t) in field.0.buffer().iter().enumerate() {
        let entity = commands
            .spawn((
                ParticleInstance(i),
                SpatialBundle::from_transform(to_bevy_transform(t)),
            ))
            .id();
        slots.0.push(entity);
    }
    log::debug!("spawned {} particle instances", slots.0.len());
}

/// One procedural step per rendered frame.
pub fn step_field_system(
    time: Res<Time>,
    pointer: Res<PointerSnapshot>,
    mut field: ResMut<ParticleFieldResource>,
) {
    field.0.step(time.elapsed_seconds_f64(), pointer.0);
}

fn to_bevy_transform(t: &InstanceTransform) -> Transform {
    Transform {
        translation: Vec3::from_array(t.position),
        rotation: Quat::IDENTITY,
        scale: Vec3::splat(t.scale),
    }
}

/// Publishes into entity transforms through their slot index.
struct SlotWriter<'a, 'w, 's> {
    slots: &'a [Entity],
    transforms: &'a mut Query<'w, 's, &'static mut Transform, With<ParticleInstance>>,
}

impl TransformSink for SlotWriter<'_, '_, '_> {
    fn set_transform(&mut self, index: usize, transform: &InstanceTransform) {
        let Some(entity) = self.slots.get(index) else {
            return;
        };
        if let Ok(mut tf) = self.transforms.get_mut(*entity) {
            tf.translation = Vec3::from_array(transform.position);
            tf.scale = Vec3::splat(transform.scale);
        }
    }

    fn mark_dirty(&mut self) {
        // Written transforms are already flagged by change detection.
    }

    /// Slots up to the first despawned instance.
    fn capacity(&self) -> usize {
        self.slots
            .iter()
            .position(|entity| !self.transforms.contains(*entity))
            .unwrap_or(self.slots.len())
    }
}

/// Copy the field's buffer onto the instance entities. Skipped until the
/// instances exist, and for any frame where one of them is gone.
pub fn apply_particle_transforms_system(
    field: Res<ParticleFieldResource>,
    slots: Res<InstanceSlots>,
    mut transforms: Query<&'static mut Transform, With<ParticleInstance>>,
) {
    if slots.0.is_empty() {
        field.0.publish(None);
        return;
    }
    let mut writer = SlotWriter {
        slots: &slots.0,
        transforms: &mut transforms,
    };
    if !field.0.publish(Some(&mut writer)) {
        log::trace!("particle instances incomplete, frame {} not applied", field.0.frame());
    }
}

/// Step every icon and place it: outer spin, then the float bob inside it.
pub fn spin_icons_system(time: Res<Time>, mut icons: Query<(&mut IconSpin, &mut Transform)>) {
    let elapsed = time.elapsed_seconds();
    for (mut icon, mut tf) in icons.iter_mut() {
        let emphasized = icon.emphasized;
        let pose = icon.animator.step(elapsed, emphasized);

        let [sx, sy, sz] = pose.spin;
        let [fx, fy, fz] = pose.float_rotation;
        let spin = Quat::from_euler(EulerRot::XYZ, sx, sy, sz);
        let float = Quat::from_euler(EulerRot::XYZ, fx, fy, fz);

        tf.rotation = spin * float;
        tf.translation = icon.anchor + spin * Vec3::new(0.0, pose.float_y, 0.0);
    }
}
