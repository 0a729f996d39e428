use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use folio_particles_core::{FieldConfig, ParticleField, SceneStyle};

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{IconSpin, ParticleInstance};
pub use resources::{InstanceSlots, ParticleFieldResource, PointerSnapshot};

/// Ordering of the per-frame work: read pointer, step, then publish.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FolioSet {
    Input,
    Step,
    Publish,
}

pub struct FolioParticlesPlugin {
    pub config: FieldConfig,
    pub style: SceneStyle,
    /// Fixed seed for a reproducible field; `None` draws one per run.
    pub seed: Option<u64>,
    /// Spawn one entity per particle at startup.
    pub spawn_instances: bool,
}

impl Default for FolioParticlesPlugin {
    fn default() -> Self {
        Self {
            config: FieldConfig::default(),
            style: SceneStyle::default(),
            seed: None,
            spawn_instances: true,
        }
    }
}

impl FolioParticlesPlugin {
    fn field_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Build the field, falling back to the default config when `config` is invalid.
    fn build_field(&self) -> ParticleField {
        match ParticleField::new(self.config.clone(), &mut self.field_rng()) {
            Ok(field) => field,
            Err(e) => {
                log::warn!("invalid particle field config ({e}); using defaults");
                ParticleField::with_default_config(&mut self.field_rng())
            }
        }
    }
}

impl Plugin for FolioParticlesPlugin {
    fn build(&self, app: &mut App) {
        match self.style.background_rgb() {
            Ok([r, g, b]) => {
                app.insert_resource(ClearColor(Color::srgb(r, g, b)));
            }
            Err(e) => log::warn!("scene background ignored: {e}"),
        }

        app.insert_resource(ParticleFieldResource(self.build_field()))
            .init_resource::<PointerSnapshot>()
            .init_resource::<InstanceSlots>()
            .configure_sets(
                Update,
                (FolioSet::Input, FolioSet::Step, FolioSet::Publish).chain(),
            )
            .add_systems(
                Update,
                (
                    systems::track_pointer_system.in_set(FolioSet::Input),
                    systems::step_field_system.in_set(FolioSet::Step),
                    systems::spin_icons_system.in_set(FolioSet::Step),
                    systems::apply_particle_transforms_system.in_set(FolioSet::Publish),
                ),
            );

        if self.spawn_instances {
            app.add_systems(Startup, systems::spawn_particle_instances);
        }
    }
}
