//! Folio Icons Core
//!
//! Maps résumé labels to one of a fixed set of decorative icon animations and
//! steps them per frame. Everything here is pure: hosts own the meshes and
//! apply the returned poses.

pub mod animator;
pub mod badge;
pub mod easing;
pub mod float;
pub mod kind;

pub use animator::{IconAnimator, IconPose, FLOAT_OFFSET_SPAN};
pub use badge::BadgeDrift;
pub use easing::CubicBezier;
pub use float::FloatParams;
pub use kind::{IconFamily, IconKind};
