//! Scene style shared by the host adapters: camera, lights and particle look.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    #[error("color `{0}` must have 3 or 6 hex digits")]
    BadLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    BadDigit(String),
}

/// Parse `#rrggbb` or `#rgb` into sRGB components in `[0, 1]`.
pub fn parse_hex_rgb(s: &str) -> Result<[f32; 3], StyleError> {
    let digits = s
        .strip_prefix('#')
        .ok_or_else(|| StyleError::MissingHash(s.to_string()))?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StyleError::BadDigit(s.to_string()));
    }
    let channel = |hex: &str| -> Result<f32, StyleError> {
        u8::from_str_radix(hex, 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| StyleError::BadDigit(s.to_string()))
    };
    match digits.len() {
        6 => Ok([
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ]),
        3 => {
            let mut out = [0.0; 3];
            for (slot, c) in out.iter_mut().zip(digits.chars()) {
                *slot = channel(&format!("{c}{c}"))?;
            }
            Ok(out)
        }
        _ => Err(StyleError::BadLength(s.to_string())),
    }
}

/// Look of the background scene. Colors are hex strings so hosts can pass
/// them straight through to CSS or a material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneStyle {
    pub camera_position: [f32; 3],
    /// Vertical field of view in degrees.
    pub camera_fov: f32,
    pub background: String,
    pub particle_color: String,
    pub particle_emissive_intensity: f32,
    pub particle_opacity: f32,
    /// Radius of the shared dodecahedron geometry.
    pub particle_radius: f32,
    pub ambient_intensity: f32,
    pub point_light_position: [f32; 3],
    pub point_light_color: String,
    pub point_light_intensity: f32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            camera_position: [0.0, 0.0, 50.0],
            camera_fov: 75.0,
            background: "#050a05".into(),
            particle_color: "#98ff98".into(),
            particle_emissive_intensity: 0.05,
            particle_opacity: 0.4,
            particle_radius: 0.2,
            ambient_intensity: 0.5,
            point_light_position: [10.0, 10.0, 10.0],
            point_light_color: "#98ff98".into(),
            point_light_intensity: 1.0,
        }
    }
}

impl SceneStyle {
    pub fn background_rgb(&self) -> Result<[f32; 3], StyleError> {
        parse_hex_rgb(&self.background)
    }

    pub fn particle_rgb(&self) -> Result<[f32; 3], StyleError> {
        parse_hex_rgb(&self.particle_color)
    }

    pub fn point_light_rgb(&self) -> Result<[f32; 3], StyleError> {
        parse_hex_rgb(&self.point_light_color)
    }

    /// Check every color field parses.
    pub fn validate(&self) -> Result<(), StyleError> {
        self.background_rgb()?;
        self.particle_rgb()?;
        self.point_light_rgb()?;
        Ok(())
    }
}
