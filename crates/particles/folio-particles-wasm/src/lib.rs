use js_sys::{Float32Array, JSON};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use folio_icons_core::{BadgeDrift, IconAnimator, IconFamily, IconKind};
use folio_particles_core::{
    FieldConfig, MatrixSink, ParticleField, Pointer, SceneStyle, MATRIX_STRIDE,
};
use folio_resume_core::{Resume, ResumeIcons};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Seeded generator; without a seed one is drawn from `Math.random()`.
fn rng_from_seed(seed: Option<f64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| (js_sys::Math::random() * (1u64 << 53) as f64).floor());
    StdRng::seed_from_u64(seed as u64)
}

/// Accept either a JSON string or a plain JS object and return JSON text.
fn json_text(value: &JsValue, what: &str) -> Result<String, JsError> {
    if jsvalue_is_undefined_or_null(value) {
        return Err(JsError::new(&format!("{what}: value is null/undefined")));
    }
    if let Some(s) = value.as_string() {
        return Ok(s);
    }
    JSON::stringify(value)
        .map_err(|e| JsError::new(&format!("{what} stringify error: {:?}", e)))?
        .as_string()
        .ok_or_else(|| JsError::new(&format!("{what}: stringify produced non-string")))
}

#[wasm_bindgen]
pub struct FolioParticles {
    field: ParticleField,
}

#[wasm_bindgen]
impl FolioParticles {
    /// Create a field. Pass a JSON config object or undefined/null for defaults,
    /// and an optional integer seed for a reproducible pool.
    /// Example:
    ///   new FolioParticles({ count: 1500 }, 42)
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, seed: Option<f64>) -> Result<FolioParticles, JsError> {
        console_error_panic_hook::set_once();

        let cfg: FieldConfig = if jsvalue_is_undefined_or_null(&config) {
            FieldConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let mut rng = rng_from_seed(seed);
        let field = ParticleField::new(cfg, &mut rng)
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;
        Ok(FolioParticles { field })
    }

    /// Advance one frame with the host clock (seconds) and normalized pointer.
    #[wasm_bindgen]
    pub fn step(&mut self, elapsed: f64, pointer_x: f64, pointer_y: f64) {
        self.field.step(elapsed, Pointer::new(pointer_x, pointer_y));
    }

    /// Number of instances.
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.field.len()
    }

    /// Completed steps.
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> f64 {
        self.field.frame() as f64
    }

    /// Packed `[x, y, z, scale]` per instance, copied into a new array.
    #[wasm_bindgen]
    pub fn transforms(&self) -> Float32Array {
        Float32Array::from(self.field.buffer().to_quads().as_slice())
    }

    /// Write column-major instance matrices into `target` (for example an
    /// `InstancedMesh.instanceMatrix.array`). Returns false and leaves the
    /// target alone when it is too small; the next frame can retry.
    #[wasm_bindgen(js_name = write_matrices)]
    pub fn write_matrices(&self, target: &mut [f32]) -> bool {
        let floats = target.len();
        let published = self.field.publish(Some(&mut MatrixSink::new(target)));
        if !published {
            log::debug!(
                "matrix target holds {floats} floats, need {}",
                self.field.len() * MATRIX_STRIDE
            );
        }
        published
    }

    /// The config this field was built from, with defaults filled in.
    #[wasm_bindgen]
    pub fn config(&self) -> Result<JsValue, JsError> {
        to_js(self.field.config())
    }
}

#[wasm_bindgen]
pub struct FolioIcon {
    anim: IconAnimator,
}

#[wasm_bindgen]
impl FolioIcon {
    /// `family` is `"experience"` (label = job type) or `"skill"` (label = group name).
    /// Without `float_offset` the bob phase is random per icon.
    #[wasm_bindgen(constructor)]
    pub fn new(family: &str, label: &str, float_offset: Option<f32>) -> Result<FolioIcon, JsError> {
        let family = match family {
            "experience" => IconFamily::Experience,
            "skill" => IconFamily::Skill,
            other => return Err(JsError::new(&format!("unknown icon family `{other}`"))),
        };
        let kind = IconKind::select(family, label);
        let anim = match float_offset {
            Some(offset) => IconAnimator::with_float_offset(kind, offset),
            None => IconAnimator::sample(kind, &mut rng_from_seed(None)),
        };
        Ok(FolioIcon { anim })
    }

    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.anim.kind().as_str().to_string()
    }

    /// Advance one frame; returns `{ spin, float_rotation, float_y }`.
    #[wasm_bindgen]
    pub fn step(&mut self, elapsed: f32, emphasized: bool) -> Result<JsValue, JsError> {
        let pose = self.anim.step(elapsed, emphasized);
        to_js(&pose)
    }
}

#[wasm_bindgen]
pub struct FolioBadges {
    drifts: Vec<BadgeDrift>,
}

#[wasm_bindgen]
impl FolioBadges {
    #[wasm_bindgen(constructor)]
    pub fn new(count: usize, seed: Option<f64>) -> FolioBadges {
        let mut rng = rng_from_seed(seed);
        FolioBadges {
            drifts: BadgeDrift::sample_many(count, &mut rng),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.drifts.len()
    }

    /// `[x, y]` px per badge at time `t` seconds.
    #[wasm_bindgen]
    pub fn offsets(&self, t: f32) -> Float32Array {
        let flat: Vec<f32> = self.drifts.iter().flat_map(|d| d.offset_at(t)).collect();
        Float32Array::from(flat.as_slice())
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("outputs error: {e}")))
}

#[derive(Serialize)]
struct LoadedResume<'a> {
    resume: &'a Resume,
    icons: ResumeIcons,
}

/// Parse and validate a résumé (JSON string or object). Returns
/// `{ resume, icons: { work, skills } }`.
#[wasm_bindgen(js_name = load_resume)]
pub fn load_resume(data: JsValue) -> Result<JsValue, JsError> {
    let text = json_text(&data, "load_resume")?;
    let resume = Resume::from_json_str(&text).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&LoadedResume {
        icons: resume.icons(),
        resume: &resume,
    })
}

/// Fill a partial scene style with defaults and check its colors.
#[wasm_bindgen(js_name = scene_style)]
pub fn scene_style(overrides: JsValue) -> Result<JsValue, JsError> {
    let style: SceneStyle = if jsvalue_is_undefined_or_null(&overrides) {
        SceneStyle::default()
    } else {
        swb::from_value(overrides).map_err(|e| JsError::new(&format!("style error: {e}")))?
    };
    style
        .validate()
        .map_err(|e| JsError::new(&format!("style error: {e}")))?;
    to_js(&style)
}

#[wasm_bindgen(js_name = experience_icon)]
pub fn experience_icon(job_type: &str) -> String {
    IconKind::for_experience(job_type).as_str().to_string()
}

#[wasm_bindgen(js_name = skill_icon)]
pub fn skill_icon(category: &str) -> String {
    IconKind::for_skill(category).as_str().to_string()
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
