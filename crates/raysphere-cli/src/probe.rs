//! Probe files and intersection reports.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use raysphere_intersect::{hits_agree, IntersectConfig, Method, Ray, Sphere, SphereHit};
use raysphere_math::{Tolerance, Vector};
use serde::{Deserialize, Serialize};

/// One sphere and the rays to test against it.
///
/// ```toml
/// sphere = { center = [3, 0, 5], radius = 3 }
/// rays = [{ origin = [1, -2, -1], direction = [1, 2, 4] }]
///
/// [intersect]
/// method = "geometric"
/// ```
#[derive(Debug, Deserialize)]
pub struct ProbeFile {
    pub sphere: Sphere,
    pub rays: Vec<Ray>,
    #[serde(default)]
    pub intersect: IntersectConfig,
}

impl ProbeFile {
    /// Load a probe file; `.json` is parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let probe = match ext.to_lowercase().as_str() {
            "json" => Self::from_json(&text),
            _ => Self::from_toml(&text),
        }
        .with_context(|| format!("invalid probe file {}", path.display()))?;
        info!("loaded {} ray(s) from {}", probe.rays.len(), path.display());
        Ok(probe)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// A hit as printed: parameter, point and outward normal.
#[derive(Debug, Serialize)]
pub struct HitReport {
    pub t: f64,
    pub point: Vector,
    pub normal: Vector,
}

impl HitReport {
    fn new(hit: SphereHit, sphere: &Sphere) -> Self {
        Self {
            t: hit.t,
            point: hit.point,
            normal: hit.normal(sphere),
        }
    }
}

/// Outcome of one method on one ray; `hit` is `null` on a miss.
#[derive(Debug, Serialize)]
pub struct MethodReport {
    pub method: Method,
    pub hit: Option<HitReport>,
}

/// All requested methods for one ray.
#[derive(Debug, Serialize)]
pub struct RayReport {
    pub ray: Ray,
    pub origin_inside: bool,
    pub results: Vec<MethodReport>,
    /// Present when more than one method ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agree: Option<bool>,
}

/// Run each of `configs` on `ray` and collect the results.
pub fn probe_ray(sphere: &Sphere, ray: &Ray, configs: &[IntersectConfig]) -> RayReport {
    let hits: Vec<(Method, Option<SphereHit>)> = configs
        .iter()
        .map(|config| (config.method, config.intersect(sphere, ray)))
        .collect();

    let agree = (hits.len() > 1).then(|| {
        hits.windows(2)
            .all(|pair| hits_agree(pair[0].1, pair[1].1, Tolerance::DEFAULT))
    });
    if agree == Some(false) {
        debug!("methods disagree for {ray:?}: {hits:?}");
    }

    RayReport {
        ray: *ray,
        origin_inside: sphere.contains(ray.origin),
        results: hits
            .into_iter()
            .map(|(method, hit)| MethodReport {
                method,
                hit: hit.map(|h| HitReport::new(h, sphere)),
            })
            .collect(),
        agree,
    }
}

/// Configs for `methods`, all sharing the behind-origin policy of `base`.
pub fn configs_for(base: IntersectConfig, methods: &[Method]) -> Vec<IntersectConfig> {
    methods
        .iter()
        .map(|&method| IntersectConfig { method, ..base })
        .collect()
}
