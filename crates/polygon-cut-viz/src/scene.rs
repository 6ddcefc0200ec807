//! Scene description loaded at startup.

use std::path::Path;

use anyhow::{Context, Result};
use nalgebra::Point2;
use polygon_cut::{Polygon, PolygonError, INTERSECTION_EPSILON};
use serde::Deserialize;

/// The polygon to cut and the tolerance used for cutting.
///
/// Read from JSON:
///
/// ```json
/// { "polygon": [[100, 100], [200, 50], [300, 50]], "epsilon": 1e-5 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scene {
    /// Vertices in screen coordinates, as `[x, y]` pairs.
    pub polygon: Vec<[f32; 2]>,
    #[serde(default = "default_epsilon")]
    pub epsilon: f32,
}

fn default_epsilon() -> f32 {
    INTERSECTION_EPSILON
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            polygon: vec![
                [100.0, 100.0],
                [200.0, 50.0],
                [300.0, 50.0],
                [400.0, 200.0],
                [350.0, 250.0],
                [200.0, 300.0],
                [150.0, 300.0],
            ],
            epsilon: default_epsilon(),
        }
    }
}

impl Scene {
    /// Reads a scene from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing scene file {}", path.display()))
    }

    /// Parses a scene from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(text)?;
        anyhow::ensure!(
            scene.epsilon.is_finite() && scene.epsilon >= 0.0,
            "epsilon must be a non-negative number, got {}",
            scene.epsilon
        );
        Ok(scene)
    }

    /// Builds the polygon described by this scene.
    pub fn polygon(&self) -> Result<Polygon, PolygonError> {
        Polygon::new(
            self.polygon
                .iter()
                .map(|[x, y]| Point2::new(*x, *y))
                .collect(),
        )
    }
}
