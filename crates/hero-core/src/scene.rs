//! Scene description: which named nodes float, how strongly each reacts to
//! the pointer, and which one stays put as the centred logo.
//!
//! Node transforms come from a [`NodeSource`]. The bundled JSON manifest is
//! one such source; anything that can answer "transform for this name" can
//! stand in for it.

use crate::error::{Result, SceneError};
use crate::layout::BoundingBox;
use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;
use serde::Deserialize;

pub const DEFAULT_STATIC_NODE: &str = "Zeratype";
pub const DEFAULT_CYCLE_LEN: u32 = 12;

/// Source transform of a named node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub color: [f32; 3],
}

pub trait NodeSource {
    fn node(&self, name: &str) -> Option<NodeTransform>;
}

impl NodeSource for FnvHashMap<String, NodeTransform> {
    fn node(&self, name: &str) -> Option<NodeTransform> {
        self.get(name).copied()
    }
}

/// Declarative per-object configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ObjectSpec {
    pub name: String,
    pub multiplier: f32,
}

impl ObjectSpec {
    pub fn new(name: &str, multiplier: f32) -> Self {
        Self {
            name: name.to_string(),
            multiplier,
        }
    }
}

/// Floating objects in display order with their pointer multipliers.
pub fn default_roster() -> Vec<ObjectSpec> {
    [
        ("A1000", 2.4),
        ("CeroMiligramos", 1.5),
        ("CriemosLibres", 1.2),
        ("ElSueno", 1.0),
        ("EnTeoria", 1.8),
        ("EspacioSeguro", 1.8),
        ("Meli", 2.0),
        ("PausaActiva", 1.2),
        ("Rufian", 1.6),
        ("Sobremesa", 1.8),
        ("ValenYSofi", 1.5),
    ]
    .into_iter()
    .map(|(name, m)| ObjectSpec::new(name, m))
    .collect()
}

fn default_static_node() -> Option<String> {
    Some(DEFAULT_STATIC_NODE.to_string())
}

fn default_cycle_len() -> u32 {
    DEFAULT_CYCLE_LEN
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn neutral_color() -> [f32; 3] {
    [0.8, 0.8, 0.82]
}

#[derive(Clone, Debug, Deserialize)]
pub struct NodeDesc {
    pub name: String,
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
    #[serde(default = "neutral_color")]
    pub color: [f32; 3],
}

impl NodeDesc {
    pub fn transform(&self) -> NodeTransform {
        NodeTransform {
            position: Vec3::from_array(self.position),
            rotation: Vec3::from_array(self.rotation),
            scale: Vec3::from_array(self.scale),
            color: self.color,
        }
    }
}

/// JSON scene manifest.
#[derive(Clone, Debug, Deserialize)]
pub struct SceneManifest {
    pub nodes: Vec<NodeDesc>,
    #[serde(default = "default_roster")]
    pub roster: Vec<ObjectSpec>,
    #[serde(default = "default_static_node")]
    pub static_node: Option<String>,
    #[serde(default = "default_cycle_len")]
    pub cycle_len: u32,
}

impl SceneManifest {
    pub fn from_json(text: &str) -> Result<Self> {
        let manifest: SceneManifest = serde_json::from_str(text)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<()> {
        if self.roster.is_empty() {
            return Err(SceneError::EmptyRoster);
        }
        if self.cycle_len == 0 {
            return Err(SceneError::EmptyCycle);
        }
        let mut seen = FnvHashSet::default();
        for n in &self.nodes {
            if !seen.insert(n.name.as_str()) {
                return Err(SceneError::DuplicateNode(n.name.clone()));
            }
        }
        let mut listed = FnvHashSet::default();
        for spec in &self.roster {
            if !listed.insert(spec.name.as_str()) {
                return Err(SceneError::DuplicateRosterEntry(spec.name.clone()));
            }
            if !spec.multiplier.is_finite() {
                return Err(SceneError::InvalidMultiplier {
                    name: spec.name.clone(),
                    value: spec.multiplier,
                });
            }
            if self.static_node.as_deref() == Some(spec.name.as_str()) {
                return Err(SceneError::StaticInRoster(spec.name.clone()));
            }
        }
        Ok(())
    }

    pub fn node_index(&self) -> FnvHashMap<String, NodeTransform> {
        self.nodes
            .iter()
            .map(|n| (n.name.clone(), n.transform()))
            .collect()
    }
}

/// A resolved scene object. Never mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub transform: NodeTransform,
    pub multiplier: f32,
}

/// Floating objects, the static logo and the floating objects' bounds.
#[derive(Clone, Debug)]
pub struct SceneObjects {
    pub floating: Vec<SceneObject>,
    pub logo: Option<SceneObject>,
    pub bounds: Option<BoundingBox>,
    pub cycle_len: u32,
}

impl SceneObjects {
    /// Resolve the roster against `source`. Names the source does not know
    /// are dropped.
    pub fn resolve(
        roster: &[ObjectSpec],
        static_node: Option<&str>,
        cycle_len: u32,
        source: &impl NodeSource,
    ) -> Self {
        let floating: Vec<SceneObject> = roster
            .iter()
            .filter(|spec| Some(spec.name.as_str()) != static_node)
            .filter_map(|spec| match source.node(&spec.name) {
                Some(transform) => Some(SceneObject {
                    name: spec.name.clone(),
                    transform,
                    multiplier: spec.multiplier,
                }),
                None => {
                    log::warn!("[scene] node `{}` not found; skipping", spec.name);
                    None
                }
            })
            .collect();
        let logo = static_node.and_then(|name| {
            source.node(name).map(|transform| SceneObject {
                name: name.to_string(),
                transform,
                multiplier: 0.0,
            })
        });
        let bounds = BoundingBox::from_positions(floating.iter().map(|o| o.transform.position));
        Self {
            floating,
            logo,
            bounds,
            cycle_len: cycle_len.max(1),
        }
    }

    pub fn from_manifest(manifest: &SceneManifest) -> Result<Self> {
        manifest.validate()?;
        let index = manifest.node_index();
        Ok(Self::resolve(
            &manifest.roster,
            manifest.static_node.as_deref(),
            manifest.cycle_len,
            &index,
        ))
    }

    /// Total drawable objects, logo included.
    pub fn len(&self) -> usize {
        self.floating.len() + usize::from(self.logo.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
