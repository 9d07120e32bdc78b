//! Scene description loading.
//!
//! Parses the JSON schema the quote pipeline consumes: a `Vertices` map of
//! id → position and an `Edges` map of id → segment/arc descriptor. Vertex
//! ids are resolved to arena indices when building the `Profile`; an edge
//! referencing an unknown vertex becomes a malformed curve, which the core
//! treats as zero-length by contract.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use cutquote::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Scene {
    #[serde(rename = "Vertices", default)]
    vertices: BTreeMap<String, Vertex>,
    #[serde(rename = "Edges", default)]
    edges: BTreeMap<String, EdgeDesc>,
}

#[derive(Debug, Deserialize)]
struct Vertex {
    #[serde(rename = "Position")]
    position: Position,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Position {
    #[serde(rename = "X")]
    x: f64,
    #[serde(rename = "Y")]
    y: f64,
}

#[derive(Debug, Deserialize)]
struct EdgeDesc {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Vertices", default)]
    vertices: Vec<u64>,
    #[serde(rename = "Center")]
    center: Option<Position>,
    /// Vertex id the arc runs clockwise from.
    #[serde(rename = "ClockwiseFrom")]
    clockwise_from: Option<u64>,
}

/// Read and parse a scene file.
pub fn load(path: &Path) -> Result<Scene> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let scene: Scene =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(scene)
}

impl Scene {
    /// Resolve vertex ids and build the profile.
    pub fn into_profile(self) -> Profile {
        let mut profile = Profile::new();
        let mut ids: BTreeMap<u64, PointId> = BTreeMap::new();
        for (key, vertex) in &self.vertices {
            let Ok(id) = key.parse::<u64>() else {
                tracing::warn!(key = key.as_str(), "non-numeric vertex id, skipping");
                continue;
            };
            let pid = profile.push_point(Vec2::new(vertex.position.x, vertex.position.y));
            ids.insert(id, pid);
        }
        // Unknown ids map to an out-of-range index: the core's malformed-curve
        // fallback keeps the rest of the quote defined.
        let resolve = |vid: &u64| ids.get(vid).copied().unwrap_or(usize::MAX);
        for (key, edge) in &self.edges {
            let ends = match edge.vertices.as_slice() {
                [a, b] => [resolve(a), resolve(b)],
                other => {
                    tracing::warn!(
                        edge = key.as_str(),
                        count = other.len(),
                        "edge without exactly two vertices"
                    );
                    [usize::MAX, usize::MAX]
                }
            };
            match edge.kind.as_str() {
                "LineSegment" => profile.push_curve(Curve::Segment(Segment { ends })),
                "CircularArc" => {
                    let Some(center) = edge.center else {
                        tracing::warn!(edge = key.as_str(), "arc without a center, skipping");
                        continue;
                    };
                    let clockwise = match (edge.vertices.first(), edge.clockwise_from) {
                        (Some(first), Some(from)) => *first == from,
                        _ => false,
                    };
                    profile.push_curve(Curve::Arc(Arc {
                        ends,
                        center: Vec2::new(center.x, center.y),
                        clockwise,
                    }));
                }
                other => {
                    tracing::warn!(edge = key.as_str(), kind = other, "unknown edge type, skipping");
                }
            }
        }
        profile
    }
}
