//! TopoJSON decoding: shared arcs, per-feature polygons, and the interior mesh.
//!
//! Geometries reference arcs by index; a negative index `i` means arc `!i`
//! traversed backwards. Quantized topologies store arc points as deltas that
//! are dequantized through `transform`.

use crate::error::LoadError;
use log::warn;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

pub type Position = [f64; 2];
pub type Ring = Vec<Position>;
pub type Polygon = Vec<Ring>;

#[derive(Deserialize)]
struct TopologyDoc {
    #[serde(default)]
    transform: Option<Transform>,
    #[serde(default)]
    arcs: Vec<Vec<Vec<f64>>>,
    #[serde(default)]
    objects: HashMap<String, GeometryObject>,
}

#[derive(Clone, Copy, Deserialize)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

#[derive(Deserialize)]
struct GeometryObject {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    arcs: Option<Value>,
    #[serde(default)]
    geometries: Vec<GeometryObject>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<Properties>,
}

#[derive(Deserialize, Default)]
struct Properties {
    #[serde(default)]
    name: Option<String>,
}

/// One drawable region of the topology.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
    pub id: Option<String>,
    pub name: Option<String>,
    pub polygons: Vec<Polygon>,
    /// Arc indices (unsigned) this feature references, in reference order.
    arcs: Vec<usize>,
}

impl GeoFeature {
    pub fn arc_refs(&self) -> &[usize] {
        &self.arcs
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Topology {
    arcs: Vec<Vec<Position>>,
    features: Vec<GeoFeature>,
}

impl Topology {
    pub fn from_json_str(text: &str, object: &str) -> Result<Self, LoadError> {
        let doc: TopologyDoc = serde_json::from_str(text)?;
        Self::from_doc(doc, object)
    }

    pub fn from_json_value(v: Value, object: &str) -> Result<Self, LoadError> {
        let doc: TopologyDoc = serde_json::from_value(v)?;
        Self::from_doc(doc, object)
    }

    fn from_doc(mut doc: TopologyDoc, object: &str) -> Result<Self, LoadError> {
        let arcs = decode_arcs(&doc.arcs, doc.transform);
        let root = doc
            .objects
            .remove(object)
            .ok_or_else(|| LoadError::MissingObject(object.to_string()))?;
        let mut features = Vec::new();
        collect_features(&root, &arcs, &mut features)?;
        Ok(Topology { arcs, features })
    }

    pub fn features(&self) -> &[GeoFeature] {
        &self.features
    }

    pub fn arcs(&self) -> &[Vec<Position>] {
        &self.arcs
    }

    /// Arcs shared by two different features: the internal borders.
    ///
    /// An arc is kept when the first and last feature referencing it differ.
    /// Arcs are returned individually rather than stitched into longer lines.
    pub fn interior_mesh(&self) -> Vec<&[Position]> {
        self.mesh_arcs(|a, b| a != b)
            .into_iter()
            .map(|i| self.arcs[i].as_slice())
            .collect()
    }

    /// Indices of arcs whose first and last referencing features pass `keep`.
    pub fn mesh_arcs(&self, keep: impl Fn(usize, usize) -> bool) -> Vec<usize> {
        let mut by_arc: Vec<Vec<usize>> = vec![Vec::new(); self.arcs.len()];
        for (fi, f) in self.features.iter().enumerate() {
            for &a in &f.arcs {
                if let Some(refs) = by_arc.get_mut(a) {
                    refs.push(fi);
                }
            }
        }
        by_arc
            .iter()
            .enumerate()
            .filter_map(|(i, refs)| match (refs.first(), refs.last()) {
                (Some(&a), Some(&b)) if keep(a, b) => Some(i),
                _ => None,
            })
            .collect()
    }
}

fn decode_arcs(raw: &[Vec<Vec<f64>>], transform: Option<Transform>) -> Vec<Vec<Position>> {
    raw.iter()
        .map(|arc| {
            let (mut x, mut y) = (0.0f64, 0.0f64);
            arc.iter()
                .filter(|p| p.len() >= 2)
                .map(|p| match transform {
                    Some(t) => {
                        x += p[0];
                        y += p[1];
                        [x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1]]
                    }
                    None => [p[0], p[1]],
                })
                .collect()
        })
        .collect()
}

fn collect_features(
    obj: &GeometryObject,
    arcs: &[Vec<Position>],
    out: &mut Vec<GeoFeature>,
) -> Result<(), LoadError> {
    if obj.kind.as_deref() == Some("GeometryCollection") {
        for g in &obj.geometries {
            collect_features(g, arcs, out)?;
        }
        return Ok(());
    }
    let mut refs = Vec::new();
    let polygons = match (obj.kind.as_deref(), &obj.arcs) {
        (Some("Polygon"), Some(v)) => {
            let rings: Vec<Vec<i64>> = serde_json::from_value(v.clone())?;
            vec![polygon(&rings, arcs, &mut refs)]
        }
        (Some("MultiPolygon"), Some(v)) => {
            let polys: Vec<Vec<Vec<i64>>> = serde_json::from_value(v.clone())?;
            polys.iter().map(|p| polygon(p, arcs, &mut refs)).collect()
        }
        (None, _) => Vec::new(),
        (Some(kind), _) => {
            warn!("skipping geometry of type {} in topology", kind);
            Vec::new()
        }
    };
    out.push(GeoFeature {
        id: obj.id.as_ref().map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }),
        name: obj.properties.as_ref().and_then(|p| p.name.clone()),
        polygons,
        arcs: refs,
    });
    Ok(())
}

fn polygon(rings: &[Vec<i64>], arcs: &[Vec<Position>], refs: &mut Vec<usize>) -> Polygon {
    rings.iter().map(|r| ring(r, arcs, refs)).collect()
}

fn ring(indices: &[i64], arcs: &[Vec<Position>], refs: &mut Vec<usize>) -> Ring {
    let mut points: Ring = Vec::new();
    for &i in indices {
        let (idx, reversed) = if i < 0 { ((!i) as usize, true) } else { (i as usize, false) };
        let Some(arc) = arcs.get(idx) else {
            warn!("arc index {} out of range", i);
            continue;
        };
        refs.push(idx);
        // consecutive arcs share their joining point
        points.pop();
        if reversed {
            points.extend(arc.iter().rev().copied());
        } else {
            points.extend(arc.iter().copied());
        }
    }
    if !points.is_empty() && points.len() < 4 {
        points.push(points[0]);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reversed_arc_walks_backwards() {
        let arcs = vec![
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
            vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
        ];
        let mut refs = Vec::new();
        let r = ring(&[0, !1], &arcs, &mut refs);
        assert_eq!(r, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]);
        assert_eq!(refs, vec![0, 1]);
    }

    #[test]
    fn quantized_arcs_are_delta_decoded() {
        let doc = json!({
            "type": "Topology",
            "transform": {"scale": [0.5, 2.0], "translate": [10.0, -5.0]},
            "arcs": [[[0, 0], [2, 0], [0, 3]]],
            "objects": {"countries": {"type": "GeometryCollection", "geometries": []}}
        });
        let topo = Topology::from_json_value(doc, "countries").unwrap();
        assert_eq!(topo.arcs()[0], vec![[10.0, -5.0], [11.0, -5.0], [11.0, 1.0]]);
    }
}
