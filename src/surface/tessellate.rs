//! Triangulation of arbitrary closed outlines for the egui backend.
//!
//! egui only fills convex polygons natively, so freehand outlines are turned
//! into a triangle mesh first.

use egui::{Color32, Mesh, Pos2};
use log::warn;
use lyon::lyon_tessellation::{BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, VertexBuffers};
use lyon::math::point;
use lyon::path::Path;

/// Triangulate the closed outline through `points` into a mesh of `color`.
///
/// Self-intersecting outlines fill with the non-zero rule. Returns `None` for
/// outlines with fewer than three points or when tessellation fails.
pub(crate) fn fill_mesh(points: &[Pos2], color: Color32) -> Option<Mesh> {
    let (first, rest) = points.split_first()?;
    if rest.len() < 2 {
        return None;
    }

    let mut builder = Path::builder();
    builder.begin(point(first.x, first.y));
    for next in rest {
        builder.line_to(point(next.x, next.y));
    }
    builder.end(true);
    let path = builder.build();

    let mut geometry: VertexBuffers<Pos2, u32> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();
    let options = FillOptions::default().with_fill_rule(FillRule::NonZero);

    let result = tessellator.tessellate_path(
        &path,
        &options,
        &mut BuffersBuilder::new(&mut geometry, |vertex: FillVertex| {
            let position = vertex.position();
            Pos2::new(position.x, position.y)
        }),
    );
    if let Err(err) = result {
        warn!("Path fill tessellation failed: {err:?}");
        return None;
    }

    let mut mesh = Mesh::default();
    for position in geometry.vertices {
        mesh.colored_vertex(position, color);
    }
    mesh.indices = geometry.indices;
    Some(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn triangles(mesh: &Mesh) -> Vec<[Pos2; 3]> {
        let pos = |index: u32| mesh.vertices[index as usize].pos;
        mesh.indices
            .chunks_exact(3)
            .map(|tri| [pos(tri[0]), pos(tri[1]), pos(tri[2])])
            .collect()
    }

    fn area([a, b, c]: [Pos2; 3]) -> f32 {
        ((b - a).x * (c - a).y - (b - a).y * (c - a).x).abs() / 2.0
    }

    fn covers([a, b, c]: [Pos2; 3], p: Pos2) -> bool {
        let side = |u: Pos2, v: Pos2| (v - u).x * (p - u).y - (v - u).y * (p - u).x;
        let (d1, d2, d3) = (side(a, b), side(b, c), side(c, a));
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    #[test]
    fn test_concave_outline_stays_inside() {
        // Notched square: the notch around (5, 6) is outside the outline
        let outline = [
            pos2(0.0, 0.0),
            pos2(10.0, 0.0),
            pos2(10.0, 10.0),
            pos2(5.0, 2.0),
            pos2(0.0, 10.0),
        ];
        let mesh = fill_mesh(&outline, Color32::RED).unwrap();
        let tris = triangles(&mesh);

        let total: f32 = tris.iter().copied().map(area).sum();
        assert!((total - 60.0).abs() < 1e-3, "filled area {total}");
        assert!(!tris.iter().any(|&tri| covers(tri, pos2(5.0, 6.0))));
        assert!(tris.iter().any(|&tri| covers(tri, pos2(2.0, 1.0))));
        assert!(mesh.vertices.iter().all(|vertex| vertex.color == Color32::RED));
    }

    #[test]
    fn test_degenerate_outline_has_no_mesh() {
        assert!(fill_mesh(&[], Color32::RED).is_none());
        assert!(fill_mesh(&[pos2(0.0, 0.0), pos2(1.0, 1.0)], Color32::RED).is_none());
    }
}
