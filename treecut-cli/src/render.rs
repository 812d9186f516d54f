//! SVG scatter plot of a finished clustering.
//!
//! Points are drawn at their first two coordinates on a black canvas, one
//! colour per cluster. Colours cycle through [`PALETTE`] when there are more
//! clusters than colours. One-dimensional points are drawn on a horizontal
//! line through the middle of the canvas.

use std::io::{self, Write};

use thiserror::Error;
use treecut_core::{Clustering, PointSet};

/// Width and height of the canvas in pixels.
pub const CANVAS_SIZE: f64 = 800.0;

const MARGIN: f64 = 24.0;
const POINT_RADIUS: f64 = 6.0;
const BACKGROUND: &str = "#000000";

/// Cluster colours in drawing order.
pub const PALETTE: [&str; 7] = [
    "#ffffff", "#800000", "#808080", "#006cad", "#2d8b30", "#e27e26", "#8443ac",
];

/// Errors raised while rendering a clustering.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// The clustering and the point set disagree on the number of vertices.
    #[error("clustering covers {clustering} vertices but {points} points were supplied")]
    VertexCountMismatch {
        /// Number of points.
        points: usize,
        /// Vertices in the clustering.
        clustering: usize,
    },
    /// Writing the document failed.
    #[error("failed to write svg: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

/// Returns the colour used for the cluster at `index`.
#[must_use]
pub fn cluster_colour(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Maps data coordinates onto the canvas, preserving the aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Viewport {
    min_x: f64,
    min_y: f64,
    scale: f64,
}

impl Viewport {
    fn fit(points: &PointSet) -> Self {
        if points.is_empty() {
            return Self {
                min_x: 0.0,
                min_y: 0.0,
                scale: 1.0,
            };
        }
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for (x, y) in points.iter().map(plane_position) {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        let span = (max_x - min_x).max(max_y - min_y);
        let drawable = CANVAS_SIZE - 2.0 * MARGIN;
        let scale = if span > 0.0 { drawable / span } else { 1.0 };
        // Centre the shorter axis.
        let slack_x = (drawable / scale - (max_x - min_x)) / 2.0;
        let slack_y = (drawable / scale - (max_y - min_y)) / 2.0;
        Self {
            min_x: min_x - slack_x,
            min_y: min_y - slack_y,
            scale,
        }
    }

    /// Returns canvas coordinates; the y axis points down in SVG.
    fn project(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let cx = MARGIN + (x - self.min_x) * self.scale;
        let cy = CANVAS_SIZE - MARGIN - (y - self.min_y) * self.scale;
        (cx, cy)
    }
}

fn plane_position(row: &[f64]) -> (f64, f64) {
    match row {
        [x, y, ..] => (*x, *y),
        [x] => (*x, 0.0),
        [] => (0.0, 0.0),
    }
}

/// Writes an SVG document plotting `clustering` over `points` to `writer`.
///
/// # Examples
/// ```
/// use treecut_cli::render::render_svg;
/// use treecut_core::{Clustering, PointSet};
///
/// let points = PointSet::new(vec![vec![0.0, 0.0], vec![1.0, 1.0]])?;
/// let clustering = Clustering::try_from_groups(2, vec![vec![0], vec![1]])?;
/// let mut buffer = Vec::new();
/// render_svg(&points, &clustering, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.starts_with("<svg"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
/// Returns [`RenderError::VertexCountMismatch`] when `clustering` does not
/// cover exactly the points, and [`RenderError::Io`] when writing fails.
pub fn render_svg(
    points: &PointSet,
    clustering: &Clustering,
    mut writer: impl Write,
) -> Result<(), RenderError> {
    if points.len() != clustering.vertex_count() {
        return Err(RenderError::VertexCountMismatch {
            points: points.len(),
            clustering: clustering.vertex_count(),
        });
    }

    let viewport = Viewport::fit(points);
    writeln!(
        writer,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS_SIZE}" height="{CANVAS_SIZE}" viewBox="0 0 {CANVAS_SIZE} {CANVAS_SIZE}">"#
    )?;
    writeln!(writer, r#"<rect width="100%" height="100%" fill="{BACKGROUND}"/>"#)?;
    for (index, cluster) in clustering.clusters().iter().enumerate() {
        writeln!(writer, r#"<g fill="{}">"#, cluster_colour(index))?;
        for &vertex in cluster.members() {
            let Some(row) = points.point(vertex) else {
                continue;
            };
            let (cx, cy) = viewport.project(plane_position(row));
            writeln!(
                writer,
                r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{POINT_RADIUS}"/>"#
            )?;
        }
        writeln!(writer, "</g>")?;
    }
    writeln!(writer, "</svg>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn render(points: &PointSet, clustering: &Clustering) -> String {
        let mut buffer = Vec::new();
        render_svg(points, clustering, &mut buffer).expect("rendering succeeds");
        String::from_utf8(buffer).expect("svg is utf-8")
    }

    fn circles(svg: &str) -> Vec<(f64, f64)> {
        svg.lines()
            .filter_map(|line| line.strip_prefix("<circle "))
            .map(|line| {
                let value = |key: &str| -> f64 {
                    let start = line.find(key).expect("attribute present") + key.len();
                    let rest = &line[start..];
                    let end = rest.find('"').expect("attribute terminated");
                    rest[..end].parse().expect("numeric attribute")
                };
                (value("cx=\""), value("cy=\""))
            })
            .collect()
    }

    #[rstest]
    #[case(0, "#ffffff")]
    #[case(6, "#8443ac")]
    #[case(7, "#ffffff")]
    #[case(9, "#808080")]
    fn palette_cycles(#[case] index: usize, #[case] expected: &str) {
        assert_eq!(cluster_colour(index), expected);
    }

    #[test]
    fn draws_one_group_per_cluster_on_black() {
        let points = PointSet::new(vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![5.0, 5.0],
        ])
        .expect("valid points");
        let clustering =
            Clustering::try_from_groups(3, vec![vec![0, 1], vec![2]]).expect("valid partition");
        let svg = render(&points, &clustering);

        assert!(svg.contains(r##"fill="#000000""##));
        assert!(svg.contains(r##"<g fill="#ffffff">"##));
        assert!(svg.contains(r##"<g fill="#800000">"##));
        assert_eq!(circles(&svg).len(), 3);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn fits_points_inside_the_canvas() {
        let points = PointSet::new(vec![
            vec![-100.0, 3.0],
            vec![250.0, -40.0],
            vec![10.0, 900.0],
        ])
        .expect("valid points");
        let clustering =
            Clustering::try_from_groups(3, vec![vec![0, 1, 2]]).expect("valid partition");
        for (cx, cy) in circles(&render(&points, &clustering)) {
            assert!((MARGIN - 1e-9..=CANVAS_SIZE - MARGIN + 1e-9).contains(&cx));
            assert!((MARGIN - 1e-9..=CANVAS_SIZE - MARGIN + 1e-9).contains(&cy));
        }
    }

    #[test]
    fn larger_y_is_drawn_higher() {
        let points = PointSet::new(vec![vec![0.0, 0.0], vec![0.0, 1.0]]).expect("valid points");
        let clustering =
            Clustering::try_from_groups(2, vec![vec![0, 1]]).expect("valid partition");
        let positions = circles(&render(&points, &clustering));
        assert!(positions[1].1 < positions[0].1);
    }

    #[test]
    fn coincident_points_render_without_scaling() {
        let points = PointSet::new(vec![vec![2.0], vec![2.0]]).expect("valid points");
        let clustering =
            Clustering::try_from_groups(2, vec![vec![0], vec![1]]).expect("valid partition");
        let positions = circles(&render(&points, &clustering));
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0], positions[1]);
    }

    #[test]
    fn rejects_mismatched_clustering() {
        let points = PointSet::new(vec![vec![0.0, 0.0]]).expect("valid points");
        let clustering =
            Clustering::try_from_groups(2, vec![vec![0, 1]]).expect("valid partition");
        let err = render_svg(&points, &clustering, Vec::new()).expect_err("counts differ");
        assert!(matches!(
            err,
            RenderError::VertexCountMismatch {
                points: 1,
                clustering: 2
            }
        ));
    }
}
