//! Renders an art gallery floor plan: triangulation, vertex coloring, and
//! one guard's visibility region.
//!
//! Run with: cargo run --example floor_plan

use fisk::{tricolor, triangulate, visibility_polygon, Point2, Polygon, Vec2};

use std::fs::File;
use std::io::Write;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 420.0;

/// SVG helper to create an SVG document
struct Svg {
    content: String,
    width: f64,
    height: f64,
}

impl Svg {
    fn new(width: f64, height: f64) -> Self {
        Self {
            content: String::new(),
            width,
            height,
        }
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            cx, cy, r, fill, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            x1, y1, x2, y2, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn polygon(&mut self, points: &[Point2<f64>], fill: &str, stroke: &str, stroke_width: f64) {
        let pts: String = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.content.push_str(&format!(
            r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            pts, fill, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn text(&mut self, x: f64, y: f64, text: &str, font_size: f64, fill: &str) {
        self.content.push_str(&format!(
            r#"<text x="{}" y="{}" font-family="system-ui, sans-serif" font-size="{}" fill="{}">{}</text>"#,
            x, y, font_size, fill, text
        ));
        self.content.push('\n');
    }

    fn save(&self, path: &str) {
        let svg = format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">
<rect width="100%" height="100%" fill="#1a1a2e"/>
{}
</svg>"##,
            self.width, self.height, self.width, self.height, self.content
        );
        let mut file = File::create(path).unwrap();
        file.write_all(svg.as_bytes()).unwrap();
    }
}

/// Irregular 27-vertex gallery floor plan.
fn gallery() -> Polygon<f64> {
    Polygon::from_coords(&[
        (-2.36667, -0.31515),
        (-2.31818, 0.8303),
        (-1.19091, 0.8303),
        (-2.18485, 1.60606),
        (0.09394, 1.55152),
        (0.5, 0.94545),
        (-0.0697, 0.46061),
        (2.05152, 0.44242),
        (2.19697, -2.33939),
        (-0.19697, -2.35152),
        (-0.11818, 0.09091),
        (-0.71818, 0.60606),
        (-0.70606, -0.58182),
        (-1.31818, -0.5697),
        (-1.3303, -1.0303),
        (-0.40909, -0.70909),
        (-1.25758, -2.15152),
        (-1.7, -2.15152),
        (-1.69394, -1.00606),
        (-4.16061, -0.98788),
        (-4.12424, 0.27273),
        (-3.22727, 0.53939),
        (-3.20303, 0.92121),
        (-4.11212, 1.42424),
        (-4.10606, 2.21212),
        (-2.63939, 2.19394),
        (-2.7, -0.29697),
    ])
}

fn to_screen(p: Point2<f64>) -> Point2<f64> {
    Point2::new(
        (p.x + 4.4) * 68.0 + 30.0,
        HEIGHT - ((p.y + 2.6) * 68.0 + 30.0),
    )
}

fn main() {
    let gallery = gallery();
    let tri = triangulate(&gallery).expect("floor plan is a simple polygon");
    let coloring = tricolor(&tri.indices, gallery.len());
    let (smallest, guards) = coloring.smallest();

    // Post one guard just inside a corner, as a sample of what it sees.
    let post = gallery.vertices[19] + Vec2::new(0.01, 0.01);
    let view = visibility_polygon(&gallery, post).expect("guard post is inside");

    let mut svg = Svg::new(WIDTH, HEIGHT);

    svg.text(250.0, 30.0, "Art Gallery: guards for 27 walls", 16.0, "#e0e0e0");

    // Visibility region of the posted guard
    let view_screen: Vec<Point2<f64>> = view.vertices.iter().map(|&p| to_screen(p)).collect();
    svg.polygon(&view_screen, "#00d4ff20", "#00d4ff", 1.0);

    // Triangulation wireframe
    for &(a, b, c) in &tri.indices {
        let sa = to_screen(gallery.vertices[a]);
        let sb = to_screen(gallery.vertices[b]);
        let sc = to_screen(gallery.vertices[c]);
        svg.line(sa.x, sa.y, sb.x, sb.y, "#4a4a6a", 1.0);
        svg.line(sb.x, sb.y, sc.x, sc.y, "#4a4a6a", 1.0);
        svg.line(sc.x, sc.y, sa.x, sa.y, "#4a4a6a", 1.0);
    }

    // Gallery outline
    let outline: Vec<Point2<f64>> = gallery.vertices.iter().map(|&p| to_screen(p)).collect();
    svg.polygon(&outline, "none", "#e0e0e0", 2.0);

    // Vertices, colored by class; the smallest class gets a ring.
    let class_colors = ["#00d4ff", "#ffd93d", "#ff6b6b"];
    for (i, &v) in gallery.vertices.iter().enumerate() {
        let s = to_screen(v);
        let class = coloring.class_of(i).expect("every vertex is colored");

        if class == smallest {
            svg.circle(s.x, s.y, 6.0, class_colors[class], "#ffffff", 2.0);
        } else {
            svg.circle(s.x, s.y, 4.0, class_colors[class], "none", 0.0);
        }
    }

    // The posted guard
    let post_screen = to_screen(post);
    svg.circle(post_screen.x, post_screen.y, 3.0, "#ffffff", "none", 0.0);

    svg.text(
        30.0,
        405.0,
        &format!(
            "{} triangles, {} guards in class {} (ringed), cyan region = view from the white post",
            tri.len(),
            guards.len(),
            smallest
        ),
        12.0,
        "#808080",
    );

    svg.save("floor_plan.svg");
    println!("Generated floor_plan.svg");
}
