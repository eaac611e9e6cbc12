use web_sys::CanvasRenderingContext2d;

use crate::constants::{STATION_BORDER_COLOUR, STATION_COLOUR};
use crate::render::scene::{LineStroke, Scene, StationDisc};

/// Paint one scene onto a 2D context.
///
/// The pass always runs in the same order: background wash, then every line
/// stroke, then every station disc, so stations sit on top of the lines that
/// serve them.
pub fn paint(ctx: &CanvasRenderingContext2d, scene: &Scene, width: f64, height: f64) {
    ctx.set_fill_style_str(scene.background);
    ctx.fill_rect(0.0, 0.0, width, height);

    for stroke in &scene.strokes {
        draw_stroke(ctx, stroke);
    }

    for disc in &scene.stations {
        draw_disc(ctx, disc);
    }
}

fn draw_stroke(ctx: &CanvasRenderingContext2d, stroke: &LineStroke) {
    let Some(&(first_x, first_y)) = stroke.points.first() else {
        return;
    };

    ctx.set_line_width(stroke.width);
    ctx.set_stroke_style_str(&stroke.colour);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.begin_path();
    ctx.move_to(first_x, first_y);
    for &(x, y) in &stroke.points[1..] {
        ctx.line_to(x, y);
    }
    ctx.stroke();
}

fn draw_disc(ctx: &CanvasRenderingContext2d, disc: &StationDisc) {
    // Border ring goes down first; the station disc covers its middle
    ctx.set_fill_style_str(STATION_BORDER_COLOUR);
    ctx.begin_path();
    let _ = ctx.arc(disc.x, disc.y, disc.border_radius, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill();

    ctx.set_fill_style_str(STATION_COLOUR);
    ctx.begin_path();
    let _ = ctx.arc(disc.x, disc.y, disc.radius, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill();
}
