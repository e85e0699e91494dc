//! Replays [`Shape`]s on a 2D canvas context.

use web_sys::CanvasRenderingContext2d;

use crate::scene::Shape;

pub fn paint(ctx: &CanvasRenderingContext2d, width: f64, height: f64, shapes: &[Shape]) {
    ctx.clear_rect(0.0, 0.0, width, height);
    for shape in shapes {
        match shape {
            Shape::Rect { x, y, w, h, fill } => {
                ctx.set_fill_style_str(fill);
                ctx.fill_rect(*x, *y, *w, *h);
            }
            Shape::Polygon { points, fill } => {
                let Some((&(x0, y0), rest)) = points.split_first() else {
                    continue;
                };
                ctx.set_fill_style_str(fill);
                ctx.begin_path();
                ctx.move_to(x0, y0);
                for &(x, y) in rest {
                    ctx.line_to(x, y);
                }
                ctx.close_path();
                ctx.fill();
            }
            Shape::Circle { cx, cy, r, fill, stroke, line_width } => {
                ctx.begin_path();
                ctx.arc(*cx, *cy, *r, 0.0, std::f64::consts::TAU).ok();
                ctx.set_fill_style_str(fill);
                ctx.fill();
                ctx.set_stroke_style_str(stroke);
                ctx.set_line_width(*line_width);
                ctx.stroke();
            }
        }
    }
}
