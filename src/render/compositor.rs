use image::{DynamicImage, RgbaImage};
use vello_cpu::kurbo::{Cap, Circle, Join, Shape as _};

use crate::foundation::core::{Canvas, Point, Rgba8Premul};
use crate::foundation::error::{MaskError, MaskResult};
use crate::foundation::math::{Fnv1a64, unpremultiply_rgba8_in_place};
use crate::history::stroke::{SamplePoint, Segment, Stroke};
use crate::history::timeline::Timeline;
use crate::render::composite::over_in_place;
use crate::render::source::prepare_base_layer;

/// Highlight colour of every mask stroke: red at 50% opacity (straight alpha).
pub const HIGHLIGHT_RGBA: [u8; 4] = [255, 0, 0, 128];

// Flattening tolerance for round dabs.
const DAB_TOLERANCE: f64 = 0.1;

/// Owns the visible backing buffer and is the only thing that writes to it.
///
/// Every full redraw starts from the scaled source image and replays the given strokes from
/// scratch, so the output depends only on `(source, strokes)`.
///
/// A stroke with a single sample (a click without movement) is drawn as a filled round dab of
/// the brush diameter. A plain move-to plus stroke would paint nothing there.
pub struct Compositor {
    canvas: Canvas,
    base: Vec<u8>,
    buffer: Vec<u8>,
    ctx: vello_cpu::RenderContext,
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor")
            .field("canvas", &self.canvas)
            .field("digest", &format_args!("{:016x}", self.digest()))
            .finish_non_exhaustive()
    }
}

impl Compositor {
    /// Prepare the base layer from `source` and show it with no strokes.
    pub fn new(source: &DynamicImage, canvas: Canvas) -> MaskResult<Self> {
        let canvas = Canvas::new(canvas.width, canvas.height)?;
        let (w, h) = surface_dims(canvas)?;
        let base = prepare_base_layer(source, canvas)?;
        let buffer = base.clone();
        Ok(Self {
            canvas,
            base,
            buffer,
            ctx: vello_cpu::RenderContext::new(w, h),
        })
    }

    /// Backing-store resolution.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    /// Current buffer, premultiplied RGBA8, row-major.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Scaled source image without any strokes, premultiplied RGBA8.
    pub fn base(&self) -> &[u8] {
        &self.base
    }

    /// FNV-1a digest of the buffer and its dimensions.
    pub fn digest(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.canvas.width);
        h.write_u32(self.canvas.height);
        h.write_bytes(&self.buffer);
        h.finish()
    }

    /// Re-render the buffer: base image, then `strokes` in order.
    #[tracing::instrument(skip(self, strokes), fields(strokes = strokes.len()))]
    pub fn redraw(&mut self, strokes: &[Stroke]) -> MaskResult<()> {
        self.buffer.copy_from_slice(&self.base);
        if strokes.is_empty() {
            return Ok(());
        }

        self.ctx.reset();
        for stroke in strokes {
            draw_stroke(&mut self.ctx, stroke.points(), stroke.width().px());
        }
        self.composite_ctx()
    }

    /// Re-render with every stroke of `timeline` up to and including `upto`.
    pub fn redraw_upto(&mut self, timeline: &Timeline, upto: Option<usize>) -> MaskResult<()> {
        self.redraw(timeline.upto(upto))
    }

    /// Draw one in-progress piece on top of the current buffer.
    ///
    /// This is display feedback only; the next full redraw replaces it.
    pub fn draw_segment(&mut self, segment: &Segment) -> MaskResult<()> {
        self.ctx.reset();
        set_highlight(&mut self.ctx, segment.width.px());
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(segment.from));
        path.line_to(point_to_cpu(segment.to));
        self.ctx.stroke_path(&path);
        self.composite_ctx()
    }

    /// Straight-alpha copy of the buffer.
    pub fn to_rgba_image(&self) -> MaskResult<RgbaImage> {
        let mut straight = self.buffer.clone();
        unpremultiply_rgba8_in_place(&mut straight);
        RgbaImage::from_raw(self.canvas.width, self.canvas.height, straight)
            .ok_or_else(|| MaskError::encode("buffer length does not match canvas"))
    }

    /// Premultiplied value of the pixel at `(x, y)`, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let i = ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4;
        let px = &self.buffer[i..i + 4];
        Some(Rgba8Premul {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    fn composite_ctx(&mut self) -> MaskResult<()> {
        let (w, h) = surface_dims(self.canvas)?;
        let mut layer = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut layer);
        over_in_place(&mut self.buffer, layer.data_as_u8_slice())
    }
}

fn surface_dims(canvas: Canvas) -> MaskResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| MaskError::validation("canvas width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| MaskError::validation("canvas height exceeds u16"))?;
    Ok((w, h))
}

fn set_highlight(ctx: &mut vello_cpu::RenderContext, width: f64) {
    let [r, g, b, a] = HIGHLIGHT_RGBA;
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    ctx.set_stroke(
        vello_cpu::kurbo::Stroke::new(width)
            .with_join(Join::Round)
            .with_caps(Cap::Round),
    );
}

fn draw_stroke(ctx: &mut vello_cpu::RenderContext, points: &[SamplePoint], width: f64) {
    set_highlight(ctx, width);
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    // A click without movement has no segment to stroke; show it as a round dab.
    if rest.is_empty() {
        let dab = Circle::new(point_to_cpu(first.position()), width / 2.0).to_path(DAB_TOLERANCE);
        ctx.fill_path(&dab);
        return;
    }

    let mut path = vello_cpu::kurbo::BezPath::new();
    path.move_to(point_to_cpu(first.position()));
    for p in rest {
        path.line_to(point_to_cpu(p.position()));
    }
    ctx.stroke_path(&path);
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
