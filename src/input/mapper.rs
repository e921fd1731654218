use crate::foundation::core::{Canvas, DisplayRect, Point};

/// Map a client-space pointer position into backing-store pixel coordinates.
///
/// The horizontal and vertical scale factors are independent (`W / displayed_width`,
/// `H / displayed_height`) and are derived from `rect` on every call, so a responsive layout that
/// resizes the surface between events is handled without any cached state. Positions outside the
/// surface are passed through unclamped.
pub fn map_to_backing(client: Point, rect: DisplayRect, backing: Canvas) -> Point {
    let scale_x = axis_scale(backing.width, rect.width);
    let scale_y = axis_scale(backing.height, rect.height);
    Point::new(
        (client.x - rect.left) * scale_x,
        (client.y - rect.top) * scale_y,
    )
}

// A collapsed or non-finite display extent has no meaningful ratio; treat it as 1:1.
fn axis_scale(backing_px: u32, displayed: f64) -> f64 {
    if displayed.is_finite() && displayed > 0.0 {
        f64::from(backing_px) / displayed
    } else {
        1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/mapper.rs"]
mod tests;
