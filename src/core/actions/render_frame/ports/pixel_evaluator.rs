use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Colours one pixel. Implementations must not depend on evaluation order.
pub trait PixelEvaluator: Sync {
    fn colour_at(&self, pixel: Point) -> Colour;
}
