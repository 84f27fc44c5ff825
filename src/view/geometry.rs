/// Axis-aligned rectangle in logical pixels, y growing downwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

/// Fraction of `block` that lies inside `viewport`, in `[0, 1]`.
///
/// A zero-area block counts as fully visible once its position touches the
/// viewport, so empty blocks still get revealed.
pub fn intersection_ratio(block: Rect, viewport: Rect) -> f32 {
    let left = block.left().max(viewport.left());
    let right = block.right().min(viewport.right());
    let top = block.top().max(viewport.top());
    let bottom = block.bottom().min(viewport.bottom());

    if right < left || bottom < top {
        return 0.0;
    }

    let block_area = block.area();
    if block_area == 0.0 {
        return 1.0;
    }

    ((right - left) * (bottom - top) / block_area).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect { x: 0.0, y: 0.0, width: 800.0, height: 600.0 };

    #[test]
    fn test_fully_inside() {
        let block = Rect::new(100.0, 100.0, 200.0, 100.0);
        assert_eq!(intersection_ratio(block, VIEWPORT), 1.0);
    }

    #[test]
    fn test_below_viewport() {
        let block = Rect::new(0.0, 700.0, 800.0, 200.0);
        assert_eq!(intersection_ratio(block, VIEWPORT), 0.0);
    }

    #[test]
    fn test_partially_visible() {
        // 20px of a 200px tall block peeks in at the bottom
        let block = Rect::new(0.0, 580.0, 800.0, 200.0);
        let ratio = intersection_ratio(block, VIEWPORT);
        assert!((ratio - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_zero_area_block_on_edge() {
        let block = Rect::new(10.0, 600.0, 100.0, 0.0);
        assert_eq!(intersection_ratio(block, VIEWPORT), 1.0);
    }
}
