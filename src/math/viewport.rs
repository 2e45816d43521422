/// Integer-space rectangle used both as a render-target region and as a clip
/// source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// The maximal representable viewport; clipping against it is a no-op.
    pub const MAX: Viewport = Viewport {
        x: 0,
        y: 0,
        width: u32::MAX,
        height: u32::MAX,
    };

    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::MAX
    }
}
