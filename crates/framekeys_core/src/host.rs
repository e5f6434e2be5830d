use glam::DVec2;

/// Bounding box of the host surface, in the same client coordinate space
/// the platform reports pointer positions in.
///
/// Pointer mapping only uses `left`/`top`. `width`/`height` describe the
/// extent so callers can tell whether a local position lies on the host
/// (see [`HostRect::contains_local`]); positions are never clamped to it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HostRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl HostRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    /// Converts a client-space position into host-local coordinates.
    /// Positions outside the box are not clamped.
    pub fn to_local(&self, client: DVec2) -> DVec2 {
        client - self.origin()
    }

    /// True if a host-local position lies within the box.
    pub fn contains_local(&self, local: DVec2) -> bool {
        (0.0..self.width).contains(&local.x) && (0.0..self.height).contains(&local.y)
    }
}

/// Provides the reference frame pointer positions are measured against.
///
/// Queried on every pointer move, so implementations should report the
/// host's bounds as of now rather than caching them at construction.
pub trait HostElement {
    fn bounding_rect(&self) -> HostRect;
}

impl HostElement for HostRect {
    fn bounding_rect(&self) -> HostRect {
        *self
    }
}
