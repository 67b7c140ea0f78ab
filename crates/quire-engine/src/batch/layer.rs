/// Paint-order bucket. Higher layers paint over lower ones.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ZLayer(pub u8);

impl ZLayer {
    pub const BASE: ZLayer = ZLayer(0);

    #[inline]
    pub const fn new(v: u8) -> Self {
        Self(v)
    }

    /// The layer directly above this one (saturates at the top layer).
    #[inline]
    pub const fn above(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Offsets this layer by a container's base layer.
    #[inline]
    pub const fn on(self, base: ZLayer) -> Self {
        Self(self.0.saturating_add(base.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn above_saturates() {
        assert_eq!(ZLayer(3).above(), ZLayer(4));
        assert_eq!(ZLayer(u8::MAX).above(), ZLayer(u8::MAX));
    }

    #[test]
    fn on_adds_base() {
        assert_eq!(ZLayer(2).on(ZLayer(10)), ZLayer(12));
    }
}
