/// Capability mask of an entity.

use bitflags::bitflags;

bitflags! {
    /// Which optional components an entity owns
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Spatial capability (`TransformComponent`)
        const TRANSFORM = 1 << 0;
        /// Visual capability (`GraphicsComponent`)
        const GRAPHICS  = 1 << 1;
        /// Viewpoint capability (`CameraComponent`)
        const CAMERA    = 1 << 2;

        /// What culling and drawing need
        const RENDERABLE = Self::TRANSFORM.bits() | Self::GRAPHICS.bits();
    }
}
