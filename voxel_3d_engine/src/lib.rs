/*!
# Voxel 3D Engine

World rendering core for the Voxel3D engine.

A world is a collection of entities, each owning at most one of three
capabilities: a transform (spatial), a graphics component (visual) and a
camera (viewpoint). Every frame the `WorldRenderer` runs a fixed pipeline
over the active scene:

1. **Transform update**: view-space matrices recomputed from the active camera
2. **Visibility culling**: bounding sphere vs. camera sphere, then vs. camera cone
3. **Draw**: visible entities submitted through a `CommandList`

Two debug passes (bounding boxes, bounding spheres) reuse the visibility
flags of the last cull and are invoked separately by an overlay.

## Architecture

- **Renderer**: Factory trait for shader programs and vertex arrays
- **CommandList**: Recording trait for program/uniform/draw commands
- **Entity**: Composition root with optional capabilities
- **Scene / World**: Entity storage and the active camera
- **Updater / Culler / Drawer**: Per-frame stage strategies
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod bounds;
pub mod renderer;
pub mod entity;
pub mod scene;

// Main voxel3d namespace module
pub mod voxel3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine (logger host)
    pub use crate::engine::Engine;

    // Renderer factory trait
    pub use crate::renderer::Renderer;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Bounding volume sub-module
    pub mod bounds {
        pub use crate::bounds::*;
    }

    // Render sub-module with all rendering types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Entity sub-module
    pub mod entity {
        pub use crate::entity::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
