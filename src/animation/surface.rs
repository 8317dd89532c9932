//! Animation domain: the narrow interface the animator uses to reach the host's
//! mesh, material and texture.

use std::fmt;

use bevy::math::Vec2;

/// Texture axis for wrap configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapAxis {
    /// Horizontal (S / U).
    U,
    /// Vertical (T / V).
    V,
}

/// Sampling behavior outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WrapMode {
    #[default]
    ClampToEdge,
    Repeat,
    MirrorRepeat,
}

/// Which link of the mesh -> material -> texture chain is not ready yet.
///
/// Every variant is transient from the animator's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unavailable {
    NoMesh,
    NoMaterial,
    NoTextureMap,
    ImageLoading,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Unavailable::NoMesh => "surface has no mesh",
            Unavailable::NoMaterial => "mesh has no material",
            Unavailable::NoTextureMap => "material has no texture map",
            Unavailable::ImageLoading => "texture image is still loading",
        };
        f.write_str(reason)
    }
}

/// A live texture the animator can configure. Owned by the host.
pub trait SheetTexture {
    type Id: Copy + PartialEq + fmt::Debug;

    fn id(&self) -> Self::Id;
    fn is_image_loaded(&self) -> bool;
    fn set_wrap_mode(&mut self, axis: WrapAxis, mode: WrapMode);
    fn set_repeat(&mut self, repeat: Vec2);
    fn set_offset(&mut self, offset: Vec2);
    fn mark_material_dirty(&mut self);
}

impl<T: SheetTexture + ?Sized> SheetTexture for &mut T {
    type Id = T::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }

    fn is_image_loaded(&self) -> bool {
        (**self).is_image_loaded()
    }

    fn set_wrap_mode(&mut self, axis: WrapAxis, mode: WrapMode) {
        (**self).set_wrap_mode(axis, mode);
    }

    fn set_repeat(&mut self, repeat: Vec2) {
        (**self).set_repeat(repeat);
    }

    fn set_offset(&mut self, offset: Vec2) {
        (**self).set_offset(offset);
    }

    fn mark_material_dirty(&mut self) {
        (**self).mark_material_dirty();
    }
}

/// The renderable surface of one animated entity.
///
/// `texture` is called at most a few times per tick and must be cheap. It
/// returns a short-lived view; the animator only keeps the `Id` between ticks.
pub trait SheetSurface {
    type TextureId: Copy + PartialEq + fmt::Debug;
    type Texture<'a>: SheetTexture<Id = Self::TextureId>
    where
        Self: 'a;

    fn texture(&mut self) -> Result<Self::Texture<'_>, Unavailable>;
}
