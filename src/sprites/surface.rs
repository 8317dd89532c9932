//! Sprites domain: `SheetSurface` over Bevy's mesh, material and image assets.
//!
//! The animator computes offsets with a bottom-left UV origin. Bevy samples
//! with a top-left origin, so the offset's Y is flipped into
//! `StandardMaterial::uv_transform` here.

use bevy::image::ImageAddressMode;
use bevy::math::{Affine2, Mat2};
use bevy::prelude::*;

use crate::animation::{SheetSurface, SheetTexture, Unavailable, WrapAxis, WrapMode};

/// Identity of a bound sheet: the material showing it and the image behind it.
///
/// A recreated material or a swapped image both count as a different texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialTextureId {
    pub material: AssetId<StandardMaterial>,
    pub image: AssetId<Image>,
}

/// One entity's view of the asset stores for the duration of a tick.
pub struct MaterialSurface<'a> {
    pub mesh: Option<&'a Mesh3d>,
    pub material: Option<&'a MeshMaterial3d<StandardMaterial>>,
    pub meshes: &'a Assets<Mesh>,
    pub materials: &'a mut Assets<StandardMaterial>,
    pub images: &'a mut Assets<Image>,
}

impl SheetSurface for MaterialSurface<'_> {
    type TextureId = MaterialTextureId;
    type Texture<'s>
        = MaterialTexture<'s>
    where
        Self: 's;

    fn texture(&mut self) -> Result<MaterialTexture<'_>, Unavailable> {
        let mesh = self.mesh.ok_or(Unavailable::NoMesh)?;
        if !self.meshes.contains(mesh.0.id()) {
            return Err(Unavailable::NoMesh);
        }

        let material = self.material.ok_or(Unavailable::NoMaterial)?.0.id();
        let image = self
            .materials
            .get(material)
            .ok_or(Unavailable::NoMaterial)?
            .base_color_texture
            .as_ref()
            .ok_or(Unavailable::NoTextureMap)?
            .id();

        Ok(MaterialTexture {
            id: MaterialTextureId { material, image },
            materials: &mut *self.materials,
            images: &mut *self.images,
        })
    }
}

/// Short-lived handle to a material's base color texture.
pub struct MaterialTexture<'a> {
    id: MaterialTextureId,
    materials: &'a mut Assets<StandardMaterial>,
    images: &'a mut Assets<Image>,
}

impl SheetTexture for MaterialTexture<'_> {
    type Id = MaterialTextureId;

    fn id(&self) -> MaterialTextureId {
        self.id
    }

    fn is_image_loaded(&self) -> bool {
        self.images.contains(self.id.image)
    }

    fn set_wrap_mode(&mut self, axis: WrapAxis, mode: WrapMode) {
        let Some(image) = self.images.get_mut(self.id.image) else {
            return;
        };
        let descriptor = image.sampler.get_or_init_descriptor();
        let address_mode = address_mode(mode);
        match axis {
            WrapAxis::U => descriptor.address_mode_u = address_mode,
            WrapAxis::V => descriptor.address_mode_v = address_mode,
        }
    }

    fn set_repeat(&mut self, repeat: Vec2) {
        if let Some(material) = self.materials.get_mut(self.id.material) {
            material.uv_transform.matrix2 = Mat2::from_diagonal(repeat);
        }
    }

    fn set_offset(&mut self, offset: Vec2) {
        if let Some(material) = self.materials.get_mut(self.id.material) {
            let translation = top_left_translation(&material.uv_transform, offset);
            material.uv_transform.translation = translation;
        }
    }

    fn mark_material_dirty(&mut self) {
        // Mutable access queues the material for re-extraction.
        let _ = self.materials.get_mut(self.id.material);
    }
}

fn address_mode(mode: WrapMode) -> ImageAddressMode {
    match mode {
        WrapMode::ClampToEdge => ImageAddressMode::ClampToEdge,
        WrapMode::Repeat => ImageAddressMode::Repeat,
        WrapMode::MirrorRepeat => ImageAddressMode::MirrorRepeat,
    }
}

/// Convert a bottom-left origin offset into a top-left origin translation.
pub fn top_left_translation(uv_transform: &Affine2, offset: Vec2) -> Vec2 {
    let repeat_y = uv_transform.matrix2.y_axis.y;
    Vec2::new(offset.x, 1.0 - repeat_y - offset.y)
}

