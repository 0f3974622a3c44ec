//! Transform export for the external renderer.
//!
//! The core never builds meshes or materials. Each frame it hands out one
//! [`EntityTransform`] per visible entity; a GPU renderer can pack those into
//! [`TransformInstance`] values and upload the slice as-is.

use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};

/// What an exported transform belongs to.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntityKind {
    #[default]
    Player = 0,
    Bunny = 1,
    SpeedBoostPickup = 2,
    RangedAttackPickup = 3,
    Projectile = 4,
}

impl EntityKind {
    /// Convert from u32 (for GPU buffer compatibility). `None` for unknown values.
    #[inline]
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(EntityKind::Player),
            1 => Some(EntityKind::Bunny),
            2 => Some(EntityKind::SpeedBoostPickup),
            3 => Some(EntityKind::RangedAttackPickup),
            4 => Some(EntityKind::Projectile),
            _ => None,
        }
    }

    #[inline]
    pub fn to_u32(self) -> u32 {
        self as u32
    }
}

/// World transform of one entity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EntityTransform {
    pub kind: EntityKind,
    /// Stable id within its kind (bunny id, pickup index, ...)
    pub id: u32,
    pub position: Vec3,
    pub rotation: Quat,
}

impl EntityTransform {
    pub fn new(kind: EntityKind, id: u32, position: Vec3, rotation: Quat) -> Self {
        Self { kind, id, position, rotation }
    }

    #[inline]
    pub fn to_instance(&self) -> TransformInstance {
        TransformInstance::from(self)
    }
}

/// GPU instance data
/// Layout (two 16-byte rows):
///   offset 0:  position (vec3<f32>) = 12 bytes
///   offset 12: kind (u32)           = 4 bytes
///   offset 16: rotation (vec4<f32>) = 16 bytes, quaternion xyzw
///   Total: 32 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct TransformInstance {
    pub position: [f32; 3],
    pub kind: u32,
    pub rotation: [f32; 4],
}

static_assertions::assert_eq_size!(TransformInstance, [u8; 32]);

impl From<&EntityTransform> for TransformInstance {
    fn from(t: &EntityTransform) -> Self {
        Self {
            position: t.position.to_array(),
            kind: t.kind.to_u32(),
            rotation: t.rotation.to_array(),
        }
    }
}

/// Pack a frame's transforms for upload.
pub fn pack_instances(transforms: &[EntityTransform]) -> Vec<TransformInstance> {
    transforms.iter().map(TransformInstance::from).collect()
}
