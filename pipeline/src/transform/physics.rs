//! Collision object transform.

use std::fs;

use crate::codec;
use crate::error::PipelineResult;
use crate::path;
use crate::rewrite::rewrite_pair;
use crate::schema::{CollisionObjectDesc, CollisionObjectType, ConvexShape, Quat, ShapeDesc, Vec3};

use super::CompileContext;

/// Zero the mass of non-dynamic objects and inline the referenced convex
/// shape into the embedded shape buffer.
///
/// Tilegrid/tilemap shape references are left as references (only their
/// extension is rewritten); anything else is read from the content root,
/// appended to the embedded buffer, and the reference is cleared.
pub fn transform_collision_object(
    ctx: &CompileContext,
    mut msg: CollisionObjectDesc,
) -> PipelineResult<CollisionObjectDesc> {
    if msg.r#type != CollisionObjectType::Dynamic {
        msg.mass = 0.0;
    }

    if !msg.collision_shape.is_empty()
        && !msg.collision_shape.ends_with(".tilegrid")
        && !msg.collision_shape.ends_with(".tilemap")
    {
        let shape_path = path::resolve(ctx.content_root, &msg.collision_shape);
        let text = fs::read(&shape_path)?;
        let convex: ConvexShape = codec::decode_text(&text)?;

        let embedded = &mut msg.embedded_collision_shape;
        embedded.shapes.push(ShapeDesc {
            shape_type: convex.shape_type,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            index: embedded.data.len() as u32,
            count: convex.data.len() as u32,
        });
        embedded.data.extend_from_slice(&convex.data);
        msg.collision_shape.clear();
    }

    msg.collision_shape = rewrite_pair(&msg.collision_shape, ".convexshape", ".convexshapec");
    msg.collision_shape = rewrite_pair(&msg.collision_shape, ".tilegrid", ".tilegridc");
    msg.collision_shape = rewrite_pair(&msg.collision_shape, ".tilemap", ".tilegridc");
    Ok(msg)
}
