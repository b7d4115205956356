//! Collection and collection proxy transforms.

use crate::error::PipelineResult;
use crate::rewrite::rewrite_pair;
use crate::schema::{CollectionDesc, CollectionProxyDesc};

use super::CompileContext;

/// Rewrite prototype and nested collection references.
pub fn transform_collection(
    _ctx: &CompileContext,
    mut msg: CollectionDesc,
) -> PipelineResult<CollectionDesc> {
    for instance in &mut msg.instances {
        instance.prototype = rewrite_pair(&instance.prototype, ".go", ".goc");
    }
    for nested in &mut msg.collection_instances {
        nested.collection = rewrite_pair(&nested.collection, ".collection", ".collectionc");
    }
    Ok(msg)
}

/// Rewrite the proxied collection reference.
pub fn transform_collection_proxy(
    _ctx: &CompileContext,
    mut msg: CollectionProxyDesc,
) -> PipelineResult<CollectionProxyDesc> {
    msg.collection = rewrite_pair(&msg.collection, ".collection", ".collectionc");
    Ok(msg)
}
