//! Descriptor schemas.
//!
//! One serde struct per resource type, shared between the RON source form
//! and the bincode compiled form. All fields carry defaults so authored
//! files only need to spell out what they use.

mod components;
mod gameobject;
mod gui;
mod math;
mod physics;
mod script;

pub use components::{
    CameraDesc, EmitterDesc, EmitterTexture, FactoryDesc, GamepadMapEntry, GamepadMapItem,
    GamepadMaps, InputBinding, LightDesc, LightType, ModelDesc, RenderMaterialDesc,
    RenderPrototypeDesc, SpriteDesc, TileCell, TileGridDesc, TileLayerDesc, TriggerDesc,
};
pub use gameobject::{
    CollectionDesc, CollectionInstanceDesc, CollectionProxyDesc, ComponentDesc,
    EmbeddedComponentDesc, InstanceDesc, PrototypeDesc,
};
pub use gui::{FontDesc, GuiNodeDesc, GuiSceneDesc, GuiTextureDesc};
pub use math::{Quat, Vec3};
pub use physics::{
    CollisionObjectDesc, CollisionObjectType, ConvexShape, EmbeddedCollisionShape, ShapeDesc,
    ShapeType,
};
pub use script::{LuaModule, LuaModuleType};
