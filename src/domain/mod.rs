// Domain layer: entities, their builders, and attribute projection.

pub mod account;
pub mod attribute;
pub mod projection;
pub mod user;
