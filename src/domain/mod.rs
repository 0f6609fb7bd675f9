pub mod commands;
pub mod errors;
pub mod events;
pub mod item;
pub mod member;
pub mod value_objects;

pub use errors::*;
pub use events::*;
pub use item::{Item, ItemKind};
pub use member::Member;
pub use value_objects::*;
