//! Reusable mobile UI components

pub mod card_face;
pub mod card_stack;

pub use card_face::CardFace;
pub use card_stack::CardStackScreen;
