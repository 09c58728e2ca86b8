pub mod category;
pub mod newsroom;
pub mod story;
