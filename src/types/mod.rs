pub mod author;
pub mod comment;
pub mod query;
pub mod tutorial;

pub use author::Author;
pub use comment::Comment;
pub use tutorial::Tutorial;
