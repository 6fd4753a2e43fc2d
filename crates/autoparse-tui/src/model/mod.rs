pub mod documents;
pub mod modal;
pub mod prompt;
pub mod upload;
