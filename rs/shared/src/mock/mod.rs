pub mod completion;
pub mod rocket;
pub mod upstream;
