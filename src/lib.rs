pub mod constants;
pub mod container;
pub mod errors;
pub mod ingredients;
pub mod kitchen;
pub mod observer;
pub mod recipe;
pub mod recipe_reader;
pub mod scaled;
pub mod storage_reader;
pub mod stuff;
