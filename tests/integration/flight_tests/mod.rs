mod config;
mod landing;
mod plugin;
mod runner;
