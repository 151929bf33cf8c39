pub mod chat;
pub mod config;
pub mod dataset;
pub mod error;
pub mod telemetry;

pub use chat::ChatService;
pub use dataset::{PlacementDataset, PlacementRecord};
