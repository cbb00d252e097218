pub mod fertilizer_service;

pub use fertilizer_service::{plan, Crop, FertilizerDose, FertilizerError};
