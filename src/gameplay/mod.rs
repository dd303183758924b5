pub mod satellite_repair;
pub mod sun_dodge;
