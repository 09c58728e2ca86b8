pub mod image_framing;
pub mod locale;
pub mod params;
