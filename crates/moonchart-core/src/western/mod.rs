pub mod planets;
pub mod rulers;
pub mod signs;

pub use planets::{ChartPoint, PlanetMeaning, PLANET_MEANINGS};
pub use rulers::get_sign_ruler;
pub use signs::{sign_from_longitude, Element, Modality, ZodiacSign, SIGN_SPAN};
