//! Built-in solar-system bodies and conversion from catalog manifests.
//!
//! States are heliocentric, in km and km/s; `gm` values are in km³/s².

use std::path::Path;

use solar_config::{BodyConfig, ConfigError};
use solar_core::constants::GM_SUN_KM3_S2;
use solar_core::vector::Vector3;
use solar_gravity::Body;
use tracing::info;

/// The Sun, the Moon and six planets at a fixed reference epoch, in the order
/// the acceleration report lists them.
pub fn solar_system() -> Vec<Body> {
    vec![
        Body::new("Sun", Vector3::zero(), Vector3::zero(), GM_SUN_KM3_S2),
        Body::new(
            "Moon",
            Vector3::new(-6.495364069029525e7, 1.320947069062943e8, 2.704999488616735e4),
            Vector3::new(-2.693992140731323e1, -1.418789199462139e1, -1.479866760897597e-2),
            4_902.800_066,
        ),
        Body::new(
            "Earth",
            Vector3::new(-6.460466571450332e7, 1.322145017754471e8, -6.309428925409913e3),
            Vector3::new(-2.725423398965551e1, -1.317899134460998e1, 8.656734598035953e-4),
            398_600.435_436,
        ),
        Body::new(
            "Mercury",
            Vector3::new(4.022180492977770e7, -4.846664361672945e7, -7.650162494227177e6),
            Vector3::new(2.779612781778818e1, 3.345304308542049e1, 1.837186214409776e-1),
            22_031.78,
        ),
        Body::new(
            "Venus",
            Vector3::new(9.405851148876747e7, 5.358598615005913e7, -4.692568261448300e6),
            Vector3::new(-1.744537890570094e1, 3.027869039102691e1, 1.422189780971635),
            324_858.592,
        ),
        Body::new(
            "Mars",
            Vector3::new(-1.757523324502042e8, -1.561139983441896e8, 1.040907987535134e6),
            Vector3::new(1.699996457362255e1, -1.604014612625873e1, -7.532127316314190e-1),
            42_828.375_214,
        ),
        Body::new(
            "Jupiter",
            Vector3::new(9.645852849809307e7, -7.751822294647597e8, 1.061595873793304e6),
            Vector3::new(1.281982873892912e1, 2.230656764808971, -2.962161287606510e-1),
            126_686_534.911,
        ),
        Body::new(
            "Saturn",
            Vector3::new(5.796789943794842e8, -1.384408860689929e9, 9.953620049176812e5),
            Vector3::new(8.389521747848969, 3.706927582928515, -3.988074318732124e-1),
            37_931_207.8,
        ),
    ]
}

/// Convert a parsed catalog entry into a kernel body.
pub fn from_config(config: &BodyConfig) -> Body {
    Body::new(
        config.name.clone(),
        Vector3::from(config.position_km),
        Vector3::from(config.velocity_km_s),
        config.gm_km3_s2,
    )
}

pub fn from_configs(configs: &[BodyConfig]) -> Vec<Body> {
    configs.iter().map(from_config).collect()
}

/// Load bodies from a catalog manifest, or fall back to [`solar_system`].
pub fn load(path: Option<&Path>) -> Result<Vec<Body>, ConfigError> {
    let bodies = match path {
        Some(path) => {
            let bodies = from_configs(&solar_config::load_bodies(path)?);
            info!(path = %path.display(), bodies = bodies.len(), "loaded body catalog");
            bodies
        }
        None => solar_system(),
    };
    Ok(bodies)
}

/// Index of the body with the given case-insensitive name.
pub fn index_of(bodies: &[Body], name: &str) -> Option<usize> {
    let upper = name.to_uppercase();
    bodies.iter().position(|b| b.name().to_uppercase() == upper)
}
