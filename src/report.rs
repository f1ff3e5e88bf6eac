//! Console and CSV rendering of acceleration results.

use std::io::{self, Write};

use solar_core::units::{km_to_au, km_to_m};
use solar_core::vector::Vector3;
use solar_export::accelerations::Record;
use solar_gravity::Body;

/// Pair each body with its acceleration for the CSV exporter.
pub fn records<'a>(bodies: &'a [Body], accelerations: &[Vector3]) -> Vec<Record<'a>> {
    bodies
        .iter()
        .zip(accelerations)
        .map(|(body, acceleration)| Record::new(body.name(), acceleration.to_array()))
        .collect()
}

/// Fixed-width table: components in km/s², magnitude in m/s², distance from
/// the origin in AU.
pub fn write_table<W: Write>(
    writer: &mut W,
    bodies: &[Body],
    accelerations: &[Vector3],
) -> io::Result<()> {
    writeln!(
        writer,
        "{:<14} {:>14} {:>14} {:>14} {:>14} {:>10}",
        "body", "ax [km/s2]", "ay [km/s2]", "az [km/s2]", "|a| [m/s2]", "r [AU]"
    )?;
    for (body, acceleration) in bodies.iter().zip(accelerations) {
        writeln!(
            writer,
            "{:<14} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e} {:>10.4}",
            body.name(),
            acceleration.x,
            acceleration.y,
            acceleration.z,
            km_to_m(acceleration.magnitude()),
            km_to_au(body.position().magnitude()),
        )?;
    }
    Ok(())
}
