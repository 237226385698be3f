//! This example compresses a flight path over the Pacific into a coordinate string and computes its bounds.
//!
//! Run with `RUST_LOG=trace` to see what the codec does.

use locus::{latlon, Color, LocationRect, LocusError, PointCodec, PyramidTileId};

fn main() -> Result<(), LocusError> {
    env_logger::init();

    let path = [
        latlon!(-17.7557, 177.4433),
        latlon!(-15.3842, -178.3901),
        latlon!(-13.8333, -171.7667),
        latlon!(21.3187, -157.9225),
    ];

    let codec = PointCodec::default();
    let compressed = codec.encode(&path)?;
    println!("Compressed {} locations: {compressed}", path.len());

    let restored = codec.decode(&compressed)?;
    for location in &restored {
        println!("  {location}");
    }

    let Some(bounds) = LocationRect::from_locations(&restored) else {
        return Ok(());
    };
    println!("Bounds: {bounds}");
    println!(
        "Crosses the date line: {}",
        bounds.crosses_international_date_line()
    );
    for part in bounds.split_by_international_date_line() {
        println!("  part: {part}");
    }

    let padded = bounds.inflate(10.0);
    println!("Bounds with 10% padding: {padded}");

    let route_color: Color = "#c0ff8000".parse()?;
    println!("Route color: {}", route_color.to_rgba());

    let tile = PyramidTileId::new(0, 3, 3)?;
    println!("Tile {tile} has quadkey {}", tile.quadkey());

    Ok(())
}
