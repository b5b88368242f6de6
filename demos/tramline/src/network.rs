//! Synthetic coastal-town network for the demo.
//!
//! Stands in for the external OSM loader: a dozen named places around a
//! seafront, connected by classified streets whose lengths come from the
//! haversine distance between their endpoints.  The stop registry plays the
//! role of the external geocoder — name in, coordinates out.

use hub_core::GeoPoint;
use hub_graph::{CityGraphBuilder, EdgeAttrs, RoadClass};

// ── Stop registry (geocoder stand-in) ─────────────────────────────────────────

/// Known place names and their coordinates.
pub const STOPS: &[(&str, GeoPoint)] = &[
    ("Central Station", GeoPoint { lat: 50.7270, lon: -1.8650 }),
    ("Pier",            GeoPoint { lat: 50.7167, lon: -1.8760 }),
    ("Boscombe",        GeoPoint { lat: 50.7261, lon: -1.8417 }),
    ("Winton",          GeoPoint { lat: 50.7360, lon: -1.8813 }),
    ("Lansdowne",       GeoPoint { lat: 50.7236, lon: -1.8641 }),
    ("Southbourne",     GeoPoint { lat: 50.7220, lon: -1.8160 }),
];

/// Look a place name up in the registry.
pub fn stop_coords(name: &str) -> Option<GeoPoint> {
    STOPS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, p)| p)
}

// ── Network builder ───────────────────────────────────────────────────────────

/// Build the demo town.
///
/// One node per registry stop plus a few junction nodes; the street grid
/// links every district to Central Station directly or via Lansdowne.  The
/// seafront between Pier and Southbourne has no direct street, so the
/// tramline scenario visibly shortens that journey.
pub fn build_town() -> CityGraphBuilder {
    let mut b = CityGraphBuilder::new();

    // Registry stops, in declaration order.
    let station     = b.add_node(STOPS[0].1);
    let pier        = b.add_node(STOPS[1].1);
    let boscombe    = b.add_node(STOPS[2].1);
    let winton      = b.add_node(STOPS[3].1);
    let lansdowne   = b.add_node(STOPS[4].1);
    let southbourne = b.add_node(STOPS[5].1);

    // Junctions without a registry name.
    let triangle = b.add_node(GeoPoint::new(50.7205, -1.8705));
    let ring     = b.add_node(GeoPoint::new(50.7310, -1.8530));

    let street = |b: &mut CityGraphBuilder, from, to, class: RoadClass, speed: Option<f64>| {
        let len = b
            .node_pos(from)
            .zip(b.node_pos(to))
            .map(|(a, c)| a.distance_m(c))
            .unwrap_or(100.0);
        let mut attrs = EdgeAttrs::new(len).with_class(class);
        if let Some(s) = speed {
            attrs = attrs.with_speed(s);
        }
        b.add_edge(from, to, attrs);
    };

    // Main corridors into the station.
    street(&mut b, lansdowne, station,   RoadClass::Primary, Some(48.0));
    street(&mut b, winton,    station,   RoadClass::Primary, Some(48.0));
    street(&mut b, ring,      station,   RoadClass::Primary, Some(48.0));
    street(&mut b, boscombe,  ring,      RoadClass::Primary, Some(48.0));

    // Residential in-fill.
    street(&mut b, pier,      triangle,  RoadClass::Residential, None);
    street(&mut b, triangle,  lansdowne, RoadClass::Residential, None);
    street(&mut b, lansdowne, boscombe,  RoadClass::Secondary, Some(40.0));
    street(&mut b, boscombe,  southbourne, RoadClass::Secondary, Some(40.0));
    street(&mut b, winton,    ring,      RoadClass::Residential, None);

    // Trunk bypass: fast for cars, forbidden for cyclists.
    street(&mut b, winton, boscombe, RoadClass::Trunk, Some(96.0));

    b
}
