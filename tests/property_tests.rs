use proptest::prelude::*;
use stronghold_rings::models::coords::bearing;
use stronghold_rings::services::projection::point_at;
use stronghold_rings::{CalcError, Coords, Dimension, Quadrant, Ring, RingCalculator, StrongholdSet};

/// Distance from `d` to the nearest edge of `ring`'s band, zero inside it.
fn edge_distance(ring: &Ring, d: f64) -> f64 {
    if ring.contains(d) {
        0.0
    } else {
        (d - ring.min_radius as f64)
            .abs()
            .min((d - ring.max_radius as f64).abs())
    }
}

proptest! {
    /// Property: classify succeeds exactly when some band contains the distance
    #[test]
    fn classify_matches_band_membership(d in 0.0f64..30000.0) {
        let containing: Vec<&Ring> = Ring::ALL.iter().filter(|r| r.contains(d)).collect();
        prop_assert!(containing.len() <= 1, "bands overlap at {}", d);

        match Ring::classify(d) {
            Ok(ring) => prop_assert_eq!(Some(&ring), containing.first().copied()),
            Err(CalcError::OutOfRange { distance }) => {
                prop_assert!(containing.is_empty());
                prop_assert_eq!(distance, d);
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    /// Property: estimate returns a ring with the nearest band edge, lowest index on ties
    #[test]
    fn estimate_picks_nearest_band(d in 0.0f64..30000.0) {
        let ring = Ring::estimate(d);
        let best = Ring::ALL
            .iter()
            .map(|r| edge_distance(r, d))
            .fold(f64::INFINITY, f64::min);
        prop_assert_eq!(edge_distance(&ring, d), best);

        let first_best = Ring::ALL
            .iter()
            .find(|r| edge_distance(r, d) == best)
            .map(|r| r.index);
        prop_assert_eq!(Some(ring.index), first_best);
    }

    /// Property: quadrant always agrees with the signs, before and after conversion
    #[test]
    fn quadrant_tracks_signs(x in -30000.0f64..30000.0, z in -30000.0f64..30000.0) {
        let mut c = Coords::new(x, z);
        let expected = |x: f64, z: f64| match (x >= 0.0, z >= 0.0) {
            (true, true) => Quadrant::PosPos,
            (true, false) => Quadrant::PosNeg,
            (false, true) => Quadrant::NegPos,
            (false, false) => Quadrant::NegNeg,
        };
        prop_assert_eq!(c.quadrant(), expected(x, z));
        c.scale_down();
        prop_assert_eq!(c.quadrant(), expected(c.x(), c.z()));
        c.scale_up();
        prop_assert_eq!(c.quadrant(), expected(c.x(), c.z()));
    }

    /// Property: scaling round-trips multiples of 8 exactly
    #[test]
    fn scale_round_trip(bx in -4000i32..4000, bz in -4000i32..4000) {
        let original = Coords::new(bx as f64 * 8.0, bz as f64 * 8.0);
        let mut c = original;
        c.scale_down();
        prop_assert_eq!(c.block(), (bx as i64, bz as i64));
        c.scale_up();
        prop_assert_eq!(c, original);
        prop_assert_eq!(c.x(), original.x());
        prop_assert_eq!(c.z(), original.z());
    }

    /// Property: a projected point lies on the circle at its own bearing
    #[test]
    fn projection_inverts_bearing(angle in -179.9f64..179.9, radius in 1000.0f64..25000.0) {
        let radius = radius.round();
        let c = point_at(angle, radius).unwrap();
        prop_assert!((c.distance_from_origin() - radius).abs() <= 1.0);
        prop_assert!(
            (bearing(c.x(), c.z()) - angle).abs() < 0.1,
            "angle {} came back as {}",
            angle,
            bearing(c.x(), c.z())
        );
    }

    /// Property: bearings stay within [-180, 180]
    #[test]
    fn bearing_is_bounded(x in -30000.0f64..30000.0, z in -30000.0f64..30000.0) {
        let b = bearing(x, z);
        prop_assert!((-180.0..=180.0).contains(&b));
    }

    /// Property: projections never exceed ring size minus one and sit at the mean radius
    #[test]
    fn projection_size_and_radius(
        x in -30000.0f64..30000.0,
        z in -30000.0f64..30000.0,
        nether in any::<bool>()
    ) {
        let mut calc = RingCalculator::new(x, z, true).unwrap();
        if calc.ring().is_none() {
            calc.estimate_ring();
        }
        let ring = calc.ring().unwrap();
        let coords = calc.project(nether).unwrap();
        prop_assert!(coords.len() < ring.structure_count as usize);

        let scale = if nether { 8.0 } else { 1.0 };
        for c in &coords {
            let distance = c.distance_from_origin() * scale;
            prop_assert!((distance - ring.mean_radius() as f64).abs() <= 1.5);
        }
    }

    /// Property: removing a held entry lowers the remaining count by one
    #[test]
    fn remove_decrements(
        x in -20000.0f64..20000.0,
        z in -20000.0f64..20000.0,
        pick in any::<prop::sample::Index>()
    ) {
        let mut calc = RingCalculator::new(x, z, true).unwrap();
        calc.estimate_ring();
        let mut set = StrongholdSet::new(calc.project(false).unwrap(), Dimension::Overworld);
        let entries = set.sorted();
        prop_assume!(!entries.is_empty());

        let target = entries[pick.index(entries.len())];
        let before = set.remaining();
        prop_assert!(set.remove(&target));
        prop_assert_eq!(set.remaining(), before - 1);
        prop_assert!(!set.contains(&target));
    }

    /// Property: set_ring accepts exactly 1 through 8
    #[test]
    fn set_ring_accepts_only_catalog_indices(n in -20i32..20) {
        let mut calc = RingCalculator::new(0.0, 0.0, true).unwrap();
        let result = calc.set_ring(n);
        if (1..=8).contains(&n) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(calc.ring_index(), Some(n));
        } else {
            prop_assert!(matches!(result, Err(CalcError::InvalidRing(bad)) if bad == n));
        }
    }
}
