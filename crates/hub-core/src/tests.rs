//! Unit tests for hub-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::from_index(42), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(NodeId(7).to_string(), "7");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(50.72, -1.88);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(50.0, -1.88);
        let b = GeoPoint::new(51.0, -1.88);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }
}

#[cfg(test)]
mod mode {
    use crate::TravelMode;

    #[test]
    fn all_order_matches_index() {
        for (i, m) in TravelMode::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }

    #[test]
    fn labels() {
        assert_eq!(TravelMode::Walk.as_str(), "walk");
        assert_eq!(TravelMode::Tram.to_string(), "tram");
    }
}

#[cfg(test)]
mod params {
    use crate::CostParams;

    #[test]
    fn defaults() {
        let p = CostParams::default();
        assert_eq!(p.default_drive_speed_kph, 30.0);
        assert_eq!(p.cycle_length_factor, 1.1);
        assert_eq!(p.tram_edge_cost, 0.1);
        assert_eq!(p.congestion_factor, 1.5);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn same_seed_same_draws() {
        let mut a = AgentRng::new(42, AgentId(3));
        let mut b = AgentRng::new(42, AgentId(3));
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1_000_000u32), b.gen_range(0..1_000_000u32));
        }
    }

    #[test]
    fn different_agents_diverge() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(1));
        let same = (0..16)
            .filter(|_| a.gen_range(0..1_000_000u32) == b.gen_range(0..1_000_000u32))
            .count();
        assert!(same < 16, "independent streams should not be identical");
    }

    #[test]
    fn choose_empty_is_none() {
        let mut r = AgentRng::new(1, AgentId(0));
        let empty: [u32; 0] = [];
        assert!(r.choose(&empty).is_none());
    }
}
