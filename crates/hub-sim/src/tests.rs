//! End-to-end driver tests on a hand-crafted three-node city.

#[cfg(test)]
mod helpers {
    use hub_core::{GeoPoint, NodeId};
    use hub_graph::{CityGraphBuilder, EdgeAttrs, RoadClass, ScenarioSpec, StopRef, TrafficLevel};
    use hub_pop::ModeWeights;
    use crate::RunConfig;

    /// A line A–B–C plus a detached node D.  A–B is a primary road (subject
    /// to congestion), B–C a residential street.
    pub fn city() -> (CityGraphBuilder, [NodeId; 4]) {
        let mut b = CityGraphBuilder::new();
        let a = b.add_node(GeoPoint::new(50.720, -1.880));
        let m = b.add_node(GeoPoint::new(50.721, -1.880));
        let c = b.add_node(GeoPoint::new(50.722, -1.880));
        let d = b.add_node(GeoPoint::new(50.750, -1.900));

        b.add_edge(a, m, EdgeAttrs::new(100.0).with_class(RoadClass::Primary));
        b.add_edge(m, c, EdgeAttrs::new(100.0).with_class(RoadClass::Residential));

        (b, [a, m, c, d])
    }

    pub fn config(hub: NodeId, weights: ModeWeights, scenario: ScenarioSpec) -> RunConfig {
        RunConfig {
            city: "Testville".to_owned(),
            hub: StopRef::Node(hub),
            agent_count: 30,
            weights,
            scenario,
            traffic: TrafficLevel::Normal,
            seed: 42,
            cost: Default::default(),
        }
    }

    pub fn walk_only() -> ModeWeights {
        ModeWeights { walk: 1.0, cycle: 0.0, drive: 0.0, tram: 0.0 }
    }

    pub fn tram_only() -> ModeWeights {
        ModeWeights { walk: 0.0, cycle: 0.0, drive: 0.0, tram: 1.0 }
    }
}

#[cfg(test)]
mod driver {
    use hub_core::TravelMode;
    use hub_graph::{ScenarioSpec, StopRef};
    use hub_pop::ModeWeights;
    use crate::{SimError, run};
    use super::helpers::{city, config, tram_only, walk_only};

    #[test]
    fn tramline_changes_tram_outcomes_only_in_scenario() {
        let (builder, [a, _, c, _]) = city();
        let spec = ScenarioSpec::new(vec![StopRef::Node(a), StopRef::Node(c)], 10.0);
        let cfg = config(c, tram_only(), spec);

        let outcome = run(&cfg, &builder).unwrap();

        // Baseline has no tram edges: every tram assignee fell back to walk.
        let base = &outcome.baseline.stats;
        assert_eq!(base.mode(TravelMode::Tram).total, 0);
        assert_eq!(base.mode(TravelMode::Walk).total, cfg.agent_count);
        assert!(outcome.baseline.tram_stops.is_empty());

        // Scenario: all agents ride the tram from a stop; the only nonzero
        // distance is the 10 m tram segment.
        let scen = &outcome.scenario.stats;
        assert_eq!(scen.mode(TravelMode::Tram).total, cfg.agent_count);
        assert_eq!(scen.mode(TravelMode::Tram).unreachable, 0);
        assert_eq!(scen.overall.max_m(), Some(10.0));
        assert_eq!(outcome.scenario.tram_stops, vec![a, c]);

        // Walk access to the hub is unchanged by the tramline.
        assert_eq!(base.overall.max_m(), Some(200.0));
    }

    #[test]
    fn walk_distances_and_access_map() {
        let (builder, [a, m, c, _]) = city();
        let cfg = config(c, walk_only(), ScenarioSpec::none());

        let outcome = run(&cfg, &builder).unwrap();
        let base = &outcome.baseline;

        assert_eq!(base.stats.overall.total, cfg.agent_count);
        assert_eq!(base.stats.overall.unreachable, 0);

        // Homes are drawn from {a, m, c}; distances from {200, 100, 0}.
        for agent in &base.agents {
            assert!([a, m, c].contains(&agent.home));
            assert!([200.0, 100.0, 0.0].contains(&agent.total_distance_m));
        }
        for (&home, &dist) in &base.access_map {
            assert!([a, m, c].contains(&home));
            assert!([200.0, 100.0, 0.0].contains(&dist));
        }
    }

    #[test]
    fn unresolvable_hub_aborts_run() {
        let (builder, _) = city();
        let cfg = config(hub_core::NodeId(99), walk_only(), ScenarioSpec::none());
        assert!(matches!(run(&cfg, &builder), Err(SimError::Graph(_))));
    }

    #[test]
    fn unresolvable_scenario_stop_aborts_run() {
        let (builder, [a, _, c, _]) = city();
        let spec = ScenarioSpec::new(
            vec![StopRef::Node(a), StopRef::Node(hub_core::NodeId(99))],
            10.0,
        );
        let cfg = config(c, walk_only(), spec);
        assert!(matches!(run(&cfg, &builder), Err(SimError::Graph(_))));
    }

    #[test]
    fn all_zero_weights_abort_run() {
        let (builder, [_, _, c, _]) = city();
        let weights = ModeWeights { walk: 0.0, cycle: 0.0, drive: 0.0, tram: 0.0 };
        let cfg = config(c, weights, ScenarioSpec::none());
        assert!(matches!(run(&cfg, &builder), Err(SimError::Population(_))));
    }

    #[test]
    fn congestion_lengthens_major_road_routes() {
        let (builder, [_, _, c, _]) = city();
        let mut cfg = config(c, walk_only(), ScenarioSpec::none());

        let normal = run(&cfg, &builder).unwrap();
        cfg.traffic = hub_graph::TrafficLevel::Congested;
        let congested = run(&cfg, &builder).unwrap();

        // The primary A–B segment grows 100 → 150 m; the residential B–C
        // segment stays.  Worst-case home A: 200 → 250 m.
        assert_eq!(normal.baseline.stats.overall.max_m(), Some(200.0));
        assert_eq!(congested.baseline.stats.overall.max_m(), Some(250.0));
    }

    #[test]
    fn same_config_reproduces_results() {
        let (builder, [a, _, c, _]) = city();
        let spec = ScenarioSpec::new(vec![StopRef::Node(a), StopRef::Node(c)], 10.0);
        let cfg = config(c, Default::default(), spec);

        let r1 = run(&cfg, &builder).unwrap();
        let r2 = run(&cfg, &builder).unwrap();
        assert_eq!(r1.baseline.stats, r2.baseline.stats);
        assert_eq!(r1.scenario.stats, r2.scenario.stats);
        assert_eq!(r1.baseline.access_map, r2.baseline.access_map);
    }

    #[test]
    fn input_builder_is_left_untouched() {
        let (builder, [a, _, c, _]) = city();
        let edges_before = builder.edge_count();
        let spec = ScenarioSpec::new(vec![StopRef::Node(a), StopRef::Node(c)], 10.0);
        let cfg = config(c, Default::default(), spec);

        run(&cfg, &builder).unwrap();
        assert_eq!(builder.edge_count(), edges_before);
    }

    #[test]
    fn empty_population_is_all_none() {
        let (builder, [_, _, c, _]) = city();
        let mut cfg = config(c, walk_only(), ScenarioSpec::none());
        cfg.agent_count = 0;

        let outcome = run(&cfg, &builder).unwrap();
        let s = &outcome.baseline.stats.overall;
        assert_eq!(s.total, 0);
        assert_eq!(s.avg_m(), None);
        assert_eq!(s.min_m(), None);
        assert_eq!(s.max_m(), None);
    }
}
