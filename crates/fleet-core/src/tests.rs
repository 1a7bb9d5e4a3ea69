//! Unit tests for fleet-core.

#[cfg(test)]
mod ids {
    use std::collections::BTreeSet;

    use crate::{AgentId, NodeId};

    #[test]
    fn ordering_follows_inner_value() {
        let set: BTreeSet<NodeId> = [NodeId(7), NodeId(2), NodeId(5)].into_iter().collect();
        let ordered: Vec<u32> = set.into_iter().map(NodeId::get).collect();
        assert_eq!(ordered, [2, 5, 7]);
    }

    #[test]
    fn display_names_the_type() {
        assert_eq!(AgentId(4).to_string(), "AgentId(4)");
        assert_eq!(NodeId(11).to_string(), "NodeId(11)");
    }

    #[test]
    fn from_raw() {
        assert_eq!(AgentId::from(9), AgentId(9));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, PlanConfig};

    #[test]
    fn defaults() {
        let c = PlanConfig::default();
        assert_eq!(c.paths_per_agent, 3);
        assert_eq!(c.edge_duration, 1.0);
        assert_eq!(c.max_iterations, 100);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_toml_is_default() {
        let c = PlanConfig::from_toml_str("").unwrap();
        assert_eq!(c, PlanConfig::default());
    }

    #[test]
    fn toml_overrides() {
        let c = PlanConfig::from_toml_str(
            "paths_per_agent = 5\nedge_duration = 0.5\nmax_iterations = 20\n",
        )
        .unwrap();
        assert_eq!(c.paths_per_agent, 5);
        assert_eq!(c.edge_duration, 0.5);
        assert_eq!(c.max_iterations, 20);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = PlanConfig::from_toml_str("velocityy = 2.0").unwrap_err();
        assert!(matches!(err, CoreError::Toml(_)));
    }

    #[test]
    fn zero_paths_rejected() {
        let err = PlanConfig::new().with_paths_per_agent(0).validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    }

    #[test]
    fn negative_edge_duration_rejected() {
        assert!(PlanConfig::new().with_edge_duration(-1.0).validate().is_err());
        assert!(PlanConfig::new().with_edge_duration(f64::NAN).validate().is_err());
        // Zero is allowed: every agent then occupies its whole path at once.
        assert!(PlanConfig::new().with_edge_duration(0.0).validate().is_ok());
    }

    #[test]
    fn zero_iterations_rejected() {
        assert!(PlanConfig::new().with_max_iterations(0).validate().is_err());
    }

    #[test]
    fn invalid_toml_value_rejected_at_parse() {
        let err = PlanConfig::from_toml_str("max_iterations = 0").unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = PlanConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
