//! Unit tests for fleet-schedule.

#[cfg(test)]
mod helpers {
    use fleet_agent::{Agent, AgentSpec, build_agents};
    use fleet_core::{AgentId, NodeId};
    use fleet_graph::{Graph, GridLayout, Path};

    use crate::{Assignment, Schedule};

    pub fn spec(id: u32, start: u32, end: u32, priority: i32) -> AgentSpec {
        AgentSpec::new(AgentId(id), NodeId(start), NodeId(end), priority)
    }

    pub fn path(ids: &[u32]) -> Path {
        Path::try_from(ids.iter().copied().map(NodeId).collect::<Vec<_>>()).unwrap()
    }

    /// 3×3 grid, nodes 1..=9, centre node 5:
    ///
    /// ```text
    /// 1 2 3
    /// 4 5 6
    /// 7 8 9
    /// ```
    pub fn grid3() -> Graph {
        GridLayout::new(3, 3).build_graph()
    }

    pub fn agents(graph: &Graph, specs: &[AgentSpec], k: usize) -> Vec<Agent> {
        build_agents(graph, specs, k).unwrap()
    }

    /// An agent that never leaves `node`.
    pub fn parked(id: u32, node: u32, priority: i32) -> Agent {
        Agent::new(spec(id, node, node, priority), vec![Path::trivial(NodeId(node))]).unwrap()
    }

    pub fn schedule(entries: &[(u32, &[u32], f64)]) -> Schedule {
        entries
            .iter()
            .map(|&(id, nodes, start)| (AgentId(id), Assignment::new(path(nodes), start)))
            .collect()
    }
}

// ── Timeline ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timeline {
    use fleet_core::NodeId;

    use crate::build_timeline;

    #[test]
    fn constant_edge_duration() {
        let nodes = [NodeId(3), NodeId(1), NodeId(2)];
        let t = build_timeline(&nodes, 2.0, 0.5);
        assert_eq!(t.times_at(NodeId(3)), &[2.0]);
        assert_eq!(t.times_at(NodeId(1)), &[2.5]);
        assert_eq!(t.times_at(NodeId(2)), &[3.0]);
        assert_eq!(t.node_count(), 3);
    }

    #[test]
    fn iterates_in_node_order() {
        let nodes = [NodeId(3), NodeId(1), NodeId(2)];
        let t = build_timeline(&nodes, 0.0, 1.0);
        let order: Vec<u32> = t.iter().map(|(n, _)| n.0).collect();
        assert_eq!(order, [1, 2, 3]);
    }

    #[test]
    fn empty_path_empty_timeline() {
        let t = build_timeline(&[], 5.0, 1.0);
        assert!(t.is_empty());
        assert!(!t.visits(NodeId(1)));
    }

    #[test]
    fn revisits_keep_every_time() {
        let nodes = [NodeId(1), NodeId(2), NodeId(1)];
        let t = build_timeline(&nodes, 0.0, 1.0);
        assert_eq!(t.times_at(NodeId(1)), &[0.0, 2.0]);
    }
}

// ── Collision detection ───────────────────────────────────────────────────────

#[cfg(test)]
mod collision {
    use fleet_core::{AgentId, NodeId};

    use super::helpers::schedule;
    use crate::{Collision, Schedule, find_collisions, has_collisions};

    #[test]
    fn crossing_at_centre() {
        let s = schedule(&[(1, &[4, 5, 6], 0.0), (2, &[2, 5, 8], 0.0)]);
        let c = find_collisions(&s, 1.0);
        assert_eq!(
            c,
            vec![Collision { agent_a: AgentId(1), agent_b: AgentId(2), node: NodeId(5), time: 1.0 }]
        );
        assert!(has_collisions(&s, 1.0));
    }

    #[test]
    fn offset_start_avoids_collision() {
        let s = schedule(&[(1, &[4, 5, 6], 0.0), (2, &[2, 5, 8], 1.0)]);
        assert!(find_collisions(&s, 1.0).is_empty());
    }

    #[test]
    fn tolerance_and_midpoint() {
        let s = schedule(&[(1, &[7], 1.0), (2, &[7], 1.0 + 5e-7)]);
        let c = find_collisions(&s, 1.0);
        assert_eq!(c.len(), 1);
        assert!((c[0].time - (1.0 + 2.5e-7)).abs() < 1e-12);

        let apart = schedule(&[(1, &[7], 1.0), (2, &[7], 1.001)]);
        assert!(find_collisions(&apart, 1.0).is_empty());
    }

    #[test]
    fn same_node_different_times_is_fine() {
        // Agent 2 passes node 5 one step after agent 1 left it.
        let s = schedule(&[(1, &[5, 6], 0.0), (2, &[4, 5], 0.0)]);
        assert!(find_collisions(&s, 1.0).is_empty());
    }

    #[test]
    fn ordered_by_pair_then_node() {
        let s = schedule(&[
            (3, &[9, 5, 1], 0.0),
            (1, &[1, 5, 9], 0.0),
            (2, &[3, 5, 7], 0.0),
        ]);
        let pairs: Vec<(u32, u32, u32)> = find_collisions(&s, 1.0)
            .iter()
            .map(|c| (c.agent_a.0, c.agent_b.0, c.node.0))
            .collect();
        assert_eq!(pairs, [(1, 2, 5), (1, 3, 5), (2, 3, 5)]);
    }

    #[test]
    fn several_shared_nodes_ascending() {
        // Both agents sit still at the same spot for the whole run.
        let s = schedule(&[(1, &[2, 1], 0.0), (2, &[2, 1], 0.0)]);
        let nodes: Vec<u32> = find_collisions(&s, 1.0).iter().map(|c| c.node.0).collect();
        assert_eq!(nodes, [1, 2]);
    }

    #[test]
    fn detection_is_idempotent() {
        let s = schedule(&[(1, &[1, 2, 3], 0.0), (2, &[3, 2, 1], 0.0), (3, &[2], 1.0)]);
        assert_eq!(find_collisions(&s, 1.0), find_collisions(&s, 1.0));
    }

    #[test]
    fn empty_and_single() {
        assert!(find_collisions(&Schedule::new(), 1.0).is_empty());
        assert!(find_collisions(&schedule(&[(1, &[1, 2], 0.0)]), 1.0).is_empty());
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule {
    use fleet_core::AgentId;

    use super::helpers::{path, schedule};

    #[test]
    fn iterates_by_ascending_id() {
        let s = schedule(&[(3, &[1], 0.0), (1, &[2], 0.0), (2, &[3], 0.0)]);
        let ids: Vec<u32> = s.agent_ids().map(|a| a.0).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn arrival_and_makespan() {
        let s = schedule(&[(1, &[1, 2, 3], 1.0), (2, &[4], 0.5)]);
        assert_eq!(s.get(AgentId(1)).unwrap().arrival_time(2.0), 5.0);
        assert_eq!(s.get(AgentId(2)).unwrap().path, path(&[4]));
        assert_eq!(s.makespan(2.0), 5.0);
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use fleet_agent::AgentError;
    use fleet_core::{AgentId, CoreError};

    use super::helpers::{agents, grid3, parked, path, spec};
    use crate::{
        CollisionAvoidanceScheduler, Collision, Outcome, ScheduleError, ScheduleObserver,
        ScheduleReport, YieldAction, compute_schedule, find_collisions,
    };

    #[derive(Default)]
    struct Recorder {
        iterations: usize,
        collisions: Vec<Vec<Collision>>,
        yields:     Vec<(usize, AgentId, YieldAction)>,
        finished:   bool,
    }

    impl ScheduleObserver for Recorder {
        fn on_iteration_start(&mut self, _iteration: usize) {
            self.iterations += 1;
        }
        fn on_collisions(&mut self, _iteration: usize, collisions: &[Collision]) {
            self.collisions.push(collisions.to_vec());
        }
        fn on_yield(&mut self, iteration: usize, agent: AgentId, action: YieldAction) {
            self.yields.push((iteration, agent, action));
        }
        fn on_finish(&mut self, _report: &ScheduleReport) {
            self.finished = true;
        }
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert!(matches!(
            CollisionAvoidanceScheduler::new(-1.0, 10),
            Err(CoreError::InvalidConfiguration(_))
        ));
        assert!(CollisionAvoidanceScheduler::new(1.0, 0).is_err());
        assert!(matches!(compute_schedule(&[], 1.0, 0), Err(ScheduleError::Core(_))));
    }

    #[test]
    fn parameters_kept() {
        let s = CollisionAvoidanceScheduler::new(0.5, 7).unwrap();
        assert_eq!(s.edge_duration(), 0.5);
        assert_eq!(s.max_iterations(), 7);
    }

    #[test]
    fn duplicate_agent_ids_rejected() {
        let err = compute_schedule(&[parked(1, 1, 0), parked(1, 9, 0)], 1.0, 10).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Agent(AgentError::DuplicateAgent(AgentId(1)))
        ));
    }

    #[test]
    fn no_agents_converges_immediately() {
        let report = CollisionAvoidanceScheduler::new(1.0, 10).unwrap().run(&[]);
        assert!(report.is_converged());
        assert_eq!(report.iterations, 1);
        assert!(report.schedule.is_empty());
    }

    #[test]
    fn disjoint_paths_keep_primary_at_zero() {
        let g = grid3();
        // Top row left→right, bottom row right→left: never share a node.
        let a = agents(&g, &[spec(1, 1, 3, 0), spec(2, 9, 7, 0)], 3);
        let report = CollisionAvoidanceScheduler::new(1.0, 100).unwrap().run(&a);
        assert_eq!(report.outcome, Outcome::Converged);
        assert_eq!(report.iterations, 1);
        for agent in &a {
            let entry = report.schedule.get(agent.id()).unwrap();
            assert_eq!(&entry.path, agent.primary_path());
            assert_eq!(entry.start_time, 0.0);
        }
    }

    #[test]
    fn equal_priority_larger_id_reroutes() {
        let g = grid3();
        // Primaries 4→5→6 and 2→5→8 both reach node 5 at t=1.
        let a = agents(&g, &[spec(1, 4, 6, 0), spec(2, 2, 8, 0)], 2);
        assert_eq!(a[0].primary_path(), &path(&[4, 5, 6]));
        assert_eq!(a[1].primary_path(), &path(&[2, 5, 8]));

        let mut rec = Recorder::default();
        let report = CollisionAvoidanceScheduler::new(1.0, 100)
            .unwrap()
            .run_with_observer(&a, &mut rec);

        assert!(report.is_converged());
        assert_eq!(report.iterations, 2);
        let s = &report.schedule;
        assert_eq!(s.get(AgentId(1)).unwrap().path, path(&[4, 5, 6]));
        assert_eq!(s.get(AgentId(2)).unwrap().path, path(&[2, 1, 4, 5, 8]));
        assert_eq!(s.get(AgentId(2)).unwrap().start_time, 0.0);
        assert!(find_collisions(s, 1.0).is_empty());

        assert_eq!(rec.yields, vec![(1, AgentId(2), YieldAction::Reroute { path_index: 1 })]);
        assert_eq!(rec.collisions.len(), 1);
        assert!(rec.finished);
    }

    #[test]
    fn single_candidate_is_delayed() {
        let g = grid3();
        let a = agents(&g, &[spec(1, 4, 6, 0), spec(2, 2, 8, 0)], 1);
        let schedule = compute_schedule(&a, 1.0, 100).unwrap();
        let second = schedule.get(AgentId(2)).unwrap();
        assert_eq!(second.path, path(&[2, 5, 8]));
        assert_eq!(second.start_time, 1.0);
        assert!(find_collisions(&schedule, 1.0).is_empty());
    }

    #[test]
    fn delay_uses_edge_duration() {
        let g = grid3();
        let a = agents(&g, &[spec(1, 4, 6, 0), spec(2, 2, 8, 0)], 1);
        let schedule = compute_schedule(&a, 2.5, 100).unwrap();
        assert_eq!(schedule.get(AgentId(2)).unwrap().start_time, 2.5);
    }

    #[test]
    fn lower_priority_yields_even_with_smaller_id() {
        let g = grid3();
        let a = agents(&g, &[spec(1, 4, 6, 1), spec(2, 2, 8, 5)], 2);
        let report = CollisionAvoidanceScheduler::new(1.0, 100).unwrap().run(&a);
        assert!(report.is_converged());

        // Agent 2 outranks agent 1, so only agent 1 changed.
        let high = report.schedule.get(AgentId(2)).unwrap();
        assert_eq!(&high.path, a[1].primary_path());
        assert_eq!(high.start_time, 0.0);

        let low = report.schedule.get(AgentId(1)).unwrap();
        assert!(low.path != *a[0].primary_path() || low.start_time > 0.0);
    }

    #[test]
    fn yields_apply_lowest_rank_first() {
        // Three parked agents share node 7; 1 outranks 2 outranks 3.
        let a = vec![parked(3, 7, 0), parked(1, 7, 2), parked(2, 7, 1)];
        let mut rec = Recorder::default();
        let report = CollisionAvoidanceScheduler::new(1.0, 100)
            .unwrap()
            .run_with_observer(&a, &mut rec);

        // Iteration 1: 3 yields (to 1 and 2), then 2 yields (to 1).
        assert_eq!(rec.yields[0], (1, AgentId(3), YieldAction::Delay { by: 1.0 }));
        assert_eq!(rec.yields[1], (1, AgentId(2), YieldAction::Delay { by: 1.0 }));
        // Iteration 2: 2 and 3 now both start at t=1, so 3 yields again.
        assert_eq!(rec.yields[2], (2, AgentId(3), YieldAction::Delay { by: 1.0 }));
        assert_eq!(rec.yields.len(), 3);

        assert!(report.is_converged());
        assert_eq!(report.iterations, 3);
        let starts: Vec<f64> = report.schedule.iter().map(|(_, e)| e.start_time).collect();
        assert_eq!(starts, [0.0, 1.0, 2.0]);
    }

    #[test]
    fn half_step_nudge_after_halfway() {
        // max_iterations = 1 → halfway = 0, so iteration 1 already nudges.
        let a = vec![parked(1, 7, 0), parked(2, 7, 0), parked(3, 7, 0)];
        let mut rec = Recorder::default();
        let report = CollisionAvoidanceScheduler::new(1.0, 1)
            .unwrap()
            .run_with_observer(&a, &mut rec);

        assert_eq!(
            rec.yields,
            vec![
                (1, AgentId(2), YieldAction::Delay { by: 1.0 }),
                (1, AgentId(3), YieldAction::Delay { by: 1.0 }),
                (1, AgentId(3), YieldAction::Nudge { by: 0.5 }),
            ]
        );
        assert_eq!(report.iterations, 1);
        assert_eq!(report.schedule.get(AgentId(3)).unwrap().start_time, 1.5);
        assert!(report.is_converged());
    }

    #[test]
    fn no_nudge_before_halfway() {
        let a = vec![parked(1, 7, 0), parked(2, 7, 0), parked(3, 7, 0)];
        let mut rec = Recorder::default();
        let report = CollisionAvoidanceScheduler::new(1.0, 4)
            .unwrap()
            .run_with_observer(&a, &mut rec);
        assert!(report.is_converged());
        assert_eq!(report.iterations, 3);
        assert!(rec.yields.iter().all(|(_, _, act)| !matches!(act, YieldAction::Nudge { .. })));
    }

    #[test]
    fn nudge_targets_lower_priority() {
        // 2 outranks 3 outranks 1.  After the full-step pass agents 1 and 3
        // both start at t=1, so the nudge lands on agent 1.
        let a = vec![parked(1, 7, 0), parked(2, 7, 5), parked(3, 7, 3)];
        let mut rec = Recorder::default();
        let report = CollisionAvoidanceScheduler::new(1.0, 1)
            .unwrap()
            .run_with_observer(&a, &mut rec);

        assert_eq!(
            rec.yields,
            vec![
                (1, AgentId(1), YieldAction::Delay { by: 1.0 }),
                (1, AgentId(3), YieldAction::Delay { by: 1.0 }),
                (1, AgentId(1), YieldAction::Nudge { by: 0.5 }),
            ]
        );
        let starts: Vec<f64> = report.schedule.iter().map(|(_, e)| e.start_time).collect();
        assert_eq!(starts, [1.5, 0.0, 1.0]);
        assert!(report.is_converged());
    }

    #[test]
    fn agent_named_twice_yields_once_per_iteration() {
        let a = vec![parked(1, 7, 0), parked(2, 7, 5), parked(3, 7, 3)];
        let mut rec = Recorder::default();
        CollisionAvoidanceScheduler::new(1.0, 100)
            .unwrap()
            .run_with_observer(&a, &mut rec);
        let first: Vec<AgentId> = rec
            .yields
            .iter()
            .filter(|(it, _, _)| *it == 1)
            .map(|(_, id, _)| *id)
            .collect();
        assert_eq!(first, [AgentId(1), AgentId(3)]);
    }

    #[test]
    fn exhausted_returns_best_effort() {
        // Zero edge duration: delays never separate anyone.
        let a = vec![parked(1, 7, 0), parked(2, 7, 0)];
        let mut rec = Recorder::default();
        let report = CollisionAvoidanceScheduler::new(0.0, 5)
            .unwrap()
            .run_with_observer(&a, &mut rec);
        assert_eq!(report.outcome, Outcome::Exhausted);
        assert_eq!(report.iterations, 5);
        assert_eq!(rec.iterations, 5);
        assert_eq!(report.remaining.len(), 1);
        assert_eq!(report.schedule.len(), 2);
        assert!(rec.finished);
    }

    #[test]
    fn terminates_within_cap_on_contended_grid() {
        let g = grid3();
        let specs = [
            spec(1, 1, 9, 0),
            spec(2, 9, 1, 0),
            spec(3, 3, 7, 0),
            spec(4, 7, 3, 0),
            spec(5, 2, 8, 1),
            spec(6, 8, 2, 1),
        ];
        let a = agents(&g, &specs, 3);
        for cap in [1, 2, 7, 50] {
            let report = CollisionAvoidanceScheduler::new(1.0, cap).unwrap().run(&a);
            assert!(report.iterations <= cap);
            assert_eq!(report.schedule.len(), specs.len());
            for agent in &a {
                let entry = report.schedule.get(agent.id()).unwrap();
                assert!(agent.candidate_paths().contains(&entry.path));
                assert!(entry.start_time >= 0.0);
            }
            assert_eq!(report.remaining, find_collisions(&report.schedule, 1.0));
        }
    }

    #[test]
    fn deterministic_across_runs_and_input_order() {
        let g = grid3();
        let specs = [spec(1, 1, 9, 0), spec(2, 9, 1, 0), spec(3, 3, 7, 2), spec(4, 7, 3, 1)];
        let forward = agents(&g, &specs, 3);
        let mut reversed = forward.clone();
        reversed.reverse();

        let scheduler = CollisionAvoidanceScheduler::new(1.0, 100).unwrap();
        let first = scheduler.run(&forward).schedule;
        assert_eq!(first, scheduler.run(&forward).schedule);
        assert_eq!(first, scheduler.run(&reversed).schedule);
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use fleet_agent::AgentError;
    use fleet_core::{AgentId, NodeId, PlanConfig};
    use fleet_graph::{Graph, GraphBuilder, Path, PathFinder};

    use super::helpers::{grid3, path, spec};
    use crate::{Planner, ScheduleError, ScheduleObserver, find_collisions};

    struct Counting(usize);

    impl ScheduleObserver for Counting {
        fn on_iteration_start(&mut self, _iteration: usize) {
            self.0 += 1;
        }
    }

    #[test]
    fn invalid_config_rejected_before_planning() {
        let g = grid3();
        let result = Planner::new(&g, PlanConfig::new().with_paths_per_agent(0));
        assert!(matches!(result, Err(ScheduleError::Core(_))));
    }

    #[test]
    fn plans_crossing_agents() {
        let g = grid3();
        let planner = Planner::new(&g, PlanConfig::new().with_paths_per_agent(2)).unwrap();
        let schedule = planner.plan(&[spec(1, 4, 6, 0), spec(2, 2, 8, 0)]).unwrap();
        assert_eq!(schedule.get(AgentId(2)).unwrap().path, path(&[2, 1, 4, 5, 8]));
        assert!(find_collisions(&schedule, planner.config().edge_duration).is_empty());
    }

    #[test]
    fn trivial_agent_scheduled_in_place() {
        let g = grid3();
        let schedule = Planner::new(&g, PlanConfig::default())
            .unwrap()
            .plan(&[spec(1, 7, 7, 0)])
            .unwrap();
        let entry = schedule.get(AgentId(1)).unwrap();
        assert_eq!(entry.path, Path::trivial(NodeId(7)));
        assert_eq!(entry.start_time, 0.0);
    }

    #[test]
    fn unreachable_agent_aborts_before_scheduling() {
        let mut b = GraphBuilder::new();
        b.add_edge(NodeId(1), NodeId(2));
        b.add_node(NodeId(3));
        let g = b.build();

        let planner = Planner::new(&g, PlanConfig::default()).unwrap();
        let mut obs = Counting(0);
        let err = planner
            .plan_with_observer(&[spec(1, 1, 2, 0), spec(2, 1, 3, 0)], &mut obs)
            .unwrap_err();

        assert!(matches!(
            err,
            ScheduleError::Agent(AgentError::NoPathFound { agent: AgentId(2), .. })
        ));
        assert_eq!(obs.0, 0, "scheduler must not run");
    }

    #[test]
    fn custom_finder() {
        struct PrimaryOnly;
        impl PathFinder for PrimaryOnly {
            fn find_paths(&self, g: &Graph, s: NodeId, e: NodeId, _k: usize) -> Vec<Path> {
                fleet_graph::enumerate_paths(g, s, e, 1)
            }
        }

        let g = grid3();
        let planner = Planner::new(&g, PlanConfig::default()).unwrap().with_finder(PrimaryOnly);
        let agents = planner.build_agents(&[spec(1, 4, 6, 0)]).unwrap();
        assert_eq!(agents[0].path_count(), 1);

        let report = planner.plan_report(&[spec(1, 4, 6, 0), spec(2, 2, 8, 0)]).unwrap();
        assert_eq!(report.schedule.get(AgentId(2)).unwrap().start_time, 1.0);
    }
}
