//! One-call planning: specs in, schedule out.

use fleet_agent::{Agent, AgentSpec, build_agents_with};
use fleet_core::PlanConfig;
use fleet_graph::{BfsPathFinder, Graph, PathFinder};

use crate::{
    CollisionAvoidanceScheduler, NoopObserver, Schedule, ScheduleObserver, ScheduleReport,
    ScheduleResult,
};

/// Binds a read-only graph, a validated [`PlanConfig`], and a path finder.
///
/// The graph is borrowed, so several planners (or several threads) may share
/// it.  Each `plan*` call is an independent request.
pub struct Planner<'g, F: PathFinder = BfsPathFinder> {
    graph:     &'g Graph,
    config:    PlanConfig,
    scheduler: CollisionAvoidanceScheduler,
    finder:    F,
}

impl<'g> Planner<'g> {
    /// Validates `config` up front.
    pub fn new(graph: &'g Graph, config: PlanConfig) -> ScheduleResult<Self> {
        let scheduler = CollisionAvoidanceScheduler::from_config(&config)?;
        Ok(Self { graph, config, scheduler, finder: BfsPathFinder })
    }
}

impl<'g, F: PathFinder> Planner<'g, F> {
    /// Swap the candidate-path strategy.
    pub fn with_finder<G: PathFinder>(self, finder: G) -> Planner<'g, G> {
        Planner {
            graph:     self.graph,
            config:    self.config,
            scheduler: self.scheduler,
            finder,
        }
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph {
        self.graph
    }

    /// Enumerate candidates for every spec.  Fails on the first agent with
    /// no path; nothing is scheduled in that case.
    pub fn build_agents(&self, specs: &[AgentSpec]) -> ScheduleResult<Vec<Agent>> {
        Ok(build_agents_with(&self.finder, self.graph, specs, self.config.paths_per_agent)?)
    }

    /// Build agents and schedule them.
    pub fn plan(&self, specs: &[AgentSpec]) -> ScheduleResult<Schedule> {
        Ok(self.plan_report(specs)?.schedule)
    }

    pub fn plan_report(&self, specs: &[AgentSpec]) -> ScheduleResult<ScheduleReport> {
        self.plan_with_observer(specs, &mut NoopObserver)
    }

    pub fn plan_with_observer<O: ScheduleObserver + ?Sized>(
        &self,
        specs:    &[AgentSpec],
        observer: &mut O,
    ) -> ScheduleResult<ScheduleReport> {
        let agents = self.build_agents(specs)?;
        Ok(self.scheduler.run_with_observer(&agents, observer))
    }
}
