//! Spawn-ordered agent storage.

use seat_core::{AgentId, Cell};

use crate::{Agent, AgentState};

/// Tally of agents by lifecycle group.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct AgentCounts {
    pub seated:   usize,
    pub standing: usize,
    /// `Spawned` or `Moving`.
    pub moving:   usize,
}

impl AgentCounts {
    #[inline]
    pub fn total(&self) -> usize {
        self.seated + self.standing + self.moving
    }
}

/// All agents of a run, indexed by [`AgentId`] (spawn order).
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next pushed agent will get.
    #[inline]
    pub fn next_id(&self) -> AgentId {
        AgentId::from_index(self.agents.len())
    }

    /// Append an agent.  Its `id` must equal [`next_id`](Self::next_id).
    pub fn push(&mut self, agent: Agent) -> AgentId {
        debug_assert_eq!(agent.id, self.next_id());
        let id = agent.id;
        self.agents.push(agent);
        id
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn clear(&mut self) {
        self.agents.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable access to the first `n` agents (those that existed before a
    /// spawn phase).
    pub fn first_mut(&mut self, n: usize) -> &mut [Agent] {
        let n = n.min(self.agents.len());
        &mut self.agents[..n]
    }

    /// Positions of agents that have not settled yet.
    pub fn active_positions(&self) -> impl Iterator<Item = Cell> + '_ {
        self.agents.iter().filter(|a| !a.is_terminal()).map(|a| a.position)
    }

    pub fn all_terminal(&self) -> bool {
        self.agents.iter().all(Agent::is_terminal)
    }

    pub fn counts(&self) -> AgentCounts {
        self.agents.iter().fold(AgentCounts::default(), |mut c, a| {
            match a.state {
                AgentState::Seated => c.seated += 1,
                AgentState::Standing => c.standing += 1,
                AgentState::Spawned | AgentState::Moving => c.moving += 1,
            }
            c
        })
    }
}
