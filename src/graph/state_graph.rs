use anyhow::{Result, bail};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

use crate::models::{StateSpec, TransitionSpec};

/// Directed graph over one entity's declared states, with transitions as
/// edges. Construction fails on a dangling endpoint; callers that need
/// per-transition diagnostics check endpoints first.
pub struct StateGraph {
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
    /// State names in declaration order, for deterministic iteration.
    order: Vec<String>,
}

impl StateGraph {
    pub fn new(states: &[StateSpec], transitions: &[TransitionSpec]) -> Result<Self> {
        let mut graph = DiGraph::new();
        let mut node_map = HashMap::new();
        let mut order = Vec::with_capacity(states.len());

        for state in states {
            let node = graph.add_node(state.english_name.clone());
            node_map.insert(state.english_name.clone(), node);
            order.push(state.english_name.clone());
        }

        for transition in transitions {
            let (Some(&from), Some(&to)) = (
                node_map.get(&transition.from),
                node_map.get(&transition.to),
            ) else {
                bail!(
                    "transition '{}' references an undeclared state",
                    transition.action
                );
            };
            graph.add_edge(from, to, ());
        }

        Ok(Self {
            graph,
            node_map,
            order,
        })
    }

    fn degree(&self, state: &str, direction: Direction) -> usize {
        self.node_map
            .get(state)
            .map(|&node| self.graph.edges_directed(node, direction).count())
            .unwrap_or(0)
    }

    /// States with no incoming transitions: the machine's entry points.
    pub fn entry_states(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|s| self.degree(s, Direction::Incoming) == 0)
            .map(String::as_str)
            .collect()
    }

    /// States with no outgoing transitions: candidate terminal states.
    pub fn terminal_states(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|s| self.degree(s, Direction::Outgoing) == 0)
            .map(String::as_str)
            .collect()
    }

    /// States with neither incoming nor outgoing transitions. A self-loop
    /// counts as both, so a self-looping state is never isolated.
    pub fn isolated_states(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|s| {
                self.degree(s, Direction::Incoming) == 0
                    && self.degree(s, Direction::Outgoing) == 0
            })
            .map(String::as_str)
            .collect()
    }

    /// States not reachable from any entry state, in declaration order.
    /// When the machine has no entry state (every state has an incoming
    /// edge, e.g. a pure cycle) nothing is reported, since there is no
    /// entry point to measure from.
    pub fn unreachable_states(&self) -> Vec<&str> {
        let entries = self.entry_states();
        if entries.is_empty() {
            return Vec::new();
        }

        let mut seen: HashSet<NodeIndex> = HashSet::new();
        let mut stack: Vec<NodeIndex> =
            entries.iter().map(|state| self.node_map[*state]).collect();

        while let Some(node) = stack.pop() {
            if !seen.insert(node) {
                continue;
            }
            for next in self.graph.neighbors(node) {
                stack.push(next);
            }
        }

        self.order
            .iter()
            .filter(|state| !seen.contains(&self.node_map[state.as_str()]))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(name: &str) -> StateSpec {
        StateSpec {
            japanese_name: name.to_string(),
            english_name: name.to_string(),
            description: String::new(),
        }
    }

    fn transition(from: &str, to: &str, action: &str) -> TransitionSpec {
        TransitionSpec {
            from: from.to_string(),
            to: to.to_string(),
            action: action.to_string(),
            command_class: None,
        }
    }

    #[test]
    fn entry_and_terminal_states() {
        let states = vec![state("Draft"), state("Pending"), state("Won")];
        let transitions = vec![
            transition("Draft", "Pending", "submit"),
            transition("Pending", "Won", "win"),
        ];

        let graph = StateGraph::new(&states, &transitions).unwrap();
        assert_eq!(graph.entry_states(), vec!["Draft"]);
        assert_eq!(graph.terminal_states(), vec!["Won"]);
        assert!(graph.isolated_states().is_empty());
        assert!(graph.unreachable_states().is_empty());
    }

    #[test]
    fn isolated_state_detected() {
        let states = vec![state("A"), state("B"), state("Orphan")];
        let transitions = vec![transition("A", "B", "go")];

        let graph = StateGraph::new(&states, &transitions).unwrap();
        assert_eq!(graph.isolated_states(), vec!["Orphan"]);
        // Zero incoming edges make Orphan an entry point, so it does not
        // show up as unreachable; isolation is the stronger finding.
        assert!(graph.unreachable_states().is_empty());
    }

    #[test]
    fn cycle_component_off_the_entry_path_is_unreachable() {
        let states = vec![state("A"), state("B"), state("E"), state("F")];
        let transitions = vec![
            transition("A", "B", "go"),
            transition("E", "F", "swap"),
            transition("F", "E", "swap_back"),
        ];

        let graph = StateGraph::new(&states, &transitions).unwrap();
        assert_eq!(graph.entry_states(), vec!["A"]);
        assert!(graph.isolated_states().is_empty());
        assert_eq!(graph.unreachable_states(), vec!["E", "F"]);
    }

    #[test]
    fn self_loop_is_not_isolated() {
        let states = vec![state("A"), state("B")];
        let transitions = vec![transition("A", "B", "go"), transition("B", "B", "touch")];

        let graph = StateGraph::new(&states, &transitions).unwrap();
        assert!(graph.isolated_states().is_empty());
        assert_eq!(graph.terminal_states(), Vec::<&str>::new());
    }

    #[test]
    fn dangling_endpoint_fails_construction() {
        let states = vec![state("A")];
        let transitions = vec![transition("A", "Missing", "go")];

        assert!(StateGraph::new(&states, &transitions).is_err());
    }

    #[test]
    fn pure_cycle_reports_no_unreachable_states() {
        let states = vec![state("A"), state("B")];
        let transitions = vec![transition("A", "B", "go"), transition("B", "A", "back")];

        let graph = StateGraph::new(&states, &transitions).unwrap();
        assert!(graph.entry_states().is_empty());
        assert!(graph.unreachable_states().is_empty());
    }
}
