use std::collections::HashMap;
use tracing::debug;

use crate::models::{DomainSpec, EntitySpec, ProjectSpec, SystemClass};
use crate::validation::{Finding, ValidationPolicy, Validator};

use super::model::{
    Domain, Entity, NormalizedProject, State, StateId, StateMachine, Subdomain, Transition,
};

/// A successfully normalized document: the canonical model plus any
/// warning-level findings surfaced alongside it.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub project: NormalizedProject,
    pub warnings: Vec<Finding>,
}

/// Validates a raw document and, only when no fatal finding exists, builds
/// the canonical model. On failure the complete sorted finding list is
/// returned, never a partial model.
pub struct NormalizedModelBuilder {
    validator: Validator,
}

impl NormalizedModelBuilder {
    pub fn new() -> Self {
        Self::with_policy(ValidationPolicy::default())
    }

    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            validator: Validator::with_policy(policy),
        }
    }

    pub fn build(&self, spec: &ProjectSpec) -> Result<Normalized, Vec<Finding>> {
        let findings = self.validator.validate(spec);
        if findings.iter().any(Finding::is_fatal) {
            return Err(findings);
        }

        debug!(
            "Validation clean ({} warnings), building normalized model",
            findings.len()
        );

        // Zero fatal findings guarantee the MECE pairing and every state
        // reference below resolve.
        let system = SystemClass::from_parts(spec.system_type, spec.system_sub_type)
            .expect("type/subtype pairing was validated");

        let domains: Vec<Domain> = spec.domains.iter().map(build_domain).collect();

        let mut domain_index = HashMap::new();
        let mut entity_index = HashMap::new();
        for (di, domain) in domains.iter().enumerate() {
            domain_index.insert(domain.name.clone(), di);
            for (ei, entity) in domain.entities.iter().enumerate() {
                entity_index.insert(entity.name.clone(), (di, ei));
            }
        }

        let project = NormalizedProject {
            name: spec.project_name.clone(),
            description: spec.project_description.clone(),
            system,
            deployment: spec.deployment,
            state_complexity: spec.state_complexity,
            multi_tenancy: spec.multi_tenancy,
            compliance_level: spec.compliance_level,
            domains,
            tech_stack: spec.tech_stack.clone(),
            quick_commands: spec.quick_commands.clone(),
            boundary_layers: spec.boundary_layers.clone().unwrap_or_default(),
            compliance: spec.compliance.clone(),
            value_objects: spec.value_objects.clone().unwrap_or_default(),
            checklist: spec.custom_checklist.clone().unwrap_or_default(),
            domain_index,
            entity_index,
        };

        Ok(Normalized {
            project,
            warnings: findings,
        })
    }
}

impl Default for NormalizedModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn build_domain(domain: &DomainSpec) -> Domain {
    Domain {
        label: domain.japanese_name.clone(),
        name: domain.english_name.clone(),
        subdomains: domain
            .subdomains
            .iter()
            .map(|s| Subdomain {
                label: s.japanese_name.clone(),
                name: s.english_name.clone(),
                description: s.description.clone(),
            })
            .collect(),
        entities: domain.entities.iter().map(build_entity).collect(),
    }
}

fn build_entity(entity: &EntitySpec) -> Entity {
    let machine = entity.has_state_transition.then(|| {
        let states: Vec<State> = entity
            .states()
            .iter()
            .map(|s| State {
                label: s.japanese_name.clone(),
                name: s.english_name.clone(),
                description: s.description.clone(),
            })
            .collect();

        let ids: HashMap<&str, StateId> = states
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.as_str(), StateId(i)))
            .collect();

        let transitions: Vec<Transition> = entity
            .transitions()
            .iter()
            .map(|t| Transition {
                from: ids[t.from.as_str()],
                to: ids[t.to.as_str()],
                action: t.action.clone(),
                command_class: t.command_class.clone(),
            })
            .collect();

        StateMachine::new(states, transitions)
    });

    Entity {
        label: entity.japanese_name.clone(),
        name: entity.english_name.clone(),
        machine,
    }
}
