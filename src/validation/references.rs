use std::collections::HashMap;

use crate::models::ProjectSpec;

use super::finding::{Finding, FindingKind};

/// Document-wide reference and uniqueness checks. Transition endpoints are
/// covered per-entity by the state machine validator; everything here
/// requires a single global pass.
pub struct ReferentialIntegrityChecker;

impl ReferentialIntegrityChecker {
    pub fn validate(spec: &ProjectSpec) -> Vec<Finding> {
        let mut findings = Vec::new();

        // Domain and entity english names become directory names
        // downstream, so they must be unique across the whole document.
        let mut domain_names: HashMap<&str, String> = HashMap::new();
        let mut entity_names: HashMap<&str, String> = HashMap::new();

        for (di, domain) in spec.domains.iter().enumerate() {
            let domain_path = format!("domains[{di}].englishName");
            if let Some(first) = domain_names.get(domain.english_name.as_str()) {
                findings.push(Finding::fatal(
                    domain_path,
                    FindingKind::ReferentialIntegrity,
                    format!(
                        "duplicate domain name '{}' (first declared at {first})",
                        domain.english_name
                    ),
                ));
            } else {
                domain_names.insert(&domain.english_name, domain_path);
            }

            let mut subdomain_names: HashMap<&str, usize> = HashMap::new();
            for (si, subdomain) in domain.subdomains.iter().enumerate() {
                if let Some(first) = subdomain_names.get(subdomain.english_name.as_str()) {
                    findings.push(Finding::fatal(
                        format!("domains[{di}].subdomains[{si}].englishName"),
                        FindingKind::ReferentialIntegrity,
                        format!(
                            "duplicate subdomain name '{}' within domain '{}' (first declared at subdomains[{first}])",
                            subdomain.english_name, domain.english_name
                        ),
                    ));
                } else {
                    subdomain_names.insert(&subdomain.english_name, si);
                }
            }

            for (ei, entity) in domain.entities.iter().enumerate() {
                let entity_path = format!("domains[{di}].entities[{ei}].englishName");
                if let Some(first) = entity_names.get(entity.english_name.as_str()) {
                    findings.push(Finding::fatal(
                        entity_path,
                        FindingKind::ReferentialIntegrity,
                        format!(
                            "duplicate entity name '{}' (first declared at {first})",
                            entity.english_name
                        ),
                    ));
                } else {
                    entity_names.insert(&entity.english_name, entity_path);
                }

                let mut state_names: HashMap<&str, usize> = HashMap::new();
                for (sti, state) in entity.states().iter().enumerate() {
                    if let Some(first) = state_names.get(state.english_name.as_str()) {
                        findings.push(Finding::fatal(
                            format!("domains[{di}].entities[{ei}].states[{sti}].englishName"),
                            FindingKind::ReferentialIntegrity,
                            format!(
                                "duplicate state name '{}' within entity '{}' (first declared at states[{first}])",
                                state.english_name, entity.english_name
                            ),
                        ));
                    } else {
                        state_names.insert(&state.english_name, sti);
                    }
                }
            }
        }

        if let Some(isolation) = spec
            .compliance
            .as_ref()
            .and_then(|c| c.tenant_isolation.as_ref())
            && isolation.isolation_key.trim().is_empty()
        {
            findings.push(Finding::fatal(
                "compliance.tenantIsolation.isolationKey",
                FindingKind::ReferentialIntegrity,
                "isolationKey must name the tenant-scoping field and cannot be empty",
            ));
        }

        if let Some(checklist) = &spec.custom_checklist {
            for (ci, section) in checklist.iter().enumerate() {
                if section.items.is_empty() {
                    findings.push(Finding::fatal(
                        format!("customChecklist[{ci}].items"),
                        FindingKind::ReferentialIntegrity,
                        format!("checklist category '{}' has no items", section.category),
                    ));
                }
            }
        }

        findings
    }
}
