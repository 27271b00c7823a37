use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ProjectSpec;

use super::finding::{Finding, FindingKind};

/// ASCII letters/digits/underscore/hyphen, not starting with a digit.
/// These names become directory and class names downstream.
static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("valid identifier regex"));

/// Checks every english name used as a directory or class name.
pub struct IdentifierValidator;

impl IdentifierValidator {
    pub fn validate(spec: &ProjectSpec) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (di, domain) in spec.domains.iter().enumerate() {
            check(
                &mut findings,
                &domain.english_name,
                format!("domains[{di}].englishName"),
            );

            for (si, subdomain) in domain.subdomains.iter().enumerate() {
                check(
                    &mut findings,
                    &subdomain.english_name,
                    format!("domains[{di}].subdomains[{si}].englishName"),
                );
            }

            for (ei, entity) in domain.entities.iter().enumerate() {
                check(
                    &mut findings,
                    &entity.english_name,
                    format!("domains[{di}].entities[{ei}].englishName"),
                );

                for (sti, state) in entity.states().iter().enumerate() {
                    check(
                        &mut findings,
                        &state.english_name,
                        format!("domains[{di}].entities[{ei}].states[{sti}].englishName"),
                    );
                }
            }
        }

        findings
    }
}

fn check(findings: &mut Vec<Finding>, name: &str, path: String) {
    if name.is_empty() {
        findings.push(Finding::fatal(
            path,
            FindingKind::Naming,
            "english name must not be empty",
        ));
    } else if !IDENTIFIER_RE.is_match(name) {
        findings.push(Finding::fatal(
            path,
            FindingKind::Naming,
            format!(
                "'{name}' is not a valid identifier (ASCII letters, digits, underscore or hyphen; must not start with a digit)"
            ),
        ));
    }
}
