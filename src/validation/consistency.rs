use crate::models::{ComplianceLevel, MultiTenancy, ProjectSpec, SystemClass, SystemType};

use super::finding::{Finding, FindingKind};

/// Cross-field rules spanning more than one sub-tree of the document.
pub struct CrossFieldConsistencyValidator;

impl CrossFieldConsistencyValidator {
    pub fn validate(spec: &ProjectSpec) -> Vec<Finding> {
        let mut findings = Vec::new();

        check_system_class(spec, &mut findings);
        check_tenancy(spec, &mut findings);
        check_compliance_level(spec, &mut findings);
        check_tech_stack(spec, &mut findings);

        findings
    }
}

fn check_system_class(spec: &ProjectSpec, findings: &mut Vec<Finding>) {
    if SystemClass::from_parts(spec.system_type, spec.system_sub_type).is_none() {
        let allowed: Vec<&str> = spec
            .system_type
            .allowed_subtypes()
            .iter()
            .map(|s| s.as_str())
            .collect();
        findings.push(Finding::fatal(
            "systemSubType",
            FindingKind::Consistency,
            format!(
                "'{}' is not a subtype of '{}' (expected one of: {})",
                spec.system_sub_type,
                spec.system_type,
                allowed.join(", ")
            ),
        ));
    }
}

fn check_tenancy(spec: &ProjectSpec, findings: &mut Vec<Finding>) {
    let multi_tenant = spec.multi_tenancy != MultiTenancy::SingleTenant;
    let isolation = spec
        .compliance
        .as_ref()
        .and_then(|c| c.tenant_isolation.as_ref());

    match (multi_tenant, isolation) {
        (true, None) => {
            findings.push(Finding::warning(
                "compliance.tenantIsolation",
                FindingKind::Consistency,
                "multi-tenant system declares no tenant isolation strategy",
            ));
        }
        (_, Some(isolation)) if isolation.kind != spec.multi_tenancy => {
            // Inferred rule: the isolation block restates the tenancy
            // model, so a disagreement is suspicious but not fatal.
            findings.push(Finding::warning(
                "compliance.tenantIsolation.type",
                FindingKind::Consistency,
                "tenantIsolation.type disagrees with the root multiTenancy value",
            ));
        }
        _ => {}
    }
}

fn check_compliance_level(spec: &ProjectSpec, findings: &mut Vec<Finding>) {
    let elevated = matches!(
        spec.compliance_level,
        ComplianceLevel::Regulated | ComplianceLevel::HighSecurity
    );
    if !elevated {
        return;
    }

    match &spec.compliance {
        None => {
            findings.push(Finding::warning(
                "compliance",
                FindingKind::Consistency,
                format!(
                    "complianceLevel is '{}' but no compliance requirements are declared",
                    level_str(spec.compliance_level)
                ),
            ));
        }
        Some(compliance) => {
            if !compliance.requires_audit_log
                && !compliance.has_pii
                && !compliance.has_financial_data
            {
                findings.push(Finding::warning(
                    "compliance",
                    FindingKind::Consistency,
                    "elevated compliance level but requiresAuditLog, hasPII and hasFinancialData are all false",
                ));
            }

            let frameworks_empty = compliance
                .regulatory_frameworks
                .as_ref()
                .is_none_or(|f| f.is_empty());
            if compliance.has_financial_data && frameworks_empty {
                findings.push(Finding::warning(
                    "compliance.regulatoryFrameworks",
                    FindingKind::Consistency,
                    "financial data is handled but no regulatory frameworks are listed",
                ));
            }
        }
    }
}

fn check_tech_stack(spec: &ProjectSpec, findings: &mut Vec<Finding>) {
    // Enum membership for language/packageManager/messageQueue is enforced
    // at the serde boundary; what remains is the coupling to systemType.
    let Some(stack) = &spec.tech_stack else {
        return;
    };

    if stack.message_queue.is_some() && spec.system_type != SystemType::EventDriven {
        findings.push(Finding::warning(
            "techStack.messageQueue",
            FindingKind::Consistency,
            format!(
                "a message queue is declared but systemType is '{}'; queues are expected for event-driven systems",
                spec.system_type
            ),
        ));
    }
}

fn level_str(level: ComplianceLevel) -> &'static str {
    match level {
        ComplianceLevel::Standard => "standard",
        ComplianceLevel::Regulated => "regulated",
        ComplianceLevel::HighSecurity => "high-security",
    }
}
