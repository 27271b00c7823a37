use super::*;

#[test]
fn parses_financial_crm_fixture() {
    let spec =
        ProjectSpec::from_yaml(include_str!("../../tests/fixtures/financial_crm.yml")).unwrap();

    assert_eq!(spec.system_type, SystemType::DataIntensive);
    assert_eq!(spec.system_sub_type, SystemSubType::CrudApp);
    assert_eq!(spec.multi_tenancy, MultiTenancy::Logical);
    assert_eq!(spec.domains.len(), 2);
    assert_eq!(spec.entity_count(), 3);

    let deal = &spec.domains[1].entities[0];
    assert!(deal.has_state_transition);
    assert_eq!(deal.states().len(), 6);
    assert_eq!(deal.transitions().len(), 5);
    assert_eq!(deal.transitions()[0].command_class.as_deref(), Some("DraftDeal"));
}

#[test]
fn parses_order_worker_fixture() {
    let spec =
        ProjectSpec::from_yaml(include_str!("../../tests/fixtures/order_worker.yml")).unwrap();

    assert_eq!(spec.system_type, SystemType::EventDriven);
    let stack = spec.tech_stack.unwrap();
    assert_eq!(stack.message_queue, Some(MessageQueue::Sqs));
    // Second domain has subdomains but no entities
    assert!(spec.domains[1].entities.is_empty());
}

#[test]
fn rejects_unknown_fields() {
    let yaml = r#"
projectName: x
projectDescription: y
systemType: library
systemSubType: utility
deployment: monolith
stateComplexity: stateless
multiTenancy: single-tenant
complianceLevel: standard
domains: []
unexpectedField: true
"#;
    assert!(ProjectSpec::from_yaml(yaml).is_err());
}

#[test]
fn rejects_unknown_enum_values() {
    let yaml = r#"
projectName: x
projectDescription: y
systemType: peer-to-peer
systemSubType: utility
deployment: monolith
stateComplexity: stateless
multiTenancy: single-tenant
complianceLevel: standard
domains: []
"#;
    assert!(ProjectSpec::from_yaml(yaml).is_err());
}

#[test]
fn system_class_pairs_every_declared_subtype() {
    use SystemType::*;
    for system_type in [RequestResponse, EventDriven, Stateful, Library, DataIntensive] {
        for sub in system_type.allowed_subtypes() {
            let class = SystemClass::from_parts(system_type, *sub)
                .unwrap_or_else(|| panic!("{system_type}/{sub} should pair"));
            assert_eq!(class.system_type(), system_type);
        }
    }
}

#[test]
fn system_class_rejects_cross_type_pairing() {
    assert!(SystemClass::from_parts(SystemType::Library, SystemSubType::RestApi).is_none());
    assert!(
        SystemClass::from_parts(SystemType::RequestResponse, SystemSubType::MessageConsumer)
            .is_none()
    );
}

#[test]
fn compliance_pii_field_uses_original_casing() {
    let yaml = r#"
requiresAuditLog: true
hasPII: true
hasFinancialData: false
"#;
    let compliance: ComplianceRequirements = serde_yaml::from_str(yaml).unwrap();
    assert!(compliance.has_pii);
    assert!(compliance.regulatory_frameworks.is_none());
}
