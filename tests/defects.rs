use guidegen::models::{ProjectSpec, SystemSubType, SystemType, TransitionSpec};
use guidegen::normalize::NormalizedModelBuilder;
use guidegen::validation::{FindingKind, Validator};

fn load(fixture: &str) -> ProjectSpec {
    let path = format!("{}/tests/fixtures/{fixture}", env!("CARGO_MANIFEST_DIR"));
    let content = std::fs::read_to_string(&path).unwrap();
    ProjectSpec::from_yaml(&content).unwrap()
}

fn payment_with_extra_transition(from: &str, to: &str, action: &str) -> ProjectSpec {
    let mut spec = load("payment_api.yml");
    spec.domains[0].entities[0]
        .transitions
        .as_mut()
        .unwrap()
        .push(TransitionSpec {
            from: from.to_string(),
            to: to.to_string(),
            action: action.to_string(),
            command_class: None,
        });
    spec
}

#[test]
fn dangling_transition_target_is_reported_once_at_its_path() {
    let spec = payment_with_extra_transition("Captured", "Cancelled", "cancel");

    let findings = Validator::new().validate(&spec);
    let fatals: Vec<_> = findings.iter().filter(|f| f.is_fatal()).collect();
    assert_eq!(fatals.len(), 1);
    assert_eq!(fatals[0].kind, FindingKind::ReferentialIntegrity);
    assert_eq!(fatals[0].path, "domains[0].entities[0].transitions[4].to");
}

#[test]
fn duplicate_from_action_pair_is_reported_once() {
    // A second (Pending, authorize) with a different target
    let spec = payment_with_extra_transition("Pending", "Voided", "authorize");

    let findings = Validator::new().validate(&spec);
    let fatals: Vec<_> = findings.iter().filter(|f| f.is_fatal()).collect();
    assert_eq!(fatals.len(), 1);
    assert_eq!(fatals[0].kind, FindingKind::StateMachine);
    assert_eq!(fatals[0].path, "domains[0].entities[0].transitions[4]");
}

#[test]
fn mece_mismatch_on_fixture_is_one_fatal_consistency_error() {
    let mut spec = load("validation_library.yml");
    spec.system_type = SystemType::Library;
    spec.system_sub_type = SystemSubType::RestApi;

    let findings = Validator::new().validate(&spec);
    let fatals: Vec<_> = findings.iter().filter(|f| f.is_fatal()).collect();
    assert_eq!(fatals.len(), 1);
    assert_eq!(fatals[0].kind, FindingKind::Consistency);
    assert_eq!(fatals[0].path, "systemSubType");
}

#[test]
fn duplicate_entity_name_across_domains_is_fatal() {
    let mut spec = load("financial_crm.yml");
    // Second domain gains an entity named like the first domain's Customer
    let copy = spec.domains[0].entities[0].clone();
    spec.domains[1].entities.push(copy);

    let findings = Validator::new().validate(&spec);
    let fatals: Vec<_> = findings.iter().filter(|f| f.is_fatal()).collect();
    assert_eq!(fatals.len(), 1);
    assert_eq!(fatals[0].kind, FindingKind::ReferentialIntegrity);
    assert_eq!(fatals[0].path, "domains[1].entities[1].englishName");
}

#[test]
fn state_flag_pairing_is_enforced_both_ways() {
    let mut spec = load("financial_crm.yml");

    // Deal keeps its states but drops the flag
    spec.domains[1].entities[0].has_state_transition = false;
    let findings = Validator::new().validate(&spec);
    assert!(
        findings
            .iter()
            .any(|f| f.kind == FindingKind::Structural && f.is_fatal())
    );

    // Customer claims a machine it does not declare
    let mut spec = load("financial_crm.yml");
    spec.domains[0].entities[0].has_state_transition = true;
    let findings = Validator::new().validate(&spec);
    assert!(
        findings
            .iter()
            .any(|f| f.kind == FindingKind::Structural && f.is_fatal())
    );
}

#[test]
fn normalization_refuses_documents_with_fatal_findings() {
    let spec = payment_with_extra_transition("Captured", "Cancelled", "cancel");

    let result = NormalizedModelBuilder::new().build(&spec);
    let findings = result.err().expect("normalization must fail");
    assert!(findings.iter().any(|f| f.is_fatal()));
}

#[test]
fn finding_lists_are_identical_across_runs() {
    let mut spec = payment_with_extra_transition("Captured", "Cancelled", "cancel");
    spec.system_sub_type = SystemSubType::Utility;

    let validator = Validator::new();
    let first = validator.validate(&spec);
    let second = validator.validate(&spec);
    assert_eq!(first, second);
    assert!(first.len() >= 2);
}
