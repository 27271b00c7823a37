use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::classification::{
    ComplianceLevel, DeploymentModel, MultiTenancy, StateComplexity, SystemSubType, SystemType,
};

/// The raw input document: a project's domain model, system classification
/// and compliance posture, as authored in YAML or JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectSpec {
    pub project_name: String,

    /// One-sentence project description.
    pub project_description: String,

    pub system_type: SystemType,

    pub system_sub_type: SystemSubType,

    pub domains: Vec<DomainSpec>,

    pub deployment: DeploymentModel,

    pub state_complexity: StateComplexity,

    pub multi_tenancy: MultiTenancy,

    pub compliance_level: ComplianceLevel,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<TechStackDefinition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_commands: Option<QuickCommands>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_layers: Option<Vec<BoundaryLayerDefinition>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance: Option<ComplianceRequirements>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_objects: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_checklist: Option<Vec<ChecklistSection>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DomainSpec {
    /// Display label, any language (e.g. "顧客管理").
    pub japanese_name: String,

    /// Identifier-safe name, used downstream as a directory name.
    pub english_name: String,

    pub subdomains: Vec<SubdomainSpec>,

    pub entities: Vec<EntitySpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SubdomainSpec {
    pub japanese_name: String,

    /// Identifier-safe name, used downstream as a directory name.
    pub english_name: String,

    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntitySpec {
    pub japanese_name: String,

    /// Identifier-safe name, used downstream as a class name.
    pub english_name: String,

    pub has_state_transition: bool,

    /// Required (with at least two entries) when `has_state_transition` is
    /// true, must be absent or empty otherwise. The structural validator
    /// enforces the pairing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<StateSpec>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<Vec<TransitionSpec>>,
}

impl EntitySpec {
    pub fn states(&self) -> &[StateSpec] {
        self.states.as_deref().unwrap_or_default()
    }

    pub fn transitions(&self) -> &[TransitionSpec] {
        self.transitions.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StateSpec {
    pub japanese_name: String,

    pub english_name: String,

    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransitionSpec {
    /// Source state, by english name.
    pub from: String,

    /// Target state, by english name. Self-loops are allowed.
    pub to: String,

    /// Verb-like action label (e.g. "submit", "approve").
    pub action: String,

    /// Command class handling this transition (e.g. "PendingDeal").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_class: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    Typescript,
    Java,
    Kotlin,
    Python,
    Go,
    Rust,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Gradle,
    Maven,
    Pip,
    Cargo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageQueue {
    Sqs,
    Rabbitmq,
    Kafka,
    Redis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TechStackDefinition {
    pub language: Language,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<PackageManager>,

    /// Expected for event-driven systems only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_queue: Option<MessageQueue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuickCommands {
    pub dev: String,

    pub test: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_unit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_integration: Option<String>,

    pub lint: String,

    pub typecheck: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_migrate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryLayerKind {
    Controller,
    Handler,
    Resolver,
    Mapper,
    Middleware,
    Consumer,
    Publisher,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BoundaryLayerDefinition {
    #[serde(rename = "type")]
    pub kind: BoundaryLayerKind,

    /// Naming pattern, e.g. "{Resource}Controller".
    pub naming_pattern: String,

    pub responsibility: String,

    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ComplianceRequirements {
    pub requires_audit_log: bool,

    #[serde(rename = "hasPII")]
    pub has_pii: bool,

    pub has_financial_data: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulatory_frameworks: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_isolation: Option<TenantIsolation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TenantIsolation {
    #[serde(rename = "type")]
    pub kind: MultiTenancy,

    /// Field that scopes data per tenant at runtime, e.g. "branchId".
    /// Names an external field that is not modeled here.
    pub isolation_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChecklistSection {
    pub category: String,

    pub items: Vec<String>,
}

impl ProjectSpec {
    /// Parse a spec from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Parse a spec from JSON content.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Total number of entities across all domains.
    pub fn entity_count(&self) -> usize {
        self.domains.iter().map(|d| d.entities.len()).sum()
    }
}
