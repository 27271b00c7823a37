pub mod classification;
pub mod spec;

// Re-export commonly used types
pub use classification::{
    ComplianceLevel, DeploymentModel, MultiTenancy, StateComplexity, SystemClass, SystemSubType,
    SystemType,
};
pub use spec::{
    BoundaryLayerDefinition, BoundaryLayerKind, ChecklistSection, ComplianceRequirements,
    DomainSpec, EntitySpec, Language, MessageQueue, PackageManager, ProjectSpec, QuickCommands,
    StateSpec, SubdomainSpec, TechStackDefinition, TenantIsolation, TransitionSpec,
};

#[cfg(test)]
mod tests;
