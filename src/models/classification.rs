use serde::{Deserialize, Serialize};

/// Primary system classification (MECE: exactly one per project).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemType {
    RequestResponse,
    EventDriven,
    Stateful,
    Library,
    DataIntensive,
}

/// Every subtype string accepted in the raw document, across all system
/// types. The pairing rules live in [`SystemClass::from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemSubType {
    // request-response
    WebApp,
    RestApi,
    GraphqlApi,
    Cli,
    Serverless,
    // event-driven
    MessageConsumer,
    WebhookHandler,
    ScheduledJob,
    StreamProcessor,
    // stateful
    DocumentEditor,
    WorkflowBuilder,
    Dashboard,
    FormBuilder,
    // library
    Utility,
    UiComponent,
    Sdk,
    Framework,
    // data-intensive
    CrudApp,
    EtlPipeline,
    SearchSystem,
    Reporting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentModel {
    Monolith,
    ModularMonolith,
    Microservices,
    Serverless,
    Edge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateComplexity {
    Stateless,
    Session,
    Workflow,
    EventSourced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MultiTenancy {
    SingleTenant,
    Logical,
    Physical,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceLevel {
    Standard,
    Regulated,
    HighSecurity,
}

impl SystemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemType::RequestResponse => "request-response",
            SystemType::EventDriven => "event-driven",
            SystemType::Stateful => "stateful",
            SystemType::Library => "library",
            SystemType::DataIntensive => "data-intensive",
        }
    }

    /// The closed subtype set for this system type.
    pub fn allowed_subtypes(&self) -> &'static [SystemSubType] {
        use SystemSubType::*;
        match self {
            SystemType::RequestResponse => &[WebApp, RestApi, GraphqlApi, Cli, Serverless],
            SystemType::EventDriven => {
                &[MessageConsumer, WebhookHandler, ScheduledJob, StreamProcessor]
            }
            SystemType::Stateful => &[DocumentEditor, WorkflowBuilder, Dashboard, FormBuilder],
            SystemType::Library => &[Utility, UiComponent, Sdk, Framework],
            SystemType::DataIntensive => &[CrudApp, EtlPipeline, SearchSystem, Reporting],
        }
    }
}

impl SystemSubType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemSubType::WebApp => "web-app",
            SystemSubType::RestApi => "rest-api",
            SystemSubType::GraphqlApi => "graphql-api",
            SystemSubType::Cli => "cli",
            SystemSubType::Serverless => "serverless",
            SystemSubType::MessageConsumer => "message-consumer",
            SystemSubType::WebhookHandler => "webhook-handler",
            SystemSubType::ScheduledJob => "scheduled-job",
            SystemSubType::StreamProcessor => "stream-processor",
            SystemSubType::DocumentEditor => "document-editor",
            SystemSubType::WorkflowBuilder => "workflow-builder",
            SystemSubType::Dashboard => "dashboard",
            SystemSubType::FormBuilder => "form-builder",
            SystemSubType::Utility => "utility",
            SystemSubType::UiComponent => "ui-component",
            SystemSubType::Sdk => "sdk",
            SystemSubType::Framework => "framework",
            SystemSubType::CrudApp => "crud-app",
            SystemSubType::EtlPipeline => "etl-pipeline",
            SystemSubType::SearchSystem => "search-system",
            SystemSubType::Reporting => "reporting",
        }
    }
}

impl std::fmt::Display for SystemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for SystemSubType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestResponseKind {
    WebApp,
    RestApi,
    GraphqlApi,
    Cli,
    Serverless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventDrivenKind {
    MessageConsumer,
    WebhookHandler,
    ScheduledJob,
    StreamProcessor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatefulKind {
    DocumentEditor,
    WorkflowBuilder,
    Dashboard,
    FormBuilder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LibraryKind {
    Utility,
    UiComponent,
    Sdk,
    Framework,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataIntensiveKind {
    CrudApp,
    EtlPipeline,
    SearchSystem,
    Reporting,
}

/// The validated type/subtype pairing. Each variant carries its own closed
/// subtype enum, so an unsupported pairing cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type", content = "subtype")]
pub enum SystemClass {
    RequestResponse(RequestResponseKind),
    EventDriven(EventDrivenKind),
    Stateful(StatefulKind),
    Library(LibraryKind),
    DataIntensive(DataIntensiveKind),
}

impl SystemClass {
    /// Pair a raw type with a raw subtype. Returns `None` when the subtype
    /// belongs to a different system type (the MECE violation).
    pub fn from_parts(system_type: SystemType, sub_type: SystemSubType) -> Option<Self> {
        use SystemSubType as S;
        match (system_type, sub_type) {
            (SystemType::RequestResponse, S::WebApp) => {
                Some(SystemClass::RequestResponse(RequestResponseKind::WebApp))
            }
            (SystemType::RequestResponse, S::RestApi) => {
                Some(SystemClass::RequestResponse(RequestResponseKind::RestApi))
            }
            (SystemType::RequestResponse, S::GraphqlApi) => {
                Some(SystemClass::RequestResponse(RequestResponseKind::GraphqlApi))
            }
            (SystemType::RequestResponse, S::Cli) => {
                Some(SystemClass::RequestResponse(RequestResponseKind::Cli))
            }
            (SystemType::RequestResponse, S::Serverless) => {
                Some(SystemClass::RequestResponse(RequestResponseKind::Serverless))
            }
            (SystemType::EventDriven, S::MessageConsumer) => {
                Some(SystemClass::EventDriven(EventDrivenKind::MessageConsumer))
            }
            (SystemType::EventDriven, S::WebhookHandler) => {
                Some(SystemClass::EventDriven(EventDrivenKind::WebhookHandler))
            }
            (SystemType::EventDriven, S::ScheduledJob) => {
                Some(SystemClass::EventDriven(EventDrivenKind::ScheduledJob))
            }
            (SystemType::EventDriven, S::StreamProcessor) => {
                Some(SystemClass::EventDriven(EventDrivenKind::StreamProcessor))
            }
            (SystemType::Stateful, S::DocumentEditor) => {
                Some(SystemClass::Stateful(StatefulKind::DocumentEditor))
            }
            (SystemType::Stateful, S::WorkflowBuilder) => {
                Some(SystemClass::Stateful(StatefulKind::WorkflowBuilder))
            }
            (SystemType::Stateful, S::Dashboard) => {
                Some(SystemClass::Stateful(StatefulKind::Dashboard))
            }
            (SystemType::Stateful, S::FormBuilder) => {
                Some(SystemClass::Stateful(StatefulKind::FormBuilder))
            }
            (SystemType::Library, S::Utility) => Some(SystemClass::Library(LibraryKind::Utility)),
            (SystemType::Library, S::UiComponent) => {
                Some(SystemClass::Library(LibraryKind::UiComponent))
            }
            (SystemType::Library, S::Sdk) => Some(SystemClass::Library(LibraryKind::Sdk)),
            (SystemType::Library, S::Framework) => {
                Some(SystemClass::Library(LibraryKind::Framework))
            }
            (SystemType::DataIntensive, S::CrudApp) => {
                Some(SystemClass::DataIntensive(DataIntensiveKind::CrudApp))
            }
            (SystemType::DataIntensive, S::EtlPipeline) => {
                Some(SystemClass::DataIntensive(DataIntensiveKind::EtlPipeline))
            }
            (SystemType::DataIntensive, S::SearchSystem) => {
                Some(SystemClass::DataIntensive(DataIntensiveKind::SearchSystem))
            }
            (SystemType::DataIntensive, S::Reporting) => {
                Some(SystemClass::DataIntensive(DataIntensiveKind::Reporting))
            }
            _ => None,
        }
    }

    pub fn system_type(&self) -> SystemType {
        match self {
            SystemClass::RequestResponse(_) => SystemType::RequestResponse,
            SystemClass::EventDriven(_) => SystemType::EventDriven,
            SystemClass::Stateful(_) => SystemType::Stateful,
            SystemClass::Library(_) => SystemType::Library,
            SystemClass::DataIntensive(_) => SystemType::DataIntensive,
        }
    }
}
