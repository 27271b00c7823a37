mod aggregator;
mod consistency;
mod finding;
mod identifier;
mod references;
mod state_machine;
mod structural;
mod validator;


pub use finding::{Finding, FindingKind, Severity};
pub use validator::{ValidationPolicy, Validator};
