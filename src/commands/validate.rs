use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use guidegen::loader::SpecLoader;
use guidegen::validation::{Finding, Severity, ValidationPolicy, Validator};

pub fn validate_command(file: &Path, policy: ValidationPolicy) -> Result<()> {
    println!("Validating project spec: {}", file.display());

    let spec = SpecLoader::new().load(file)?;
    let findings = Validator::with_policy(policy).validate(&spec);

    if findings.is_empty() {
        println!("\n✅ All validations passed!");
        return Ok(());
    }

    println!();
    for finding in &findings {
        print_finding(finding);
    }

    let fatal_count = findings.iter().filter(|f| f.is_fatal()).count();
    let warning_count = findings.len() - fatal_count;

    if fatal_count > 0 {
        anyhow::bail!("{fatal_count} fatal finding(s), {warning_count} warning(s)");
    }

    println!(
        "\n✅ No fatal findings ({} warning{})",
        warning_count,
        if warning_count == 1 { "" } else { "s" }
    );
    Ok(())
}

pub fn print_finding(finding: &Finding) {
    let severity = match finding.severity {
        Severity::Fatal => "fatal".red().bold(),
        Severity::Warning => "warning".yellow().bold(),
    };
    println!(
        "  {severity} [{}] {}: {}",
        finding.kind,
        finding.path.cyan(),
        finding.message
    );
}
