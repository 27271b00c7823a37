use anyhow::Result;
use std::path::Path;

use guidegen::loader::SpecLoader;
use guidegen::normalize::NormalizedModelBuilder;
use guidegen::validation::ValidationPolicy;

use super::validate::print_finding;

pub fn inspect_command(file: &Path, normalized: bool, policy: ValidationPolicy) -> Result<()> {
    let spec = SpecLoader::new().load(file)?;

    if !normalized {
        println!("{spec:#?}");
        return Ok(());
    }

    match NormalizedModelBuilder::with_policy(policy).build(&spec) {
        Ok(result) => {
            for warning in &result.warnings {
                print_finding(warning);
            }
            println!("{:#?}", result.project);
            Ok(())
        }
        Err(findings) => {
            println!();
            for finding in &findings {
                print_finding(finding);
            }
            anyhow::bail!("Cannot normalize: document has fatal findings");
        }
    }
}
