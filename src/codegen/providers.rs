//! Provider block generation

use crate::cluster::errors::GenerationError;
use crate::cluster::infrastructure::{Infrastructure, Provider};
use crate::codegen::document::{Block, Document, Value};

/// Returns the Terraform provider key for a backend.
///
/// Validation already restricts providers to the supported set; the error
/// arm guards against a provider variant added to the model without a
/// lowering counterpart.
pub(crate) fn provider_key(infra: &Infrastructure) -> Result<&'static str, GenerationError> {
    match infra.provider {
        Provider::Aws => Ok("aws"),
        #[allow(unreachable_patterns)]
        other => Err(GenerationError::UnsupportedProvider {
            id: infra.id.to_string(),
            provider: other.to_string(),
        }),
    }
}

/// Appends one aliased provider block per infrastructure backend, in
/// declaration order.
pub(crate) fn append(doc: &mut Document, infrastructure: &[Infrastructure]) -> Result<(), GenerationError> {
    for infra in infrastructure {
        let key = provider_key(infra)?;
        let mut block = Block::new("provider").label(key);
        block.set_attribute("region", Value::string(infra.region.as_str()));
        block.set_attribute("alias", Value::string(infra.id.as_str()));
        doc.push(block);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::infrastructure::InfrastructureKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_block_per_backend_in_order() {
        let backends = vec![
            Infrastructure {
                id: "i1".into(),
                kind: InfrastructureKind::Vm,
                provider: Provider::Aws,
                region: "us-west-2".into(),
            },
            Infrastructure {
                id: "i2".into(),
                kind: InfrastructureKind::Vm,
                provider: Provider::Aws,
                region: "eu-west-1".into(),
            },
        ];
        let mut doc = Document::new();
        append(&mut doc, &backends).unwrap();
        assert_eq!(
            doc.to_hcl(),
            "provider \"aws\" {\n  region = \"us-west-2\"\n  alias = \"i1\"\n}\n\n\
             provider \"aws\" {\n  region = \"eu-west-1\"\n  alias = \"i2\"\n}\n"
        );
    }
}
