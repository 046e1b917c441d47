//! Constant templates for the generated files.
//!
//! These are fixed text blobs parameterized only by the target namespace;
//! the rendered tree from [`super::emit`] is spliced into the references
//! file. Everything carries a `@generated` marker.

/// Assemble the asset references file: header, then the rendered tree
/// wrapped in the namespace module.
pub fn references_file(namespace: &str, body: &str) -> String {
    let module = if body.is_empty() {
        format!("pub mod {namespace} {{}}")
    } else {
        format!("pub mod {namespace} {{\n{body}\n}}")
    };

    format!(
        r#"//! Asset references.
//!
//! @generated by assetref - do not edit by hand.

#![allow(non_snake_case)]
#![allow(clippy::all)]

{module}
"#
    )
}

/// Capability trait implemented by shader parameter blocks.
pub fn shader_params_file(namespace: &str) -> String {
    format!(
        r#"//! Shader parameter capability for `{namespace}`.
//!
//! @generated by assetref - do not edit by hand.

/// Parameter block a shader pass consumes before it runs.
pub trait ShaderParams {{
    /// Upload parameter values through `set`, keyed by uniform name.
    fn apply(&self, set: &mut dyn FnMut(&str, &[f32]));
}}
"#
    )
}

/// Wrapper binding a shader pass to a typed parameter block.
pub fn shader_wrapper_file(namespace: &str) -> String {
    format!(
        r#"//! Shader wrapper for `{namespace}`.
//!
//! @generated by assetref - do not edit by hand.

use super::shader_params::ShaderParams;

/// A shader pass bound to a typed parameter block.
pub struct WrappedShader<P: ShaderParams + Default> {{
    pub pass: &'static str,
    pub params: P,
}}

impl<P: ShaderParams + Default> WrappedShader<P> {{
    pub fn new(pass: &'static str) -> Self {{
        Self {{
            pass,
            params: P::default(),
        }}
    }}

    /// Apply the parameter block, then hand the pass name back to the caller.
    pub fn apply(&self, set: &mut dyn FnMut(&str, &[f32])) -> &'static str {{
        self.params.apply(set);
        self.pass
    }}
}}
"#
    )
}
