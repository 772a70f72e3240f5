//! # Animation Module
//!
//! Animator parameter descriptions and lookups.

use crate::ToolkitResult;
use serde::{Deserialize, Serialize};

/// Kind of value an animator parameter holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Float,
    Int,
    Bool,
    Trigger,
}

/// A named parameter exposed by an animator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimatorParameter {
    pub name: String,
    pub kind: ParameterKind,
}

impl AnimatorParameter {
    /// Creates a new parameter.
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// An animator's exposed parameter list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animator {
    pub parameters: Vec<AnimatorParameter>,
}

impl Animator {
    /// Creates an animator with the given parameters.
    pub fn new(parameters: Vec<AnimatorParameter>) -> Self {
        Self { parameters }
    }

    /// Loads an animator description from JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use lrs_toolkit::{Animator, AnimatorExt};
    ///
    /// let animator = Animator::from_json(
    ///     r#"{ "parameters": [ { "name": "Speed", "kind": "float" } ] }"#,
    /// ).unwrap();
    /// assert!(animator.has_parameter("Speed"));
    /// assert!(!animator.has_parameter("speed"));
    /// ```
    pub fn from_json(json: &str) -> ToolkitResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parameter queries for anything that exposes animator parameters.
pub trait AnimatorExt {
    /// The exposed parameters.
    fn parameters(&self) -> &[AnimatorParameter];

    /// Whether a parameter named exactly `name` exists.
    fn has_parameter(&self, name: &str) -> bool {
        self.parameters()
            .iter()
            .any(|parameter| parameter.name == name)
    }
}

impl AnimatorExt for Animator {
    fn parameters(&self) -> &[AnimatorParameter] {
        &self.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolkitError;

    fn locomotion() -> Animator {
        Animator::new(vec![
            AnimatorParameter::new("Speed", ParameterKind::Float),
            AnimatorParameter::new("Grounded", ParameterKind::Bool),
            AnimatorParameter::new("Jump", ParameterKind::Trigger),
        ])
    }

    #[test]
    fn test_has_parameter_exact_match() {
        let animator = locomotion();
        assert!(animator.has_parameter("Speed"));
        assert!(animator.has_parameter("Jump"));
        assert!(!animator.has_parameter("speed"));
        assert!(!animator.has_parameter("Spee"));
        assert!(!animator.has_parameter(""));
    }

    #[test]
    fn test_empty_animator() {
        assert!(!Animator::default().has_parameter("Speed"));
    }

    #[test]
    fn test_from_json_rejects_unknown_kind() {
        let result = Animator::from_json(r#"{ "parameters": [ { "name": "X", "kind": "vector" } ] }"#);
        assert!(matches!(result, Err(ToolkitError::Serde(_))));
    }
}
