//! synastry-skills: JSON-payload entry points for an embedding host.
//!
//! Thin adapters over the pure engine in `synastry-core`. Each skill parses a
//! JSON payload, runs one engine entry point, and returns the serialized
//! result; rendering, unlock gating, and export stay on the host's side of
//! the boundary.

mod compatibility_report;
mod profile_reading;

pub use compatibility_report::CompatibilityReportSkill;
pub use profile_reading::ProfileReadingSkill;

use std::sync::Arc;

/// An engine skill: named, async, JSON in / JSON out.
#[async_trait::async_trait]
pub trait EngineSkill: Send + Sync {
    /// Unique skill name for routing.
    fn name(&self) -> &str;

    /// Executes the skill with an optional JSON payload.
    async fn execute(
        &self,
        payload: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>>;
}

/// Registry of engine skills dispatched by name.
pub struct SkillRegistry {
    skills: Vec<Arc<dyn EngineSkill>>,
}

impl SkillRegistry {
    pub fn new() -> Self {
        Self { skills: Vec::new() }
    }

    /// Registry preloaded with every built-in skill.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CompatibilityReportSkill::from_env()));
        registry.register(Arc::new(ProfileReadingSkill));
        registry
    }

    pub fn register(&mut self, skill: Arc<dyn EngineSkill>) {
        self.skills.push(skill);
    }

    pub fn names(&self) -> Vec<&str> {
        self.skills.iter().map(|s| s.name()).collect()
    }

    /// Dispatch a payload to the named skill.
    pub async fn dispatch(
        &self,
        name: &str,
        payload: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
        let skill = self
            .skills
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| format!("unknown skill: {name}"))?;
        tracing::debug!(target: "synastry::skills", skill = name, "dispatching");
        skill.execute(payload).await
    }
}

impl Default for SkillRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registry_dispatch_and_unknown_skill() {
        let registry = SkillRegistry::with_defaults();
        assert!(registry.names().contains(&"CompatibilityReport"));
        assert!(registry.names().contains(&"ProfileReading"));

        let err = registry.dispatch("NoSuchSkill", None).await.unwrap_err();
        assert!(err.to_string().contains("unknown skill"));
    }
}
