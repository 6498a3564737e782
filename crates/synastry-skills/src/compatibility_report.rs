//! **CompatibilityReport Skill** — full pairwise report from two birth dates.
//!
//! Payload: `{ date_a, date_b, name_a?, name_b?, today? }`. The optional
//! `today` (ISO date) pins the forecast clock, which hosts use to cache a
//! report for the rest of the calendar day; when absent the current date is
//! captured once per call.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use synastry_core::{compute_compatibility, EngineConfig};

use crate::EngineSkill;

const SKILL_NAME: &str = "CompatibilityReport";

#[derive(Debug, Deserialize)]
struct CompatibilityArgs {
    /// First birth date, `YYYY-MM-DD`.
    date_a: String,
    /// Second birth date, `YYYY-MM-DD`.
    date_b: String,
    /// Display name for person A. Optional; defaults to "Person A".
    #[serde(default)]
    name_a: Option<String>,
    /// Display name for person B. Optional; defaults to "Person B".
    #[serde(default)]
    name_b: Option<String>,
    /// Override for "today" (`YYYY-MM-DD`). Optional; used to pin forecasts.
    #[serde(default)]
    today: Option<String>,
}

pub struct CompatibilityReportSkill {
    config: EngineConfig,
}

impl CompatibilityReportSkill {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(EngineConfig::from_env())
    }
}

#[async_trait::async_trait]
impl EngineSkill for CompatibilityReportSkill {
    fn name(&self) -> &str {
        SKILL_NAME
    }

    async fn execute(
        &self,
        payload: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
        let payload = payload
            .ok_or("CompatibilityReport requires payload: { date_a, date_b, name_a?, name_b?, today? }")?;
        let args: CompatibilityArgs = serde_json::from_value(payload)?;

        let today = match args.today.as_deref() {
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| format!("invalid today override: {raw:?}"))?,
            None => Utc::now().date_naive(),
        };

        let result = compute_compatibility(
            &args.date_a,
            &args.date_b,
            args.name_a.as_deref(),
            args.name_b.as_deref(),
            today,
            &self.config,
        )?;

        tracing::info!(
            target: "synastry::skills",
            total = result.scores.total,
            label = %result.scores.label,
            "compatibility report built"
        );

        Ok(serde_json::json!({
            "status": "ok",
            "skill": SKILL_NAME,
            "result": result,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_full_report_roundtrip() {
        let skill = CompatibilityReportSkill::new(EngineConfig::default());
        let out = skill
            .execute(Some(serde_json::json!({
                "date_a": "1990-01-01",
                "date_b": "1990-01-01",
                "name_a": "Ada",
                "name_b": "Lin",
                "today": "2024-06-15",
            })))
            .await
            .unwrap();
        assert_eq!(out["status"], "ok");
        assert_eq!(out["result"]["scores"]["total"], 89);
        assert_eq!(out["result"]["person_a"]["name"], "Ada");
    }

    #[tokio::test]
    async fn test_missing_payload_rejected() {
        let skill = CompatibilityReportSkill::new(EngineConfig::default());
        let err = skill.execute(None).await.unwrap_err();
        assert!(err.to_string().contains("requires payload"));
    }

    #[tokio::test]
    async fn test_bad_date_surfaces_engine_error() {
        let skill = CompatibilityReportSkill::new(EngineConfig::default());
        let err = skill
            .execute(Some(serde_json::json!({
                "date_a": "1990-13-01",
                "date_b": "1990-01-01",
            })))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
