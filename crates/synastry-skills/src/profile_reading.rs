//! **ProfileReading Skill** — standalone numeric profile for one birth date.
//!
//! Payload: `{ date, today? }`. Returns the full serialized profile; the host
//! decides which fields to render.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use synastry_core::compute_profile;

use crate::EngineSkill;

const SKILL_NAME: &str = "ProfileReading";

#[derive(Debug, Deserialize)]
struct ProfileArgs {
    /// Birth date, `YYYY-MM-DD`.
    date: String,
    /// Override for "today" (`YYYY-MM-DD`). Optional.
    #[serde(default)]
    today: Option<String>,
}

pub struct ProfileReadingSkill;

#[async_trait::async_trait]
impl EngineSkill for ProfileReadingSkill {
    fn name(&self) -> &str {
        SKILL_NAME
    }

    async fn execute(
        &self,
        payload: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
        let payload = payload.ok_or("ProfileReading requires payload: { date, today? }")?;
        let args: ProfileArgs = serde_json::from_value(payload)?;

        let today = match args.today.as_deref() {
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| format!("invalid today override: {raw:?}"))?,
            None => Utc::now().date_naive(),
        };

        let profile = compute_profile(&args.date, today)?;

        tracing::info!(
            target: "synastry::skills",
            life_path = profile.life_path,
            "profile computed"
        );

        Ok(serde_json::json!({
            "status": "ok",
            "skill": SKILL_NAME,
            "profile": profile,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_profile_roundtrip() {
        let out = ProfileReadingSkill
            .execute(Some(serde_json::json!({
                "date": "1992-02-06",
                "today": "2024-06-15",
            })))
            .await
            .unwrap();
        assert_eq!(out["status"], "ok");
        assert_eq!(out["profile"]["life_path"], 11);
    }

    #[tokio::test]
    async fn test_malformed_date_rejected() {
        let err = ProfileReadingSkill
            .execute(Some(serde_json::json!({ "date": "yesterday" })))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("invalid date format"));
    }
}
