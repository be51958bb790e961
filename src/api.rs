use serde::{Deserialize, Serialize};
use viral_stories::config::HookConfig;
use viral_stories::story::Story;
use viral_stories::{generate_hooks, EmotionalTone, ViralAnalysis, ViralScorer};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiScoreRequest {
    pub text: Option<String>,
    pub tone: Option<String>,
    pub hook_count: Option<usize>,
}

/// A validated scoring request.
#[derive(Debug)]
pub struct ScoreJob {
    pub text: String,
    pub tone: Option<EmotionalTone>,
    pub hook_count: usize,
    pub warnings: Vec<String>,
}

impl ApiScoreRequest {
    pub fn into_job(self, hooks: &HookConfig) -> Result<ScoreJob, String> {
        let text = self.text.unwrap_or_default();
        if text.trim().is_empty() {
            return Err("text is required".to_string());
        }

        let mut warnings = Vec::new();
        let tone = match self.tone.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(label) => {
                let tone = EmotionalTone::from_str(label);
                if tone.is_none() {
                    warnings.push(format!("unknown tone '{}'; no tone keywords applied", label));
                }
                tone
            }
        };

        Ok(ScoreJob {
            text,
            tone,
            hook_count: self.hook_count.unwrap_or(hooks.default_count),
            warnings,
        })
    }
}

impl ScoreJob {
    pub fn run(self, scorer: &ViralScorer) -> ApiScoreResponse {
        let analysis = scorer.analyze(&self.text, self.tone);
        let hooks = generate_hooks(&self.text, self.hook_count);
        ApiScoreResponse {
            tier: scorer.tier(analysis.score).label().to_string(),
            tone: self.tone.map(|tone| tone.label().to_string()),
            analysis,
            hooks,
            warnings: self.warnings,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiScoreResponse {
    pub analysis: ViralAnalysis,
    pub tier: String,
    pub tone: Option<String>,
    pub hooks: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHooksRequest {
    pub text: Option<String>,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHooksResponse {
    pub hooks: Vec<String>,
}

impl ApiHooksRequest {
    pub fn into_response(self, hooks: &HookConfig) -> ApiHooksResponse {
        let text = self.text.unwrap_or_default();
        ApiHooksResponse {
            hooks: generate_hooks(&text, self.count.unwrap_or(hooks.default_count)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatsRequest {
    pub stories: Vec<Story>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, tone: Option<&str>) -> ApiScoreRequest {
        ApiScoreRequest {
            text: Some(text.to_string()),
            tone: tone.map(str::to_string),
            hook_count: None,
        }
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = request("   ", None).into_job(&HookConfig::default()).unwrap_err();
        assert_eq!(err, "text is required");
    }

    #[test]
    fn unknown_tone_is_a_warning_not_an_error() {
        let job = request("Hello there.", Some("grumpy"))
            .into_job(&HookConfig::default())
            .unwrap();
        assert!(job.tone.is_none());
        assert_eq!(job.warnings.len(), 1);
        assert_eq!(job.hook_count, 5);
    }

    #[test]
    fn response_carries_tier_and_hooks() {
        let job = request("It was a secret. Nobody knew! Why?", Some("Mysterious"))
            .into_job(&HookConfig { default_count: 2 })
            .unwrap();
        let response = job.run(&ViralScorer::default());
        assert_eq!(response.tone.as_deref(), Some("mysterious"));
        assert_eq!(response.hooks.len(), 2);
        assert_eq!(response.tier, "Cold");
        assert!(response.warnings.is_empty());
    }

    #[test]
    fn wire_fields_are_camel_case() {
        let request: ApiScoreRequest =
            serde_json::from_str(r#"{"text": "One. Two. Three.", "hookCount": 1}"#).unwrap();
        assert_eq!(request.hook_count, Some(1));

        let response = request
            .into_job(&HookConfig::default())
            .unwrap()
            .run(&ViralScorer::default());
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["analysis"].get("estimatedReachPercentage").is_some());
        assert_eq!(json["hooks"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn hooks_request_defaults_count() {
        let response = ApiHooksRequest {
            text: Some("One. Two. Three.".to_string()),
            count: None,
        }
        .into_response(&HookConfig::default());
        assert_eq!(response.hooks.len(), 3);
    }
}
