use serde::{Deserialize, Serialize};

/// One rubric category as scored by the analysis model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringBreakdown {
    pub category: String,
    pub score: f64,
    pub max_score: f64,
    pub weight: f64,
}

/// Deterministic match/ATS scoring of a resume against one posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    pub match_score: f64,
    pub explanation: String,
    pub ats_score: f64,
    pub ats_explanation: String,
    #[serde(default)]
    pub scoring_breakdown: Vec<ScoringBreakdown>,
}

/// A tailored resume plus the scoring of that tailored text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorResult {
    pub tailored_resume: String,
    #[serde(flatten)]
    pub analysis: AnalyzeResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tailor_result_flattens_analysis() {
        let result = TailorResult {
            tailored_resume: "Jane Doe".to_string(),
            analysis: AnalyzeResult {
                match_score: 85.0,
                explanation: "1. Strong".to_string(),
                ats_score: 92.0,
                ats_explanation: "Clean".to_string(),
                scoring_breakdown: vec![],
            },
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["tailoredResume"], "Jane Doe");
        assert_eq!(value["matchScore"], 85.0);
        assert_eq!(value["atsScore"], 92.0);
    }

    #[test]
    fn test_analyze_result_deserializes_breakdown() {
        let json = r#"{
            "matchScore": 70,
            "explanation": "ok",
            "atsScore": 80,
            "atsExplanation": "ok",
            "scoringBreakdown": [
                {"category": "Core Technical & Experience Alignment", "score": 40, "maxScore": 60, "weight": 60}
            ]
        }"#;
        let result: AnalyzeResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.scoring_breakdown.len(), 1);
        assert_eq!(result.scoring_breakdown[0].max_score, 60.0);
    }
}
