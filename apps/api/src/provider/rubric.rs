/// The fixed scoring rubric handed to the analysis model. Category weights
/// sum to 100 and match the `scoringBreakdown` categories in the prompt.
pub const SCORING_RUBRIC: &str = r#"{
  "rubricName": "Resume to Job Description Match",
  "scoringScale": { "type": "weighted_sum", "maximumScore": 100 },
  "categories": [
    {
      "name": "Core Technical & Experience Alignment",
      "totalWeight": 60,
      "criteria": [
        { "id": "1.1", "name": "Required skills (technical and soft)", "weight": 25,
          "scoringLogic": "Each required skill matched = 25 / total required skills." },
        { "id": "1.2", "name": "Required technologies and tools", "weight": 15,
          "scoringLogic": "Each required tool matched exactly = 15 / total required tools." },
        { "id": "1.3", "name": "Years of experience", "weight": 10,
          "scoringLogic": "Meets all = 10. Within 1 year overall or 6 months specific = 5. Below = 0." },
        { "id": "1.4", "name": "Relevant titles and progression", "weight": 10,
          "scoringLogic": "Same or adjacent title with upward progression = 10. Related = 5. Unrelated = 0." }
      ]
    },
    {
      "name": "Education & Secondary Skills",
      "totalWeight": 15,
      "criteria": [
        { "id": "2.1", "name": "Education and certifications", "weight": 8,
          "scoringLogic": "Meets stated requirement = 8. Equivalent experience noted = 4. Missing = 0." },
        { "id": "2.2", "name": "Preferred skills", "weight": 7,
          "scoringLogic": "Each preferred skill matched = 7 / total preferred skills." }
      ]
    },
    {
      "name": "Content Quality & Impact",
      "totalWeight": 15,
      "criteria": [
        { "id": "3.1", "name": "Quantified achievements", "weight": 8,
          "scoringLogic": "Most bullets quantified = 8. Some = 4. None = 0." },
        { "id": "3.2", "name": "Action verbs and clarity", "weight": 7,
          "scoringLogic": "Strong, specific verbs throughout = 7. Mixed = 3. Vague = 0." }
      ]
    },
    {
      "name": "Structural Adherence & Parseability",
      "totalWeight": 10,
      "criteria": [
        { "id": "4.1", "name": "Standard section headings", "weight": 5,
          "scoringLogic": "All standard headings present = 5. Some = 2. None = 0." },
        { "id": "4.2", "name": "Machine-readable layout", "weight": 5,
          "scoringLogic": "Single column, no tables or images carrying text = 5. Minor issues = 2. Unparseable = 0." }
      ]
    }
  ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rubric_is_valid_json_with_weights_summing_to_100() {
        let rubric: serde_json::Value = serde_json::from_str(SCORING_RUBRIC).unwrap();
        let total: i64 = rubric["categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["totalWeight"].as_i64().unwrap())
            .sum();
        assert_eq!(total, 100);
    }
}
