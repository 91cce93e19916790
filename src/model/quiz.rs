use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::model::question::QuestionDto;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryDto>,
    #[serde(default)]
    pub previous_questions: Vec<i32>,
}

/// Category picked by the player. The client sends the id either as a number or as
/// the numeric string it used as an object key; `0` is its "ALL" choice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<i32>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct QuizQuestionDto {
    pub success: bool,
    /// Next question, serialized as `false` once the category is exhausted.
    #[serde(serialize_with = "serialize_question_or_false")]
    pub question: Option<QuestionDto>,
}

fn serialize_question_or_false<S>(
    value: &Option<QuestionDto>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(question) => question.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i32),
        Str(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Int(id)) => Ok(Some(id)),
        Some(RawId::Str(value)) => value
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_and_string_category_ids() {
        let numeric: QuizRequestDto =
            serde_json::from_str(r#"{"quiz_category": {"id": 3}, "previous_questions": [1]}"#)
                .unwrap();
        assert_eq!(numeric.quiz_category.unwrap().id, Some(3));
        assert_eq!(numeric.previous_questions, vec![1]);

        let string: QuizRequestDto = serde_json::from_str(
            r#"{"quiz_category": {"type": "Art", "id": "2"}, "previous_questions": []}"#,
        )
        .unwrap();
        let category = string.quiz_category.unwrap();
        assert_eq!(category.id, Some(2));
        assert_eq!(category.kind.as_deref(), Some("Art"));
    }

    #[test]
    fn missing_fields_default_to_all_questions() {
        let request: QuizRequestDto = serde_json::from_str("{}").unwrap();
        assert_eq!(request, QuizRequestDto::default());

        let request: QuizRequestDto =
            serde_json::from_str(r#"{"quiz_category": {"type": "click"}}"#).unwrap();
        assert_eq!(request.quiz_category.unwrap().id, None);
    }

    #[test]
    fn rejects_non_numeric_category_id() {
        let result =
            serde_json::from_str::<QuizRequestDto>(r#"{"quiz_category": {"id": "science"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn exhausted_quiz_serializes_question_as_false() {
        let body = serde_json::to_value(QuizQuestionDto {
            success: true,
            question: None,
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({"success": true, "question": false}));
    }
}
