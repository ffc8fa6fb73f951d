use crate::models::ExamRequest;

/// Build the generation prompt for a validated exam request.
///
/// The prompt asks for exactly `count` numbered questions tied to the topic,
/// forbids markdown so the result can be printed as-is, and optionally
/// requests a matching answer key at the end.
pub fn build_exam_prompt(request: &ExamRequest) -> String {
    let mut prompt = format!(
        r#"Generate a math exam for a primary school student with {count} questions on the topic of "{topic}".

Requirements:
- Each question should be age-appropriate for primary school students (ages 6-12)
- Questions should be clearly numbered (1., 2., 3., etc.)
- Include a variety of question types when possible
- Make sure questions are related to the topic: {topic}
- Format the output as a clean, printable exam paper in PLAIN TEXT only
- DO NOT use any markdown formatting (no **, __, -, etc.)
- DO NOT use bold, italic, or any special formatting
- Use simple plain text formatting only
- Include the title "Math Exam - {topic}" at the top

Example format:
Math Exam - {topic}
Name: _______________  Date: _______________

1. [Question 1]
2. [Question 2]
..."#,
        count = request.count,
        topic = request.topic
    );

    if request.include_answers {
        prompt.push_str(
            r#"

Also provide an answer key at the end with the format:
Answer Key:
1. [Answer 1]
2. [Answer 2]
...

IMPORTANT: Use only plain text formatting. No markdown symbols like ** or __ should appear in the output."#,
        );
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(topic: &str, count: i64, include_answers: bool) -> ExamRequest {
        ExamRequest {
            topic: topic.to_string(),
            count,
            include_answers,
        }
    }

    #[test]
    fn test_prompt_mentions_count_and_topic() {
        let prompt = build_exam_prompt(&request("Fractions", 7, false));
        assert!(prompt.contains("7 questions"));
        assert!(prompt.contains("topic of \"Fractions\""));
        assert!(prompt.contains("Math Exam - Fractions"));
    }

    #[test]
    fn test_answer_key_block_is_conditional() {
        let without = build_exam_prompt(&request("Addition", 3, false));
        let with = build_exam_prompt(&request("Addition", 3, true));
        assert!(!without.contains("Answer Key:"));
        assert!(with.contains("Answer Key:"));
        assert!(with.starts_with(&without));
    }
}
