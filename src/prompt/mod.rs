//! Deterministic classification prompt construction.
//!
//! The prompt is a fixed base block (the binary decision with examples), a
//! fixed rules block (linguistic indicators), the schema's addendum carried as
//! data on [`SchemaDefinition`], and a closing instruction. Same inputs always
//! yield the same string. The input text is embedded verbatim; the builder
//! does not sanitize or truncate it.

use crate::adapter::TOOL_NAME;
use crate::schema::SchemaDefinition;

/// Build the classification prompt for one input/schema pair.
pub fn build_prompt(input_text: &str, schema: &SchemaDefinition) -> String {
    let mut prompt = format!(
        r#"You are a text classifier. Analyze the following input and classify it as either "prompt" or "workflow".

**Input to classify:** "{input_text}"

**Classification Rules:**
- **PROMPT**: Single-step requests, questions, greetings, simple tasks that can be completed directly
  Examples: "hi", "what is recursion?", "write a function", "explain this concept"

- **WORKFLOW**: Multi-step tasks requiring coordination, orchestration, or sequential operations
  Examples: "create a new project with tests and documentation", "fix bugs and deploy", "analyze codebase and suggest improvements"

**Key Indicators:**
- Look for multiple actions: "and", "then", "also", "with", "plus"
- File operations: "create", "update", "fix" + file references
- Testing requirements: "with tests", "run tests", "verify"
- Coordination needs: multiple systems, tools, or sequential steps"#
    );

    if let Some(addendum) = schema.addendum {
        prompt.push_str("\n\n");
        prompt.push_str(addendum);
    }

    // Ties resolve toward "prompt"; keep the closing instruction intact.
    prompt.push_str(&format!(
        r#"

**Instructions:**
1. Analyze the input text carefully
2. Determine if it's a single-step (prompt) or multi-step (workflow) request
3. Provide a confidence score between 0.0 and 1.0
4. Use the {TOOL_NAME} function with your analysis

Remember: When in doubt, prefer "prompt" for simple requests and "workflow" only for clearly multi-step tasks."#
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    #[test]
    fn test_prompt_is_deterministic() {
        let s = schema::resolve("standard").unwrap();
        assert_eq!(build_prompt("hello", s), build_prompt("hello", s));
    }

    #[test]
    fn test_input_embedded_verbatim() {
        let s = schema::resolve("minimal").unwrap();
        let input = "  fix the bug   THEN deploy!  ";
        assert!(build_prompt(input, s).contains(input));
    }

    #[test]
    fn test_context_aware_addendum_present() {
        let s = schema::resolve("context_aware").unwrap();
        let prompt = build_prompt("hi", s);
        assert!(prompt.contains("conversation_context"));
        assert!(prompt.contains("step_count"));
        assert!(prompt.contains("requires_coordination"));
    }

    #[test]
    fn test_minimal_has_no_addendum_fields() {
        let s = schema::resolve("minimal").unwrap();
        let prompt = build_prompt("hi", s);
        assert!(!prompt.contains("conversation_context"));
        assert!(!prompt.contains("step_count"));
        assert!(!prompt.contains("requires_coordination"));
        assert!(!prompt.contains("complexity_score"));
        assert!(!prompt.contains("task_steps"));
    }

    #[test]
    fn test_detailed_addendum_present() {
        let s = schema::resolve("detailed").unwrap();
        let prompt = build_prompt("hi", s);
        assert!(prompt.contains("indicators"));
        assert!(prompt.contains("complexity_score"));
    }

    #[test]
    fn test_optimized_addendum_present() {
        let s = schema::resolve("optimized").unwrap();
        assert!(build_prompt("hi", s).contains("task_steps"));
    }

    #[test]
    fn test_closing_bias_toward_prompt() {
        let s = schema::resolve("standard").unwrap();
        let prompt = build_prompt("hi", s);
        assert!(prompt.contains(r#"When in doubt, prefer "prompt""#));
        assert!(prompt.contains(TOOL_NAME));
    }
}
