//! Built-in schema definitions.
//!
//! Field descriptions are written for the model and travel verbatim into the
//! tool declaration. The five schemas form a tradeoff surface: `minimal` is
//! fastest, `detailed` is most informative, `optimized` balances the two,
//! `context_aware` adds conversation analysis.

use super::{
    FieldDescriptor, FieldKind, SchemaDefinition, CLASSIFICATION_TYPES, CONVERSATION_CONTEXTS,
};

const CONTEXT_AWARE_ADDENDUM: &str = r#"**Additional Analysis Required:**
- conversation_context: "greeting" for hi/hello, "question" for queries, "task_request" for work requests
- step_count: Count estimated steps (1 = prompt, 2+ = workflow)
- requires_coordination: True if multiple tools/services needed"#;

const DETAILED_ADDENDUM: &str = r#"**Additional Analysis Required:**
- indicators: List key words/phrases that influenced your decision
- complexity_score: Rate 1-5 (1=very simple, 5=very complex)"#;

const OPTIMIZED_ADDENDUM: &str = r#"**Additional Analysis Required:**
- task_steps: Estimate number of distinct steps needed"#;

pub(super) fn definitions() -> Vec<SchemaDefinition> {
    vec![minimal(), standard(), detailed(), optimized(), context_aware()]
}

fn type_field(description: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        name: "type",
        kind: FieldKind::Enum {
            values: CLASSIFICATION_TYPES,
        },
        required: true,
        description,
    }
}

fn confidence_field(description: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        name: "confidence",
        kind: FieldKind::Float { min: 0.0, max: 1.0 },
        required: true,
        description,
    }
}

fn reasoning_field(
    min_len: Option<u64>,
    max_len: Option<u64>,
    description: &'static str,
) -> FieldDescriptor {
    FieldDescriptor {
        name: "reasoning",
        kind: FieldKind::String { min_len, max_len },
        required: true,
        description,
    }
}

/// Basic type and confidence only, optimized for speed.
fn minimal() -> SchemaDefinition {
    SchemaDefinition {
        name: "minimal",
        addendum: None,
        fields: vec![
            type_field("Classification: prompt (single-step) or workflow (multi-step)"),
            confidence_field("Confidence score from 0.0 to 1.0"),
        ],
    }
}

/// Type, confidence, and reasoning: a good balance of accuracy and speed.
fn standard() -> SchemaDefinition {
    SchemaDefinition {
        name: "standard",
        addendum: None,
        fields: vec![
            type_field(
                "Classification: prompt (single-step task) or workflow (multi-step orchestrated task)",
            ),
            confidence_field("Confidence score from 0.0 to 1.0"),
            reasoning_field(
                None,
                Some(150),
                "Brief explanation of why this classification was chosen",
            ),
        ],
    }
}

/// Comprehensive output with indicators and complexity scoring.
fn detailed() -> SchemaDefinition {
    SchemaDefinition {
        name: "detailed",
        addendum: Some(DETAILED_ADDENDUM),
        fields: vec![
            type_field(
                "Classification: prompt (conversational/single-step) or workflow (complex/multi-step)",
            ),
            confidence_field("Confidence score from 0.0 to 1.0"),
            reasoning_field(
                None,
                Some(200),
                "Detailed explanation of classification decision",
            ),
            FieldDescriptor {
                name: "indicators",
                kind: FieldKind::StringList,
                required: true,
                description: "Key indicators that led to this classification",
            },
            FieldDescriptor {
                name: "complexity_score",
                kind: FieldKind::Integer {
                    min: Some(1),
                    max: Some(5),
                },
                required: true,
                description: "Task complexity rating: 1=simple, 5=very complex",
            },
        ],
    }
}

/// Research-optimized schema balancing accuracy, speed, and reliability.
fn optimized() -> SchemaDefinition {
    SchemaDefinition {
        name: "optimized",
        addendum: Some(OPTIMIZED_ADDENDUM),
        fields: vec![
            type_field(
                "Classification: prompt (single-step request) or workflow (multi-step task requiring orchestration)",
            ),
            confidence_field("Classification confidence from 0.0 to 1.0"),
            reasoning_field(
                Some(10),
                Some(100),
                "Concise reasoning for this classification",
            ),
            FieldDescriptor {
                name: "task_steps",
                kind: FieldKind::Integer {
                    min: Some(1),
                    max: None,
                },
                required: true,
                description: "Estimated number of steps required to complete this task",
            },
        ],
    }
}

/// Context-aware schema focusing on conversation context and task complexity.
fn context_aware() -> SchemaDefinition {
    SchemaDefinition {
        name: "context_aware",
        addendum: Some(CONTEXT_AWARE_ADDENDUM),
        fields: vec![
            type_field(
                "prompt: direct question/request, workflow: requires multiple coordinated steps",
            ),
            confidence_field("Confidence score from 0.0 to 1.0"),
            reasoning_field(
                None,
                Some(150),
                "Brief explanation of classification decision",
            ),
            FieldDescriptor {
                name: "conversation_context",
                kind: FieldKind::Enum {
                    values: CONVERSATION_CONTEXTS,
                },
                required: true,
                description: "Context type: greeting/question/follow_up always prompt, task_request/multi_step may be workflow",
            },
            FieldDescriptor {
                name: "step_count",
                kind: FieldKind::Integer {
                    min: Some(1),
                    max: None,
                },
                required: true,
                description: "Estimated number of steps needed (1=prompt, 2+=workflow)",
            },
            FieldDescriptor {
                name: "requires_coordination",
                kind: FieldKind::Bool,
                required: true,
                description: "Does this require coordinating multiple tools/services?",
            },
        ],
    }
}
