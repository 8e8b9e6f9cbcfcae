//! Prompt construction for the three chain stages.
//!
//! Each stage gets a fixed system prompt and a user prompt assembled from
//! the round's state. The connection stage deliberately never sees the
//! target problem; the observation has to come from the mechanisms alone.

/// System and user messages for one stage
#[derive(Debug, Clone)]
pub struct StagePrompt {
    pub system: String,
    pub user: String,
}

const CONNECTION_SYSTEM: &str = r#"You are a cross-domain pattern analyst. You will be given short descriptions of mechanisms from biology, physics, and engineering.

State EXACTLY ONE connection between two or more of the mechanisms: a shared pattern, a structural analogy, or a productive tension. Two or three sentences, no lists, no preamble. Do not propose applications or solutions; only describe the connection itself."#;

const IDEATION_SYSTEM: &str = r#"You are an inventive engineer known for transplanting mechanisms across domains.

Produce FIVE concrete, implementation-specific ideas for the stated problem. Each idea must borrow from at least one of the listed mechanisms or from the cross-domain connection, and must name the specific components, materials, or process steps involved. Number the ideas 1-5. No summary before or after the list."#;

const RANKING_SYSTEM: &str = r#"You are a strict evaluator of engineering ideas.

Extract each idea from the text you are given and score it. Respond with a JSON array of objects, one per idea, with exactly these fields:
  "idea": the full idea text
  "relevance": integer 1-10, how directly it addresses the problem
  "plausibility": integer 1-10, how feasible it is with current technology
  "reasoning": one short sentence justifying the scores

Output ONLY the JSON. No code fences, no commentary."#;

/// Stage 1: observe one connection across the sampled mechanisms.
pub fn connection_prompt(mechanisms: &[String]) -> StagePrompt {
    StagePrompt {
        system: CONNECTION_SYSTEM.to_string(),
        user: format!("Mechanisms:\n{}", bullet_list(mechanisms)),
    }
}

/// Stage 2: generate five ideas from the problem, the connection, and the
/// mechanisms.
pub fn ideation_prompt(problem: &str, connection: &str, mechanisms: &[String]) -> StagePrompt {
    StagePrompt {
        system: IDEATION_SYSTEM.to_string(),
        user: format!(
            "Problem:\n{}\n\nCross-domain connection:\n{}\n\nMechanisms:\n{}",
            problem,
            connection,
            bullet_list(mechanisms)
        ),
    }
}

/// Stage 3: re-emit the ideas as scored JSON.
pub fn ranking_prompt(ideation: &str) -> StagePrompt {
    StagePrompt {
        system: RANKING_SYSTEM.to_string(),
        user: format!("Ideas to score:\n\n{}", ideation),
    }
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
