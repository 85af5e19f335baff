//! Prompt construction.
//!
//! Pure and deterministic: the same request always renders the same payload.

use easel_core::{GenerationRequest, OutlineRequest, PromptPayload};

/// Renders the system and user instructions for a validated request.
///
/// The user instruction is the requirement text, unmodified.
///
/// # Examples
///
/// ```
/// use easel_core::{GenerationRequest, OutlineRequest, SlideCount};
/// use easel_pipeline::prompt::build_prompt;
///
/// let request: GenerationRequest = OutlineRequest::builder()
///     .requirements("Create a presentation about solar energy benefits")
///     .slide_count(SlideCount::Eight)
///     .build()
///     .unwrap()
///     .into();
///
/// let prompt = build_prompt(&request);
/// assert!(prompt.system_instruction().contains("exactly 8 slides"));
/// assert_eq!(prompt.user_instruction(), request.requirements());
/// ```
pub fn build_prompt(request: &GenerationRequest) -> PromptPayload {
    let system = match request {
        GenerationRequest::Outline(outline) => outline_instruction(outline),
        GenerationRequest::Diagram(_) => DIAGRAM_INSTRUCTION.to_string(),
    };
    PromptPayload::new(system, request.requirements())
}

fn outline_instruction(request: &OutlineRequest) -> String {
    let count = request.slide_count().get();
    let tone = request.tone();
    let audience = request.audience();

    format!(
        "You are an expert presentation designer. Turn the user's requirements into a \
presentation outline expressed as JSON.

Rules:
- Produce exactly {count} slides as a JSON array of exactly {count} objects.
- Every slide object has these fields:
  - \"title\": a clear, engaging slide title.
  - \"content\": an array of 3 to 6 concise bullet points (strings) written for a {audience} audience.
  - \"layout\": a suggested layout, one of \"title\", \"content\", \"comparison\" or \"image\".
  - \"notes\": a short speaker note of 1 to 2 sentences.
- Write in a {tone} tone that stays engaging and easy to follow.
- Give the deck a logical flow: introduction, core content, conclusion.
- Adapt vocabulary and depth to the audience: {audience}.
- Respond with the raw JSON array only. Do not add explanations, markdown, or code fences."
    )
}

const DIAGRAM_INSTRUCTION: &str = "You are an expert at writing Mermaid diagrams. Read the \
user's requirements and answer with valid, well-structured Mermaid code that captures the \
described process, system or relationship.

1. Pick the diagram type that fits best:
   - 'graph TD' (flowchart) for processes, workflows and decision trees.
   - 'sequenceDiagram' for interactions between participants over time.
   - 'classDiagram' for object structures and their relationships.
   - When the type is unclear, use a flowchart ('graph TD').
2. Use correct Mermaid syntax ('A --> B' for flowchart edges, 'Alice->>Bob: Message' for \
sequence messages) with meaningful node names, such as 'ValidateCredentials' rather than 'Step1'.
3. Model decisions with '{Condition}' nodes and labelled branches like '-->|Yes|'.
4. Break complex requirements into clear steps and keep the code readable with indentation.
5. Respond with the Mermaid code only. Do not add explanations, comments, markdown, or code fences.

Example for \"Create a flowchart for a user login process\":
graph TD
  A[Start] --> B[Enter Username]
  B --> C[Enter Password]
  C --> D{Valid Credentials?}
  D -->|Yes| E[Login Success]
  D -->|No| F[Login Failed]
  E --> G[End]
  F --> G";
