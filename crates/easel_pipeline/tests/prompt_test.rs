//! Tests for prompt construction.

use easel_core::{
    Audience, DiagramRequest, GenerationRequest, OutlineRequest, SlideCount, Tone,
};
use easel_pipeline::prompt::build_prompt;

fn outline(count: SlideCount, tone: Tone, audience: Audience) -> GenerationRequest {
    OutlineRequest::builder()
        .requirements("Create a presentation about solar energy benefits")
        .slide_count(count)
        .tone(tone)
        .audience(audience)
        .build()
        .expect("valid request")
        .into()
}

#[test]
fn test_prompt_is_deterministic() {
    let request = outline(SlideCount::Four, Tone::Professional, Audience::Executives);
    assert_eq!(build_prompt(&request), build_prompt(&request));

    let diagram: GenerationRequest =
        DiagramRequest::new("Create a flowchart for a user login process").into();
    assert_eq!(build_prompt(&diagram), build_prompt(&diagram));
}

#[test]
fn test_outline_prompt_interpolates_options() {
    let prompt = build_prompt(&outline(
        SlideCount::Four,
        Tone::Professional,
        Audience::Executives,
    ));
    let system = prompt.system_instruction();

    assert!(system.contains("exactly 4 slides"));
    assert!(system.contains("exactly 4 objects"));
    assert!(system.contains("professional tone"));
    assert!(system.contains("executives audience"));
    for field in ["\"title\"", "\"content\"", "\"layout\"", "\"notes\""] {
        assert!(system.contains(field), "missing field {}", field);
    }
    assert!(system.contains("3 to 6"));
    assert!(system.contains("Do not add explanations, markdown, or code fences"));
}

#[test]
fn test_outline_prompt_uses_defaults() {
    let prompt = build_prompt(&outline(
        SlideCount::default(),
        Tone::default(),
        Audience::default(),
    ));
    let system = prompt.system_instruction();
    assert!(system.contains("exactly 6 slides"));
    assert!(system.contains("persuasive tone"));
    assert!(system.contains("general public audience"));
}

#[test]
fn test_different_options_give_different_prompts() {
    let a = build_prompt(&outline(SlideCount::Four, Tone::Casual, Audience::Students));
    let b = build_prompt(&outline(SlideCount::Eight, Tone::Casual, Audience::Students));
    assert_ne!(a.system_instruction(), b.system_instruction());
    assert_eq!(a.user_instruction(), b.user_instruction());
}

#[test]
fn test_user_instruction_is_unmodified() {
    let requirements = "  Explain   our Q3 roadmap\nwith milestones  ";
    let request: GenerationRequest = OutlineRequest::builder()
        .requirements(requirements)
        .build()
        .expect("valid request")
        .into();
    assert_eq!(build_prompt(&request).user_instruction(), requirements);
}

#[test]
fn test_diagram_prompt() {
    let request: GenerationRequest =
        DiagramRequest::new("Create a flowchart for a user login process").into();
    let prompt = build_prompt(&request);

    assert!(prompt.system_instruction().contains("Mermaid"));
    assert!(prompt.system_instruction().contains("graph TD"));
    assert!(prompt.system_instruction().contains("sequenceDiagram"));
    assert!(prompt.system_instruction().contains("classDiagram"));
    assert_eq!(
        prompt.user_instruction(),
        "Create a flowchart for a user login process"
    );
}
