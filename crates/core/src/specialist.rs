//! Per-model prompt specialists.
//!
//! A [`Specialist`] is a declarative record describing how prompts for one
//! AI image or video model are produced: which knowledge-base document the
//! RAG backend should ground on, and optionally a literal system prompt that
//! replaces the generated default. Generation itself happens in the RAG
//! backend; nothing here performs I/O.

use serde::Serialize;

/// What a model produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// Prompt-generation settings for a single AI model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Specialist {
    /// Stable identifier clients send, e.g. `"midjourney"`.
    pub model: &'static str,
    pub display_name: &'static str,
    pub kind: MediaKind,
    /// Knowledge-base document the RAG backend retrieves from.
    pub knowledge_base: &'static str,
    /// Literal system prompt; `None` uses [`Specialist::system_prompt`]'s default.
    #[serde(skip)]
    pub system_prompt_override: Option<&'static str>,
}

impl Specialist {
    pub const fn new(
        model: &'static str,
        display_name: &'static str,
        kind: MediaKind,
        knowledge_base: &'static str,
    ) -> Self {
        Self {
            model,
            display_name,
            kind,
            knowledge_base,
            system_prompt_override: None,
        }
    }

    pub const fn with_system_prompt(mut self, prompt: &'static str) -> Self {
        self.system_prompt_override = Some(prompt);
        self
    }

    /// The system prompt sent to the RAG backend for this model.
    pub fn system_prompt(&self) -> String {
        if let Some(prompt) = self.system_prompt_override {
            return prompt.to_string();
        }
        let medium = match self.kind {
            MediaKind::Image => "a still image",
            MediaKind::Video => "a short video clip",
        };
        format!(
            "You are a cinematography prompt specialist for {name}. Using the {name} \
             guidance retrieved from the knowledge base, turn the shot brief into one \
             {name} prompt for {medium}. Preserve the framing, camera angle, camera \
             movement, and lens choices, describe only the characters and objects listed \
             in the brief, and reply with the prompt text alone.",
            name = self.display_name,
        )
    }
}

const SORA_SYSTEM_PROMPT: &str = "You write prompts for OpenAI Sora. Describe the shot as a \
    continuous piece of footage: open with the camera setup and lens, then the subject and \
    their action over time, then lighting and atmosphere. Use plain cinematic language, at \
    most 120 words, and reply with the prompt text alone.";

const MIDJOURNEY_SYSTEM_PROMPT: &str = "You write Midjourney prompts. Lead with the subject and \
    composition, follow with shot type, angle, and lens, then lighting, palette, and style \
    keywords separated by commas. Finish with suitable parameters such as --ar and --style. \
    Reply with the prompt text alone.";

/// Every model ShotPilot can write prompts for.
pub const SPECIALISTS: &[Specialist] = &[
    Specialist::new(
        "midjourney",
        "Midjourney",
        MediaKind::Image,
        "midjourney_prompting_guide.md",
    )
    .with_system_prompt(MIDJOURNEY_SYSTEM_PROMPT),
    Specialist::new("dalle3", "DALL-E 3", MediaKind::Image, "dalle3_prompting_guide.md"),
    Specialist::new(
        "stable-diffusion",
        "Stable Diffusion",
        MediaKind::Image,
        "stable_diffusion_prompting_guide.md",
    ),
    Specialist::new("flux", "Flux", MediaKind::Image, "flux_prompting_guide.md"),
    Specialist::new("runway", "Runway Gen-3", MediaKind::Video, "runway_prompting_guide.md"),
    Specialist::new("sora", "Sora", MediaKind::Video, "sora_prompting_guide.md")
        .with_system_prompt(SORA_SYSTEM_PROMPT),
    Specialist::new("kling", "Kling", MediaKind::Video, "kling_prompting_guide.md"),
    Specialist::new("veo", "Veo", MediaKind::Video, "veo_prompting_guide.md"),
];

/// Look up a specialist by model id, ignoring ASCII case.
pub fn find_specialist(model: &str) -> Option<&'static Specialist> {
    SPECIALISTS
        .iter()
        .find(|s| s.model.eq_ignore_ascii_case(model.trim()))
}
