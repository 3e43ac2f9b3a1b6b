//! Prompt generation for a single shot.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use shotpilot_core::brief::{EntityNote, ShotBrief};
use shotpilot_core::error::CoreError;
use shotpilot_core::mention::{filter_entities, TracingObserver};
use shotpilot_core::specialist::find_specialist;
use shotpilot_core::types::DbId;
use shotpilot_db::models::character::Character;
use shotpilot_db::models::prompt_history::CreatePromptHistory;
use shotpilot_db::repositories::{CharacterRepo, CreditRepo, ObjectRepo};
use shotpilot_rag::RagRequest;

use super::{ensure_project, ensure_scene, ensure_shot};
use crate::error::{AppError, AppResult};
use crate::middleware::credits::CreditGuard;
use crate::state::AppState;

/// Request body for `POST /shots/{id}/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Specialist model id, e.g. `"midjourney"`.
    pub model: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub prompt: String,
    pub model: String,
    pub mentioned_names: Vec<String>,
    pub unmatched_names: Vec<String>,
    pub credits_remaining: i32,
    pub history_id: DbId,
}

/// POST /api/v1/shots/{id}/generate
///
/// 1. Resolve the specialist and the shot (through its scene and project).
/// 2. Narrow the project's characters and objects to the ones the shot mentions.
/// 3. Render the shot brief and ask the prompt backend for a prompt.
/// 4. Charge credits and record the prompt, atomically.
///
/// A backend failure returns 502 and charges nothing.
pub async fn generate(
    State(state): State<AppState>,
    guard: CreditGuard,
    Path(id): Path<DbId>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<Json<GenerateResponse>> {
    let user_id = guard.user.user_id;

    let specialist = find_specialist(&input.model)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown model '{}'", input.model)))?;

    let shot = ensure_shot(&state.pool, id, user_id).await?;
    let scene = ensure_scene(&state.pool, shot.scene_id, user_id).await?;
    let project = ensure_project(&state.pool, scene.project_id, user_id).await?;

    let characters = CharacterRepo::list_by_project(&state.pool, project.id).await?;
    let objects = ObjectRepo::list_by_project(&state.pool, project.id).await?;

    let filter = filter_entities(shot.mention_text(), &characters, &objects, &TracingObserver);
    let unmatched_names: Vec<String> = filter
        .unmatched_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    let character_notes: Vec<String> = filter.characters.iter().map(|c| character_note(c)).collect();
    let brief = ShotBrief {
        project: &project.name,
        scene: scene.context(),
        framing: shot.framing(),
        text: shot.mention_text(),
        characters: filter
            .characters
            .iter()
            .zip(&character_notes)
            .map(|(c, note)| EntityNote {
                name: &c.name,
                description: Some(note.as_str()),
            })
            .collect(),
        objects: filter
            .objects
            .iter()
            .map(|o| EntityNote {
                name: &o.name,
                description: o.description.as_deref(),
            })
            .collect(),
    };

    let request = RagRequest {
        query: brief.render(),
        knowledge_base: specialist.knowledge_base.to_string(),
        system_prompt: specialist.system_prompt(),
        model: specialist.model.to_string(),
    };

    tracing::info!(
        user_id,
        shot_id = shot.id,
        model = specialist.model,
        characters = filter.characters.len(),
        objects = filter.objects.len(),
        "Generating prompt"
    );

    let prompt = state.prompt_backend.generate(&request).await?;

    let cost = state.config.generation_cost;
    let history = CreatePromptHistory {
        user_id,
        shot_id: Some(shot.id),
        model: specialist.model.to_string(),
        prompt,
        mentioned_names: filter.mentioned_names.clone(),
        credits_spent: cost,
    };

    let Some(charge) = CreditRepo::charge_for_generation(&state.pool, cost, &history).await? else {
        // The balance dropped between the guard and the charge.
        let available = CreditRepo::balance(&state.pool, user_id).await?.unwrap_or(0);
        return Err(AppError::Core(CoreError::InsufficientCredits {
            required: cost,
            available,
        }));
    };

    Ok(Json(GenerateResponse {
        prompt: history.prompt,
        model: history.model,
        mentioned_names: history.mentioned_names,
        unmatched_names,
        credits_remaining: charge.balance,
        history_id: charge.history.id,
    }))
}

/// Description and appearance joined into one line for the brief.
fn character_note(character: &Character) -> String {
    [character.description.as_deref(), character.appearance.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}
