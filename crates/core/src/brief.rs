//! Shot brief composition.
//!
//! A shot brief is the plain-text query handed to a specialist: scene
//! context, shot framing, the shot's own text, and descriptions of the
//! characters and objects that the mention filter selected.

use crate::mention::ShotText;

/// Scene-level context for a shot.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneContext<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub location: Option<&'a str>,
    pub time_of_day: Option<&'a str>,
}

/// Camera setup of a single shot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShotFraming<'a> {
    pub shot_number: i32,
    pub shot_type: Option<&'a str>,
    pub camera_angle: Option<&'a str>,
    pub camera_movement: Option<&'a str>,
    pub lens: Option<&'a str>,
}

/// A character or object as it should appear in the brief.
#[derive(Debug, Clone, Copy)]
pub struct EntityNote<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, Default)]
pub struct ShotBrief<'a> {
    pub project: &'a str,
    pub scene: SceneContext<'a>,
    pub framing: ShotFraming<'a>,
    pub text: ShotText<'a>,
    pub characters: Vec<EntityNote<'a>>,
    pub objects: Vec<EntityNote<'a>>,
}

impl ShotBrief<'_> {
    /// Render the brief as labelled lines. Absent fields are left out.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("Project: {}", self.project));
        lines.push(format!("Scene: {}", self.scene.name));
        push_field(&mut lines, "Scene description", self.scene.description);
        push_field(&mut lines, "Location", self.scene.location);
        push_field(&mut lines, "Time of day", self.scene.time_of_day);

        lines.push(format!("Shot number: {}", self.framing.shot_number));
        push_field(&mut lines, "Shot type", self.framing.shot_type);
        push_field(&mut lines, "Camera angle", self.framing.camera_angle);
        push_field(&mut lines, "Camera movement", self.framing.camera_movement);
        push_field(&mut lines, "Lens", self.framing.lens);

        push_field(&mut lines, "Description", self.text.description);
        push_field(&mut lines, "Blocking", self.text.blocking);
        push_field(&mut lines, "Notes", self.text.notes);

        push_entities(&mut lines, "Characters", &self.characters);
        push_entities(&mut lines, "Objects", &self.objects);

        lines.join("\n")
    }
}

fn push_field(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        lines.push(format!("{label}: {value}"));
    }
}

fn push_entities(lines: &mut Vec<String>, label: &str, entities: &[EntityNote<'_>]) {
    if entities.is_empty() {
        return;
    }
    lines.push(format!("{label}:"));
    for entity in entities {
        match entity.description.map(str::trim).filter(|d| !d.is_empty()) {
            Some(description) => lines.push(format!("- {}: {description}", entity.name)),
            None => lines.push(format!("- {}", entity.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShotBrief<'static> {
        ShotBrief {
            project: "Night Ferry",
            scene: SceneContext {
                name: "Dockside",
                description: Some("Rain-soaked pier"),
                location: Some("Harbour"),
                time_of_day: Some("Night"),
            },
            framing: ShotFraming {
                shot_number: 3,
                shot_type: Some("Close-up"),
                camera_angle: Some("Low angle"),
                camera_movement: None,
                lens: Some("50mm"),
            },
            text: ShotText {
                description: Some("@Mara lights a flare"),
                blocking: None,
                notes: Some("  "),
            },
            characters: vec![EntityNote {
                name: "Mara",
                description: Some("Ferry captain, 40s, oilskin coat"),
            }],
            objects: vec![EntityNote {
                name: "Flare",
                description: None,
            }],
        }
    }

    #[test]
    fn render_includes_present_fields_in_order() {
        let text = sample().render();
        let expected = "Project: Night Ferry\n\
                        Scene: Dockside\n\
                        Scene description: Rain-soaked pier\n\
                        Location: Harbour\n\
                        Time of day: Night\n\
                        Shot number: 3\n\
                        Shot type: Close-up\n\
                        Camera angle: Low angle\n\
                        Lens: 50mm\n\
                        Description: @Mara lights a flare\n\
                        Characters:\n\
                        - Mara: Ferry captain, 40s, oilskin coat\n\
                        Objects:\n\
                        - Flare";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_entity_lists_are_omitted() {
        let mut brief = sample();
        brief.characters.clear();
        brief.objects.clear();
        let text = brief.render();
        assert!(!text.contains("Characters:"));
        assert!(!text.contains("Objects:"));
    }

    #[test]
    fn blank_fields_are_skipped() {
        let text = sample().render();
        assert!(!text.contains("Notes:"));
        assert!(!text.contains("Camera movement:"));
    }
}
