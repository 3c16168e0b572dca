//! Pathing validation.
//!
//! Runs once after authoring and before play. Every scene must be defined
//! before a choice may lead to it, and scenes nobody can reach from the entry
//! scene are reported as warnings.

use tracing::{info, warn};
use vnengine_core::error::ValidationError;

use crate::domain::scene::SceneId;
use crate::domain::story::Story;

/// A scene with no path to it from the entry scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreachableScene {
    /// The unreachable scene's name.
    pub name: String,
}

/// Non-fatal findings of a successful validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Unreachable scenes, in creation order.
    pub unreachable: Vec<UnreachableScene>,
}

impl ValidationReport {
    /// Returns `true` if every scene is reachable.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unreachable.is_empty()
    }
}

/// Validates the pathing of `story`.
///
/// Walks the graph depth-first from the first scene added, using an explicit
/// stack. A scene is pushed at most once: the `pending` bits cover scenes
/// already on the stack and the `reachable` bits cover scenes already popped.
///
/// # Errors
///
/// Returns `ValidationError::NoScenesDefined` for an empty story and
/// `ValidationError::DanglingReference` for the first choice whose
/// destination was never added. Dangling references in unreachable scenes are
/// reported too, before any warning is emitted.
pub fn validate_pathing(story: &Story) -> Result<ValidationReport, ValidationError> {
    if story.is_empty() {
        return Err(ValidationError::NoScenesDefined);
    }

    let mut reachable = vec![false; story.len()];
    let mut pending = vec![false; story.len()];
    let mut stack = vec![SceneId::ENTRY];
    pending[SceneId::ENTRY.index()] = true;

    while let Some(id) = stack.pop() {
        pending[id.index()] = false;
        reachable[id.index()] = true;

        let scene = &story[id];
        for destination in scene.destinations() {
            let next = resolve(story, scene.name(), destination)?;
            if !reachable[next.index()] && !pending[next.index()] {
                pending[next.index()] = true;
                stack.push(next);
            }
        }
    }

    for scene in story.scenes().filter(|s| !reachable[s.id().index()]) {
        for destination in scene.destinations() {
            resolve(story, scene.name(), destination)?;
        }
    }

    let unreachable: Vec<UnreachableScene> = story
        .scenes()
        .filter(|s| !reachable[s.id().index()])
        .map(|s| {
            warn!(scene = %s.name(), "scene is not reachable from any choice");
            UnreachableScene {
                name: s.name().to_owned(),
            }
        })
        .collect();

    info!(
        scenes = story.len(),
        unreachable = unreachable.len(),
        "story pathing validated"
    );

    Ok(ValidationReport { unreachable })
}

fn resolve(story: &Story, from: &str, to: &str) -> Result<SceneId, ValidationError> {
    story
        .id_of(to)
        .ok_or_else(|| ValidationError::DanglingReference {
            from: from.to_owned(),
            to: to.to_owned(),
        })
}

impl Story {
    /// Validates the story graph. See [`validate_pathing`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the story is empty or a choice leads to an
    /// undefined scene.
    pub fn validate(&self) -> Result<ValidationReport, ValidationError> {
        validate_pathing(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story_with(scenes: &[&str], choices: &[(&str, &str)]) -> Story {
        let mut story = Story::new();
        for name in scenes {
            story
                .add_scene(*name, format!("{name} text"), format!("{name}.jpg"))
                .unwrap();
        }
        for (from, to) in choices {
            story.add_choice(from, format!("to {to}"), *to).unwrap();
        }
        story
    }

    fn unreachable_names(report: &ValidationReport) -> Vec<&str> {
        report.unreachable.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn test_empty_story_fails_with_no_scenes_defined() {
        let story = Story::new();

        let result = story.validate();

        assert_eq!(result.unwrap_err(), ValidationError::NoScenesDefined);
    }

    #[test]
    fn test_single_choice_story_is_clean() {
        // Arrange
        let story = story_with(&["Scene 0", "Scene 1"], &[("Scene 0", "Scene 1")]);

        // Act
        let report = story.validate().unwrap();

        // Assert
        assert!(report.is_clean());
    }

    #[test]
    fn test_scene_without_incoming_choice_is_reported_unreachable() {
        let story = story_with(&["Scene 0", "Scene 1"], &[]);

        let report = story.validate().unwrap();

        assert_eq!(unreachable_names(&report), ["Scene 1"]);
    }

    #[test]
    fn test_dangling_reference_fails_naming_destination() {
        // Arrange
        let story = story_with(&["Scene 0"], &[("Scene 0", "Scene 1")]);

        // Act
        let result = story.validate();

        // Assert
        assert_eq!(
            result.unwrap_err(),
            ValidationError::DanglingReference {
                from: "Scene 0".to_owned(),
                to: "Scene 1".to_owned(),
            }
        );
    }

    #[test]
    fn test_dangling_reference_wins_over_unreachable_warnings() {
        // Arrange: "Orphan" is unreachable and "Lonely" dangles from it.
        let story = story_with(&["A", "B", "Orphan"], &[("A", "B"), ("Orphan", "Lonely")]);

        // Act
        let result = story.validate();

        // Assert
        assert_eq!(
            result.unwrap_err(),
            ValidationError::DanglingReference {
                from: "Orphan".to_owned(),
                to: "Lonely".to_owned(),
            }
        );
    }

    #[test]
    fn test_dangling_reference_fails_even_when_other_scenes_are_valid() {
        let story = story_with(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A"), ("C", "Missing")],
        );

        let result = story.validate();

        assert!(matches!(
            result,
            Err(ValidationError::DanglingReference { ref to, .. }) if to == "Missing"
        ));
    }

    #[test]
    fn test_chain_is_fully_reachable() {
        let story = story_with(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);

        let report = story.validate().unwrap();

        assert!(report.is_clean());
    }

    #[test]
    fn test_chain_authored_out_of_order_is_fully_reachable() {
        // Arrange: entry is A, but C is defined before B.
        let story = story_with(&["A", "C", "B"], &[("B", "C"), ("A", "B")]);

        // Act
        let report = story.validate().unwrap();

        // Assert
        assert!(report.is_clean());
    }

    #[test]
    fn test_forward_reference_resolves_once_scene_is_added() {
        // Arrange
        let mut story = Story::new();
        story.add_scene("A", "a", "a.jpg").unwrap();
        story.add_choice("A", "go", "B").unwrap();
        assert!(story.validate().is_err());

        // Act
        story.add_scene("B", "b", "b.jpg").unwrap();

        // Assert
        assert!(story.validate().unwrap().is_clean());
    }

    #[test]
    fn test_cycles_terminate_and_report_only_unreachable_scenes() {
        // Arrange: A <-> B cycle, C -> D island.
        let story = story_with(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "A"), ("B", "B"), ("C", "D"), ("D", "C")],
        );

        // Act
        let report = story.validate().unwrap();

        // Assert
        assert_eq!(unreachable_names(&report), ["C", "D"]);
    }

    #[test]
    fn test_diamond_reports_each_unreachable_scene_once() {
        // Arrange: a dense graph pushing the same destinations repeatedly.
        let story = story_with(
            &["Start", "L", "R", "End", "Cut1", "Cut2"],
            &[
                ("Start", "L"),
                ("Start", "R"),
                ("Start", "End"),
                ("L", "End"),
                ("R", "End"),
                ("L", "R"),
                ("R", "L"),
                ("Cut1", "End"),
            ],
        );

        // Act
        let report = story.validate().unwrap();

        // Assert
        assert_eq!(unreachable_names(&report), ["Cut1", "Cut2"]);
    }

    #[test]
    fn test_single_scene_story_is_clean() {
        let story = story_with(&["Only"], &[]);

        assert!(story.validate().unwrap().is_clean());
    }
}
