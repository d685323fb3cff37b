/// Top-level behavioral mode of the pet.
///
/// Exactly one goal is active at a time. Goals are plain tags: the targets
/// they move toward live on [`PetState`](super::PetState), and the
/// transitions between them are driven by [`PetEngine`](crate::PetEngine).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goal {
    /// Standing around.
    #[default]
    Idle,
    /// Sitting in place.
    Sit,
    /// Walking toward the character.
    Follow,
    /// Walking toward the resource.
    GoToResource,
    /// Eating or drinking at the resource.
    UsingResource,
}

impl Goal {
    /// Returns true for goals that drive the motion driver on fast ticks.
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, Goal::Follow | Goal::GoToResource)
    }

    /// Goal entered once a moving goal reaches its target.
    pub fn on_arrival(self) -> Option<Goal> {
        match self {
            Goal::Follow => Some(Goal::Sit),
            Goal::GoToResource => Some(Goal::UsingResource),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn only_follow_and_go_to_resource_move() {
        let moving: Vec<Goal> = Goal::iter().filter(|goal| goal.is_moving()).collect();
        assert_eq!(moving, vec![Goal::Follow, Goal::GoToResource]);
    }

    #[test]
    fn arrival_targets() {
        assert_eq!(Goal::Follow.on_arrival(), Some(Goal::Sit));
        assert_eq!(Goal::GoToResource.on_arrival(), Some(Goal::UsingResource));
        assert_eq!(Goal::Sit.on_arrival(), None);
    }

    #[test]
    fn display_uses_variant_name() {
        assert_eq!(Goal::GoToResource.to_string(), "GoToResource");
    }
}
