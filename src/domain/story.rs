//! Pivotal Tracker story vocabulary
//!
//! The closed sets of values Pivotal Tracker accepts for story type,
//! story state and task status in a CSV import.

/// Type of a Pivotal Tracker story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StoryType {
    #[default]
    Feature,
    Bug,
    Chore,
    /// Synthetic rows produced from Trello lists
    Epic,
}

impl StoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryType::Feature => "Feature",
            StoryType::Bug => "Bug",
            StoryType::Chore => "Chore",
            StoryType::Epic => "epic",
        }
    }
}

impl std::fmt::Display for StoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current state of a Pivotal Tracker story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StoryState {
    /// Icebox
    #[default]
    Unscheduled,
    Unstarted,
    Started,
    Delivered,
    Accepted,
}

impl StoryState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryState::Unscheduled => "Unscheduled",
            StoryState::Unstarted => "Unstarted",
            StoryState::Started => "Started",
            StoryState::Delivered => "Delivered",
            StoryState::Accepted => "Accepted",
        }
    }

    /// Returns true if the story has been accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, StoryState::Accepted)
    }
}

impl std::fmt::Display for StoryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a story task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Completed,
    NotCompleted,
}

impl TaskStatus {
    /// Maps a Trello check-item state onto a task status
    pub fn from_check_state(state: &str) -> Self {
        if state.trim().eq_ignore_ascii_case("complete") {
            TaskStatus::Completed
        } else {
            TaskStatus::NotCompleted
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "completed",
            TaskStatus::NotCompleted => "Not Completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
