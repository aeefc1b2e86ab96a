//! The play/pause control.
//!
//! The page has one button whose displayed text doubles as its state:
//! "Pause" is shown while playing and "Play" while paused. The label stays
//! the source of truth here, quirks included: a click turns the exact
//! label "Play" into "Pause" and anything else into "Play".

/// Label shown while the control is paused.
pub const PLAY_LABEL: &str = "Play";

/// Label shown while the control is playing.
pub const PAUSE_LABEL: &str = "Pause";

/// Playback state as read off the displayed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

/// A two-state toggle keyed on its displayed label.
///
/// The initial label comes from the caller, as it comes from the markup on
/// the page, and is not validated.
#[derive(Debug, Clone)]
pub struct PlayPauseButton {
    label: String,
}

impl PlayPauseButton {
    pub fn new(initial_label: impl Into<String>) -> Self {
        PlayPauseButton { label: initial_label.into() }
    }

    /// The currently displayed label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// State implied by the label: exactly [`PLAY_LABEL`] means paused,
    /// everything else counts as playing.
    pub fn state(&self) -> PlaybackState {
        if self.label == PLAY_LABEL {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        }
    }

    /// One activation of the control. Returns the new label.
    pub fn click(&mut self) -> &str {
        if self.label == PLAY_LABEL {
            self.label = PAUSE_LABEL.to_owned();
        } else {
            self.label = PLAY_LABEL.to_owned();
        }
        &self.label
    }
}
