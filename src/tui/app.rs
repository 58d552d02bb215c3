//! Application state for the TUI.

use std::time::Instant;

use crate::core::{split_hashtags, Entry};
use crate::error::MindfulError;
use crate::features::mood::Mood;
use crate::state::AppState;
use crate::tui::cues::TerminalCues;

/// Screens reachable with Tab / Shift-Tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    /// Guided breathing.
    #[default]
    Breathe,
    /// Mood check-ins.
    Mood,
    /// Journal entries.
    Journal,
    /// Gratitude log.
    Gratitude,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Self; 4] = [Self::Breathe, Self::Mood, Self::Journal, Self::Gratitude];

    /// Tab title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Breathe => "Breathe",
            Self::Mood => "Mood",
            Self::Journal => "Journal",
            Self::Gratitude => "Gratitude",
        }
    }

    /// Position in [`Tab::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Breathe => 0,
            Self::Mood => 1,
            Self::Journal => 2,
            Self::Gratitude => 3,
        }
    }

    const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Key bindings shown in the status bar.
    #[must_use]
    pub const fn help(self) -> &'static str {
        match self {
            Self::Breathe => {
                "space:start/stop | r:reset | s:save | c:clear | m:sound | v:vibration | tab:next | q:quit"
            }
            Self::Mood => "←/→:mood | enter:record | n:with note | ↑/↓:select | d:delete | tab:next | q:quit",
            Self::Journal => "a:write | /:search | ←/→:mood | ↑/↓:select | d:delete | tab:next | q:quit",
            Self::Gratitude => "a:add | e:edit | ↑/↓:select | d:delete | tab:next | q:quit",
        }
    }
}

/// What the text input line is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    /// Note for a mood check-in.
    MoodNote,
    /// New journal entry.
    JournalEntry,
    /// Journal search query; `#tag` matches a tag exactly.
    JournalSearch,
    /// New gratitude entry.
    GratitudeAdd,
    /// Replacement text for the gratitude entry at this position.
    GratitudeEdit(usize),
}

impl InputPurpose {
    /// Prompt shown above the input line.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::MoodNote => " Mood note (#tags allowed) ",
            Self::JournalEntry => " Journal entry (#tags allowed) ",
            Self::JournalSearch => " Search journal (#tag or text, empty clears) ",
            Self::GratitudeAdd => " I'm grateful for... (#tags allowed) ",
            Self::GratitudeEdit(_) => " Edit gratitude entry ",
        }
    }
}

/// Text being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Where the text goes on Enter.
    pub purpose: InputPurpose,
    /// Typed text.
    pub buffer: String,
}

/// Application state.
pub struct App {
    /// Logs and the breathing controller.
    pub state: AppState<TerminalCues>,
    /// Visible tab.
    pub tab: Tab,
    /// Selected row in the visible tab's list.
    pub selected: usize,
    /// Mood picked on the mood tab.
    pub mood_choice: Mood,
    /// Mood attached to new journal entries.
    pub journal_mood: Option<Mood>,
    /// Active journal filter.
    pub journal_query: String,
    /// Open text input, if any.
    pub input: Option<Input>,
    /// Status message to display.
    pub status: Option<String>,
}

impl App {
    /// Create a new app showing `tab`.
    #[must_use]
    pub fn new(state: AppState<TerminalCues>, tab: Tab) -> Self {
        let status = match tab {
            Tab::Breathe => "Press space to begin",
            Tab::Mood => "How are you feeling?",
            Tab::Journal => "Press a to write",
            Tab::Gratitude => "Press a to add something you're grateful for",
        };
        Self {
            state,
            tab,
            selected: 0,
            mood_choice: Mood::default(),
            journal_mood: None,
            journal_query: String::new(),
            input: None,
            status: Some(status.to_string()),
        }
    }

    /// Give the state back, e.g. to report what was logged.
    #[must_use]
    pub fn into_state(self) -> AppState<TerminalCues> {
        self.state
    }

    /// Run due ticks and pick up any cue message.
    ///
    /// Returns true if the terminal bell should ring.
    pub fn on_clock(&mut self, now: Instant) -> bool {
        let controller = self.state.breathing_mut();
        controller.pump(now);
        let cues = controller.cues_mut();
        let message = cues.take_message();
        let bell = cues.take_bell();
        if let Some(message) = message {
            self.status = Some(message);
        }
        bell
    }

    /// Start or stop breathing.
    pub fn toggle(&mut self) {
        let controller = self.state.breathing_mut();
        controller.toggle();
        self.status = Some(if controller.is_active() {
            controller.phase().prompt().to_string()
        } else {
            "Paused".to_string()
        });
    }

    /// Reset to the start of the cycle.
    pub fn reset(&mut self) {
        self.state.breathing_mut().reset();
        self.status = Some("Reset".to_string());
    }

    /// Save the current session.
    pub fn save(&mut self) {
        self.state.save_breathing_session();
        self.status = self.state.breathing_mut().cues_mut().take_message();
    }

    /// Forget every saved breathing session.
    pub fn clear_sessions(&mut self) {
        let removed = self.state.clear_breathing_sessions();
        self.selected = 0;
        self.status = Some(format!("Cleared {removed} session(s)"));
    }

    /// Flip the sound setting.
    pub fn toggle_sound(&mut self) {
        let on = self.state.breathing_mut().cues_mut().toggle_sound();
        self.status = Some(format!("Sound: {}", on_off(on)));
    }

    /// Flip the vibration setting.
    pub fn toggle_vibration(&mut self) {
        let on = self.state.breathing_mut().cues_mut().toggle_vibration();
        self.status = Some(format!("Vibration: {}", on_off(on)));
    }

    /// Show key bindings.
    pub fn show_help(&mut self) {
        self.status = Some(self.tab.help().to_string());
    }

    /// Move to the next tab.
    pub fn next_tab(&mut self) {
        self.switch_tab(self.tab.next());
    }

    /// Move to the previous tab.
    pub fn prev_tab(&mut self) {
        self.switch_tab(self.tab.prev());
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.selected = 0;
        self.input = None;
        self.status = None;
    }

    /// Number of rows in the visible tab's list.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        match self.tab {
            Tab::Breathe => self.state.breathing_sessions().len(),
            Tab::Mood => self.state.moods().len(),
            Tab::Journal => self.journal_matches().len(),
            Tab::Gratitude => self.state.gratitude().len(),
        }
    }

    /// Journal positions that pass the active filter.
    #[must_use]
    pub fn journal_matches(&self) -> Vec<usize> {
        let journal = self.state.journal();
        match self.journal_query.strip_prefix('#') {
            Some(tag) => journal
                .entries()
                .iter()
                .enumerate()
                .filter(|(_, e)| e.has_tag(tag))
                .map(|(i, _)| i)
                .collect(),
            None => journal
                .search(&self.journal_query)
                .map(|(i, _)| i)
                .collect(),
        }
    }

    /// Select the next row.
    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    /// Select the previous row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.visible_len().saturating_sub(1));
    }

    /// Step the mood picker on the mood or journal tab.
    pub fn shift_mood(&mut self, up: bool) {
        match self.tab {
            Tab::Mood => {
                let score = if up {
                    self.mood_choice.score().saturating_add(1)
                } else {
                    self.mood_choice.score().saturating_sub(1)
                };
                if let Some(mood) = Mood::from_score(score) {
                    self.mood_choice = mood;
                }
            }
            Tab::Journal => {
                self.journal_mood = match (self.journal_mood, up) {
                    (None, true) => Some(Mood::Awful),
                    (None, false) => Some(Mood::Great),
                    (Some(mood), true) => mood.score().checked_add(1).and_then(Mood::from_score),
                    (Some(mood), false) => mood.score().checked_sub(1).and_then(Mood::from_score),
                };
            }
            Tab::Breathe | Tab::Gratitude => {}
        }
    }

    /// Record the picked mood without a note.
    pub fn record_mood(&mut self) {
        let mood = self.mood_choice;
        let result = self.state.record_mood(mood, None, &[]).map(|_| ());
        self.finish(result, format!("Recorded {mood}"));
        self.selected = self.visible_len().saturating_sub(1);
    }

    /// Open the text input.
    pub fn begin_input(&mut self, purpose: InputPurpose) {
        let buffer = match purpose {
            InputPurpose::JournalSearch => self.journal_query.clone(),
            InputPurpose::GratitudeEdit(index) => self
                .state
                .gratitude()
                .entries()
                .get(index)
                .map(|e| {
                    std::iter::once(e.text.clone())
                        .chain(e.tags.iter().map(|t| format!("#{t}")))
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default(),
            InputPurpose::MoodNote | InputPurpose::JournalEntry | InputPurpose::GratitudeAdd => {
                String::new()
            }
        };
        self.input = Some(Input { purpose, buffer });
        self.status = Some("enter:save | esc:cancel".to_string());
    }

    /// Edit the selected gratitude entry.
    pub fn edit_selected(&mut self) {
        if self.tab == Tab::Gratitude && self.selected < self.state.gratitude().len() {
            self.begin_input(InputPurpose::GratitudeEdit(self.selected));
        }
    }

    /// Append a typed character.
    pub fn input_char(&mut self, c: char) {
        if let Some(input) = self.input.as_mut() {
            input.buffer.push(c);
        }
    }

    /// Delete the last typed character.
    pub fn input_backspace(&mut self) {
        if let Some(input) = self.input.as_mut() {
            input.buffer.pop();
        }
    }

    /// Close the input without saving.
    pub fn cancel_input(&mut self) {
        self.input = None;
        self.status = Some("Cancelled".to_string());
    }

    /// Save the typed text where it belongs.
    ///
    /// On a validation error the input stays open so it can be fixed.
    pub fn submit_input(&mut self) {
        let Some(input) = self.input.take() else {
            return;
        };
        let (text, tags) = split_hashtags(&input.buffer);

        let result = match input.purpose {
            InputPurpose::MoodNote => {
                let mood = self.mood_choice;
                self.state
                    .record_mood(mood, Some(&text), &tags)
                    .map(|_| format!("Recorded {mood}"))
            }
            InputPurpose::JournalEntry => self
                .state
                .add_journal_entry(&text, self.journal_mood, &tags)
                .map(|_| "Journal entry saved".to_string()),
            InputPurpose::JournalSearch => {
                self.journal_query = input.buffer.trim().to_string();
                self.selected = 0;
                let found = self.journal_matches().len();
                self.status = Some(format!("{found} matching entries"));
                return;
            }
            InputPurpose::GratitudeAdd => self
                .state
                .add_gratitude(&text, &tags)
                .map(|_| "Gratitude entry saved".to_string()),
            InputPurpose::GratitudeEdit(index) => self
                .state
                .edit_gratitude(index, &text, &tags)
                .map(|_| "Gratitude entry updated".to_string()),
        };

        match result {
            Ok(message) => {
                self.status = Some(message);
                if !matches!(input.purpose, InputPurpose::GratitudeEdit(_)) {
                    self.selected = self.visible_len().saturating_sub(1);
                }
            }
            Err(e) => {
                self.status = Some(e.to_string());
                self.input = Some(input);
            }
        }
    }

    /// Delete the selected row on a log tab.
    pub fn delete_selected(&mut self) {
        let result = match self.tab {
            Tab::Breathe => return,
            Tab::Mood => self.state.remove_mood(self.selected).map(|_| ()),
            Tab::Journal => match self.journal_matches().get(self.selected) {
                Some(&index) => self.state.remove_journal_entry(index).map(|_| ()),
                None => Err(MindfulError::EntryNotFound(self.selected)),
            },
            Tab::Gratitude => self.state.remove_gratitude(self.selected).map(|_| ()),
        };
        self.finish(result, "Deleted".to_string());
        self.clamp_selection();
    }

    fn finish(&mut self, result: Result<(), MindfulError>, message: String) {
        self.status = Some(match result {
            Ok(()) => message,
            Err(e) => e.to_string(),
        });
    }
}

/// Render a flag as On/Off.
#[must_use]
pub const fn on_off(flag: bool) -> &'static str {
    if flag {
        "On"
    } else {
        "Off"
    }
}
