use std::time::Duration;

use chrono_tz::Tz;
use crossterm::event::{self, Event, KeyEvent};
use engine::{
    Account, BillDraft, BillRegister, EngineError, Field, NOTE_MAX_CHARS, ValidationError,
};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui,
    ui::keymap::AppAction,
};

/// What currently receives keystrokes: one of the form fields or the
/// entry list below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Entries,
}

const FOCUS_RING: [Focus; 5] = [
    Focus::Field(Field::Amount),
    Focus::Field(Field::FromAccount),
    Focus::Field(Field::Date),
    Focus::Field(Field::Note),
    Focus::Entries,
];

#[derive(Debug, Default)]
pub struct FormState {
    pub draft: BillDraft,
    errors: Vec<ValidationError>,
}

impl FormState {
    /// The current inline message for `field`, if any.
    #[must_use]
    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|error| error.field() == field)
    }

    fn set_error(&mut self, field: Field, error: Option<ValidationError>) {
        self.errors.retain(|existing| existing.field() != field);
        self.errors.extend(error);
    }

    fn set_errors(&mut self, errors: Vec<ValidationError>) {
        self.errors = errors;
    }

    fn reset(&mut self) {
        self.draft = BillDraft::default();
        self.errors.clear();
    }
}

#[derive(Debug)]
pub struct AppState {
    pub form: FormState,
    pub register: BillRegister,
    pub focus: Focus,
    pub selected: usize,
    pub tz: Tz,
}

impl AppState {
    /// Mirrors the submit control: enabled only while every field is
    /// currently valid and the register is below the cap.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.register.is_full()
            && Field::ALL
                .iter()
                .all(|field| self.form.draft.validate_field(*field, self.tz).is_none())
    }
}

pub struct App {
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let tz: Tz = config
            .timezone
            .parse()
            .map_err(|_| AppError::Timezone(config.timezone.clone()))?;

        let state = AppState {
            form: FormState::default(),
            register: BillRegister::with_max_entries(config.max_entries),
            focus: Focus::Field(Field::Amount),
            selected: 0,
            tz,
        };

        Ok(Self {
            state,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.dispatch(ui::keymap::map_key(key));
    }

    fn dispatch(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => self.should_quit = true,
            AppAction::NextField => self.move_focus(1),
            AppAction::PrevField => self.move_focus(-1),
            AppAction::Submit => self.submit(),
            AppAction::Backspace => self.backspace(),
            AppAction::Delete => self.remove_selected(),
            AppAction::Up => self.up(),
            AppAction::Down => self.down(),
            AppAction::Input(ch) => self.input(ch),
            AppAction::None => {}
        }
    }

    /// Moves focus along the ring, re-validating the field being left.
    fn move_focus(&mut self, step: isize) {
        if let Focus::Field(field) = self.state.focus {
            let error = self.state.form.draft.validate_field(field, self.state.tz);
            self.state.form.set_error(field, error);
        }

        let current = FOCUS_RING
            .iter()
            .position(|focus| *focus == self.state.focus)
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(FOCUS_RING.len() as isize) as usize;
        self.state.focus = FOCUS_RING[next];
    }

    fn input(&mut self, ch: char) {
        let Focus::Field(field) = self.state.focus else {
            return;
        };

        let draft = &mut self.state.form.draft;
        match field {
            Field::Amount => draft.amount.push(ch),
            Field::Date => draft.date.push(ch),
            Field::Note => {
                // Input-time half of the note limit.
                if draft.note.chars().count() < NOTE_MAX_CHARS {
                    draft.note.push(ch);
                }
            }
            // The account is a selector, not a text field.
            Field::FromAccount => {}
        }
    }

    fn backspace(&mut self) {
        let Focus::Field(field) = self.state.focus else {
            return;
        };

        let draft = &mut self.state.form.draft;
        match field {
            Field::Amount => {
                draft.amount.pop();
            }
            Field::Date => {
                draft.date.pop();
            }
            Field::Note => {
                draft.note.pop();
            }
            Field::FromAccount => draft.from_account.clear(),
        }
    }

    fn up(&mut self) {
        match self.state.focus {
            Focus::Field(Field::FromAccount) => {
                cycle_account(&mut self.state.form.draft, -1);
            }
            Focus::Entries => {
                self.state.selected = self.state.selected.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn down(&mut self) {
        match self.state.focus {
            Focus::Field(Field::FromAccount) => {
                cycle_account(&mut self.state.form.draft, 1);
            }
            Focus::Entries => {
                if !self.state.register.is_empty() {
                    self.state.selected =
                        (self.state.selected + 1).min(self.state.register.len() - 1);
                }
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        if self.state.register.is_full() {
            // The submit control is disabled at the cap.
            return;
        }

        match self
            .state
            .register
            .submit(&self.state.form.draft, self.state.tz)
        {
            Ok(_) => {
                self.state.form.reset();
                self.state.focus = Focus::Field(Field::Amount);
            }
            Err(EngineError::Validation(errors)) => self.state.form.set_errors(errors),
            Err(EngineError::CapReached(_)) => {}
        }
    }

    fn remove_selected(&mut self) {
        if self.state.focus != Focus::Entries {
            return;
        }

        let Some(entry) = self.state.register.entries().get(self.state.selected) else {
            return;
        };
        let id = entry.id;
        self.state.register.remove_entry(id);

        if self.state.selected >= self.state.register.len() && self.state.selected > 0 {
            self.state.selected -= 1;
        }
    }
}

/// Cycles the account selector through "no selection" and the fixed
/// account set.
fn cycle_account(draft: &mut BillDraft, step: isize) {
    let mut options = vec![""];
    options.extend(Account::ALL.iter().map(|account| account.label()));

    let current = options
        .iter()
        .position(|option| *option == draft.from_account)
        .unwrap_or(0) as isize;
    let next = (current + step).rem_euclid(options.len() as isize) as usize;
    draft.from_account = options[next].to_string();
}

#[cfg(test)]
mod tests {
    use engine::MoneyCents;

    use super::*;

    fn app() -> App {
        App::new(AppConfig::default()).unwrap()
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.dispatch(AppAction::Input(ch));
        }
    }

    /// Fills the form from the Amount field and leaves focus on Note.
    fn fill_bill(app: &mut App, note: &str) {
        app.state.focus = Focus::Field(Field::Amount);
        type_str(app, "25.00");
        app.dispatch(AppAction::NextField);
        app.dispatch(AppAction::Down); // "" -> Checking Account
        app.dispatch(AppAction::NextField);
        type_str(app, "2024-01-15");
        app.dispatch(AppAction::NextField);
        type_str(app, note);
    }

    #[test]
    fn rejects_an_unknown_timezone() {
        let config = AppConfig {
            timezone: "Nowhere/City".to_string(),
            ..AppConfig::default()
        };
        assert!(App::new(config).is_err());
    }

    #[test]
    fn submitting_a_valid_bill_appends_and_resets_the_form() {
        let mut app = app();
        fill_bill(&mut app, "groceries");
        assert!(app.state.can_submit());

        app.dispatch(AppAction::Submit);

        assert_eq!(app.state.register.len(), 1);
        let entry = &app.state.register.entries()[0];
        assert_eq!(entry.amount, MoneyCents::new(2500));
        assert_eq!(entry.from_account, Account::Checking);
        assert_eq!(entry.note, "groceries");

        assert_eq!(app.state.form.draft.amount, "");
        assert_eq!(app.state.form.draft.from_account, "");
        assert_eq!(app.state.form.draft.date, "");
        assert_eq!(app.state.form.draft.note, "");
        assert_eq!(app.state.focus, Focus::Field(Field::Amount));
    }

    #[test]
    fn leaving_a_field_surfaces_its_inline_error() {
        let mut app = app();
        type_str(&mut app, "12.345");

        app.dispatch(AppAction::NextField);

        assert_eq!(
            app.state.form.error_for(Field::Amount),
            Some(&ValidationError::PatternMismatch)
        );
        assert!(!app.state.can_submit());
    }

    #[test]
    fn submitting_an_invalid_draft_reports_every_field() {
        let mut app = app();

        app.dispatch(AppAction::Submit);

        assert!(app.state.register.is_empty());
        for field in Field::ALL {
            assert!(app.state.form.error_for(field).is_some(), "{field:?}");
        }
    }

    #[test]
    fn note_input_stops_at_the_character_limit() {
        let mut app = app();
        app.state.focus = Focus::Field(Field::Note);

        type_str(&mut app, &"a".repeat(40));

        assert_eq!(app.state.form.draft.note.chars().count(), NOTE_MAX_CHARS);
    }

    #[test]
    fn account_selector_cycles_and_wraps() {
        let mut app = app();
        app.state.focus = Focus::Field(Field::FromAccount);

        app.dispatch(AppAction::Down);
        assert_eq!(app.state.form.draft.from_account, "Checking Account");
        app.dispatch(AppAction::Down);
        assert_eq!(app.state.form.draft.from_account, "Own Account");
        app.dispatch(AppAction::Down);
        assert_eq!(app.state.form.draft.from_account, "");
        app.dispatch(AppAction::Up);
        assert_eq!(app.state.form.draft.from_account, "Own Account");
    }

    #[test]
    fn five_bills_disable_submission_until_one_is_removed() {
        let mut app = app();
        for i in 0..5 {
            fill_bill(&mut app, &format!("bill {i}"));
            app.dispatch(AppAction::Submit);
        }

        assert!(app.state.register.is_full());
        assert!(!app.state.can_submit());

        fill_bill(&mut app, "one too many");
        app.dispatch(AppAction::Submit);
        assert_eq!(app.state.register.len(), 5);

        app.state.focus = Focus::Entries;
        app.dispatch(AppAction::Down);
        app.dispatch(AppAction::Down);
        app.dispatch(AppAction::Delete); // removes "bill 2"

        assert_eq!(app.state.register.len(), 4);
        let notes: Vec<_> = app
            .state
            .register
            .entries()
            .iter()
            .map(|entry| entry.note.as_str())
            .collect();
        assert_eq!(notes, ["bill 0", "bill 1", "bill 3", "bill 4"]);
        assert!(!app.state.register.is_full());
    }

    #[test]
    fn selection_clamps_after_removing_the_last_entry() {
        let mut app = app();
        for i in 0..3 {
            fill_bill(&mut app, &format!("bill {i}"));
            app.dispatch(AppAction::Submit);
        }

        app.state.focus = Focus::Entries;
        app.dispatch(AppAction::Down);
        app.dispatch(AppAction::Down);
        assert_eq!(app.state.selected, 2);

        app.dispatch(AppAction::Delete);
        assert_eq!(app.state.selected, 1);

        app.dispatch(AppAction::Delete);
        app.dispatch(AppAction::Delete);
        assert!(app.state.register.is_empty());
        assert_eq!(app.state.selected, 0);

        // Nothing left to remove.
        app.dispatch(AppAction::Delete);
        assert!(app.state.register.is_empty());
    }

    #[test]
    fn removal_keys_are_ignored_while_the_form_has_focus() {
        let mut app = app();
        fill_bill(&mut app, "groceries");
        app.dispatch(AppAction::Submit);

        app.state.focus = Focus::Field(Field::Amount);
        app.dispatch(AppAction::Delete);

        assert_eq!(app.state.register.len(), 1);
    }
}
