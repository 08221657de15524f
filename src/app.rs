//! Application state and core logic

use crate::config::IntakeConfig;
use crate::drafts::{Debouncer, DraftStore};
use crate::event::AppEvent;
use crate::platform;
use crate::service::{EmailMessage, SimulatedService, SubmissionService};
use crate::state::{
    AppState, EmailStatus, FieldId, FieldKind, Form, FormAction, FormSnapshot, InFlight,
    NotificationKind, SaveStatus, Submitted, View,
};
use crate::summary::{ExportDocument, SubmissionRecord};
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// How long the success notification stays after a submission
const SUBMITTED_NOTIFICATION: Duration = Duration::from_millis(5000);

/// What caused a draft save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveTrigger {
    Auto,
    Manual,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Drafts saved during this session
    pub drafts: DraftStore,
    service: Arc<dyn SubmissionService>,
    autosave: Debouncer<AppEvent>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    config: IntakeConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create an App backed by the simulated service
    pub fn new(config: IntakeConfig) -> Self {
        let service = SimulatedService::new(config.submission_delay(), config.email_delay());
        Self::with_service(config, Arc::new(service))
    }

    pub fn with_service(config: IntakeConfig, service: Arc<dyn SubmissionService>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            drafts: DraftStore::new(config.max_drafts()),
            service,
            autosave: Debouncer::new(config.autosave_delay(), events_tx.clone()),
            events_tx,
            events_rx,
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    #[cfg(test)]
    pub fn autosave_pending(&self) -> bool {
        self.autosave.is_pending()
    }

    fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let duration = self.config.notification_duration();
        self.state.notify(message, kind, duration);
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Esc dismisses a notification before anything else sees it
        if key.code == KeyCode::Esc && self.state.notification.is_some() {
            self.state.dismiss_notification();
            return Ok(());
        }

        match self.state.current_view {
            View::Form => {
                let before = self.state.form.snapshot().clone();
                self.handle_form_key(key)?;
                self.schedule_autosave_if_changed(&before);
            }
            View::Summary => self.handle_summary_key(key),
        }
        Ok(())
    }

    /// Any edit that leaves the form non-blank restarts the autosave timer
    fn schedule_autosave_if_changed(&mut self, before: &FormSnapshot) {
        let snapshot = self.state.form.snapshot();
        if self.state.current_view != View::Form
            || snapshot == before
            || *snapshot == FormSnapshot::new()
        {
            return;
        }
        self.state.save_status = SaveStatus::Saving;
        self.autosave.schedule(AppEvent::AutosaveDue);
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let command = platform::is_command(key.modifiers);
        match key.code {
            KeyCode::Char('s') if command => self.save_draft(SaveTrigger::Manual),
            KeyCode::Char('r') if command => self.restore_latest_draft(),
            // Shortcut submits only a form that would pass
            KeyCode::Enter if command => {
                if self.state.form.is_valid() && !self.state.submitting {
                    self.submit();
                }
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            _ => match self.state.form.active() {
                Some(field) => self.handle_field_key(field, key)?,
                None => self.handle_actions_key(key),
            },
        }
        Ok(())
    }

    fn handle_field_key(&mut self, field: FieldId, key: KeyEvent) -> Result<()> {
        let form = &mut self.state.form;
        let chorded = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
        match (field.kind(), key.code) {
            // Unbound shortcuts never type their letter
            (_, KeyCode::Char(_)) if chorded => {}
            (FieldKind::ShortText, KeyCode::Enter) => form.next_field(),
            (FieldKind::LongText, KeyCode::Enter) => form.newline()?,
            (FieldKind::ShortText | FieldKind::LongText | FieldKind::File, KeyCode::Char(c)) => {
                form.push_char(c)?
            }
            (FieldKind::ShortText | FieldKind::LongText | FieldKind::File, KeyCode::Backspace) => {
                form.pop_char()?
            }
            (FieldKind::Choice(_), KeyCode::Right | KeyCode::Char(' ')) => {
                form.cycle_choice(field, true)?
            }
            (FieldKind::Choice(_), KeyCode::Left) => form.cycle_choice(field, false)?,
            (FieldKind::Flag, KeyCode::Char(' ') | KeyCode::Enter) => form.toggle_flag(field)?,
            (FieldKind::File, KeyCode::Enter) => self.attach_file()?,
            (FieldKind::File, KeyCode::Delete) => form.detach_file(field)?,
            (FieldKind::MultiSelect(options), KeyCode::Right) => {
                form.option_cursor = (form.option_cursor + 1) % options.len();
            }
            (FieldKind::MultiSelect(options), KeyCode::Left) => {
                form.option_cursor = (form.option_cursor + options.len() - 1) % options.len();
            }
            (FieldKind::MultiSelect(options), KeyCode::Char(' ') | KeyCode::Enter) => {
                if let Some(option) = options.get(form.option_cursor) {
                    form.toggle_interest(option)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_actions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.form.prev_button(),
            KeyCode::Right | KeyCode::Char('l') => self.state.form.next_button(),
            KeyCode::Enter => match self.state.form.selected_action() {
                FormAction::Submit => self.submit(),
                FormAction::SaveDraft => self.save_draft(SaveTrigger::Manual),
                FormAction::RestoreDraft => self.restore_latest_draft(),
                FormAction::Reset => self.reset_form(),
            },
            _ => {}
        }
    }

    fn handle_summary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('d') => self.export_summary(),
            KeyCode::Char('n') => {
                self.autosave.cancel();
                self.state.start_over();
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn attach_file(&mut self) -> Result<()> {
        match self.state.form.attach_from_input() {
            Ok(Some((field, file))) => {
                let what = if field == FieldId::CvFile {
                    "CV"
                } else {
                    "Portfolio"
                };
                tracing::info!(field = %field, name = %file.name, size = file.size, "Attached file");
                self.notify(
                    format!("{what} uploaded: {}", file.name),
                    NotificationKind::Success,
                );
            }
            Ok(None) => {}
            Err(crate::error::FormError::FileNotFound(path)) => {
                self.notify(format!("File not found: {path}"), NotificationKind::Error);
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn reset_form(&mut self) {
        self.autosave.cancel();
        self.state.form.reset();
        self.state.save_status = SaveStatus::Idle;
        self.notify("Form reset", NotificationKind::Info);
    }

    // ─── Drafts ─────────────────────────────────────────────────────────────

    fn save_draft(&mut self, trigger: SaveTrigger) {
        if trigger == SaveTrigger::Manual {
            self.autosave.cancel();
        }
        match self.drafts.save(self.state.form.snapshot()) {
            Ok(timestamp) => {
                self.state.save_status = SaveStatus::Saved;
                self.state.last_saved_at = Some(timestamp);
                let message = match trigger {
                    SaveTrigger::Auto => "Draft saved automatically",
                    SaveTrigger::Manual => "Draft saved manually",
                };
                self.notify(message, NotificationKind::Success);
            }
            Err(e) => {
                tracing::warn!("Failed to save draft: {e}");
                self.state.save_status = SaveStatus::Error;
                self.notify("Failed to save draft", NotificationKind::Error);
            }
        }
    }

    fn restore_latest_draft(&mut self) {
        let restored = self
            .drafts
            .latest()
            .and_then(|draft| match draft {
                Some(draft) => draft.restore_into(&mut self.state.form).map(|_| true),
                None => Ok(false),
            });
        match restored {
            Ok(true) => self.notify("Draft restored", NotificationKind::Success),
            Ok(false) => self.notify("No saved draft to restore", NotificationKind::Info),
            Err(e) => {
                tracing::warn!("Failed to restore draft: {e}");
                self.notify("Failed to restore draft", NotificationKind::Error);
            }
        }
    }

    // ─── Submission ─────────────────────────────────────────────────────────

    /// Validate and hand the captured snapshot to the service.
    /// Ignored while another submission is in flight.
    pub fn submit(&mut self) {
        if self.state.submitting {
            tracing::debug!("Submission already in flight");
            return;
        }
        let snapshot = match self.state.form.try_submit() {
            Ok(snapshot) => snapshot,
            Err(blocked) => {
                tracing::debug!(
                    field = %blocked.field,
                    message = %blocked.message,
                    errors = blocked.error_count,
                    "Submission blocked"
                );
                self.notify(
                    "Please fix all errors before submitting",
                    NotificationKind::Error,
                );
                return;
            }
        };

        let record = SubmissionRecord::from_snapshot(&snapshot, Utc::now());
        self.state.submitting = true;
        self.state.in_flight = Some(InFlight {
            send_copy: snapshot.flag(FieldId::SendCopyToEmail),
            snapshot,
            record: record.clone(),
        });

        let service = Arc::clone(&self.service);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = service.submit(record).await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::SubmissionFinished(result));
        });
    }

    fn send_confirmation(&mut self, record: &SubmissionRecord) {
        self.state.email_status = EmailStatus::Sending;
        let message = EmailMessage::confirmation(record);
        let service = Arc::clone(&self.service);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = service.send_email(message).await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::EmailFinished(result));
        });
    }

    fn export_summary(&mut self) {
        let Some(submitted) = &self.state.submitted else {
            return;
        };
        let document =
            ExportDocument::from_snapshot(&submitted.snapshot, submitted.record.submission_date);
        match document.write_to(&self.config.export_dir()) {
            Ok(_) => self.notify("Application summary downloaded", NotificationKind::Success),
            Err(e) => {
                tracing::warn!("Failed to export summary: {e}");
                self.notify("Failed to download summary", NotificationKind::Error);
            }
        }
    }

    // ─── Background events ──────────────────────────────────────────────────

    /// Handle every event already delivered, without waiting
    pub fn process_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Wait for the next background event
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AutosaveDue => {
                if self.state.current_view == View::Form {
                    self.save_draft(SaveTrigger::Auto);
                }
            }
            AppEvent::SubmissionFinished(result) => {
                self.state.submitting = false;
                let Some(in_flight) = self.state.in_flight.take() else {
                    return;
                };
                match result {
                    Ok(receipt) => {
                        tracing::info!(id = %receipt.id, "Submission accepted");
                        self.autosave.cancel();
                        self.state.current_view = View::Summary;
                        self.state.notify(
                            "Application submitted successfully!",
                            NotificationKind::Success,
                            SUBMITTED_NOTIFICATION,
                        );
                        if in_flight.send_copy && !in_flight.record.email.is_empty() {
                            self.send_confirmation(&in_flight.record);
                        }
                        self.state.submitted = Some(Submitted {
                            snapshot: in_flight.snapshot,
                            record: in_flight.record,
                            receipt,
                        });
                    }
                    Err(e) => {
                        tracing::warn!("Submission failed: {e}");
                        self.notify(
                            "Submission failed. Please try again.",
                            NotificationKind::Error,
                        );
                    }
                }
            }
            AppEvent::EmailFinished(Ok(id)) => {
                tracing::info!(%id, "Confirmation email sent");
                self.state.email_status = EmailStatus::Sent;
                self.notify("Confirmation email sent!", NotificationKind::Success);
            }
            AppEvent::EmailFinished(Err(e)) => {
                tracing::warn!("Failed to send confirmation email: {e}");
                self.state.email_status = EmailStatus::Failed;
                self.notify("Failed to send confirmation email", NotificationKind::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{MockSubmissionService, SubmissionReceipt};
    use crate::state::fixtures::{text, valid_snapshot};
    use crate::state::FieldValue;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn receipt() -> SubmissionReceipt {
        SubmissionReceipt {
            id: "app-1".to_string(),
            received_at: Utc::now(),
        }
    }

    fn app_with(mock: MockSubmissionService) -> App {
        App::with_service(IntakeConfig::default(), Arc::new(mock))
    }

    /// Fill the form through the controller so no autosave is scheduled
    fn fill_valid(app: &mut App, email: &str) {
        for (field, value) in valid_snapshot().iter() {
            app.state.form.update_field(field, value.clone()).unwrap();
        }
        app.state
            .form
            .update_field(FieldId::Email, text(email))
            .unwrap();
    }

    fn notification(app: &App) -> &str {
        app.state
            .notification
            .as_ref()
            .map(|n| n.message.as_str())
            .unwrap_or("")
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_shows_summary_and_sends_email() {
            let mut mock = MockSubmissionService::new();
            mock.expect_submit().times(1).returning(|_| Ok(receipt()));
            mock.expect_send_email()
                .withf(|m| {
                    m.to == "applicant@example.com"
                        && m.subject == "HPAIR Application Confirmation"
                        && m.data.cv_file_name == "cv.pdf"
                })
                .times(1)
                .returning(|_| Ok("msg_1".to_string()));
            let mut app = app_with(mock);
            fill_valid(&mut app, "applicant@example.com");

            app.submit();
            assert!(app.state.submitting);

            let event = app.next_event().await.unwrap();
            app.handle_event(event);
            assert_eq!(app.state.current_view, View::Summary);
            assert!(!app.state.submitting);
            assert_eq!(notification(&app), "Application submitted successfully!");
            assert_eq!(
                app.state.notification.as_ref().unwrap().duration,
                Duration::from_millis(5000)
            );
            assert_eq!(app.state.email_status, EmailStatus::Sending);
            assert_eq!(app.state.submitted.as_ref().unwrap().receipt.id, "app-1");

            let event = app.next_event().await.unwrap();
            app.handle_event(event);
            assert_eq!(app.state.email_status, EmailStatus::Sent);
            assert_eq!(notification(&app), "Confirmation email sent!");
        }

        #[tokio::test]
        async fn test_no_email_without_address() {
            let mut mock = MockSubmissionService::new();
            mock.expect_submit().times(1).returning(|_| Ok(receipt()));
            mock.expect_send_email().never();
            let mut app = app_with(mock);
            fill_valid(&mut app, "");

            app.submit();
            let event = app.next_event().await.unwrap();
            app.handle_event(event);
            assert_eq!(app.state.current_view, View::Summary);
            assert_eq!(app.state.email_status, EmailStatus::Idle);
        }

        #[tokio::test]
        async fn test_no_email_when_copy_declined_at_submit_time() {
            let mut mock = MockSubmissionService::new();
            mock.expect_submit().times(1).returning(|_| Ok(receipt()));
            mock.expect_send_email().never();
            let mut app = app_with(mock);
            fill_valid(&mut app, "applicant@example.com");
            app.state
                .form
                .update_field(FieldId::SendCopyToEmail, FieldValue::Flag(false))
                .unwrap();

            app.submit();
            // Re-enabling after submit does not affect the in-flight decision
            app.state
                .form
                .update_field(FieldId::SendCopyToEmail, FieldValue::Flag(true))
                .unwrap();
            let event = app.next_event().await.unwrap();
            app.handle_event(event);
            assert_eq!(app.state.email_status, EmailStatus::Idle);
        }

        #[tokio::test]
        async fn test_edits_after_submit_do_not_leak() {
            let mut mock = MockSubmissionService::new();
            mock.expect_submit()
                .withf(|record| record.notes.is_empty())
                .times(1)
                .returning(|_| Ok(receipt()));
            let mut app = app_with(mock);
            fill_valid(&mut app, "");

            app.submit();
            app.state
                .form
                .update_field(FieldId::Notes, text("late edit"))
                .unwrap();
            let event = app.next_event().await.unwrap();
            app.handle_event(event);
            assert_eq!(app.state.submitted.as_ref().unwrap().record.notes, "");
        }

        #[tokio::test]
        async fn test_failure_reenables_submission() {
            let mut mock = MockSubmissionService::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("connection reset")));
            let mut app = app_with(mock);
            fill_valid(&mut app, "");

            app.submit();
            let event = app.next_event().await.unwrap();
            app.handle_event(event);
            assert!(!app.state.submitting);
            assert_eq!(app.state.current_view, View::Form);
            assert_eq!(notification(&app), "Submission failed. Please try again.");
            assert!(app.state.submitted.is_none());
            assert_eq!(app.state.form.snapshot().text(FieldId::Phone), "+1 (555) 123-4567");
        }

        #[tokio::test]
        async fn test_second_submit_while_in_flight_is_ignored() {
            let mut mock = MockSubmissionService::new();
            mock.expect_submit().times(1).returning(|_| Ok(receipt()));
            let mut app = app_with(mock);
            fill_valid(&mut app, "");

            app.submit();
            app.submit();
            let event = app.next_event().await.unwrap();
            app.handle_event(event);
            assert!(app.events_rx.try_recv().is_err());
        }

        #[tokio::test]
        async fn test_email_failure_only_notifies() {
            let mut mock = MockSubmissionService::new();
            mock.expect_submit().times(1).returning(|_| Ok(receipt()));
            mock.expect_send_email()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("smtp down")));
            let mut app = app_with(mock);
            fill_valid(&mut app, "applicant@example.com");

            app.submit();
            for _ in 0..2 {
                let event = app.next_event().await.unwrap();
                app.handle_event(event);
            }
            assert_eq!(app.state.email_status, EmailStatus::Failed);
            assert_eq!(app.state.current_view, View::Summary);
            assert_eq!(notification(&app), "Failed to send confirmation email");
        }

        #[tokio::test]
        async fn test_submit_button_on_blank_form_blocks() {
            let mut mock = MockSubmissionService::new();
            mock.expect_submit().never();
            let mut app = app_with(mock);

            // Walk to the actions row; Submit is the first button
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            assert!(app.state.form.is_buttons_row_active());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(!app.state.submitting);
            assert_eq!(notification(&app), "Please fix all errors before submitting");
            assert_eq!(app.state.form.active(), Some(FieldId::Address));
            assert_eq!(app.state.form.errors().len(), 8);
        }

        #[tokio::test]
        async fn test_shortcut_ignores_invalid_form() {
            let mut mock = MockSubmissionService::new();
            mock.expect_submit().never();
            let mut app = app_with(mock);

            app.handle_key(ctrl(KeyCode::Enter)).await.unwrap();
            assert!(!app.state.submitting);
            assert!(app.state.notification.is_none());
            assert!(app.state.form.errors().is_empty());
        }
    }

    mod drafts {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_typing_burst_saves_once() {
            let mut app = app_with(MockSubmissionService::new());
            for c in "12 Main".chars() {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            assert_eq!(app.state.save_status, SaveStatus::Saving);
            assert!(app.autosave_pending());

            let event = app.next_event().await.unwrap();
            assert!(matches!(event, AppEvent::AutosaveDue));
            app.handle_event(event);

            assert_eq!(app.drafts.len(), 1);
            assert_eq!(app.state.save_status, SaveStatus::Saved);
            assert_eq!(notification(&app), "Draft saved automatically");
            tokio::time::sleep(Duration::from_secs(5)).await;
            assert!(app.events_rx.try_recv().is_err());
        }

        #[tokio::test(start_paused = true)]
        async fn test_navigation_does_not_schedule() {
            let mut app = app_with(MockSubmissionService::new());
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert!(!app.autosave_pending());
            assert_eq!(app.state.save_status, SaveStatus::Idle);
        }

        #[tokio::test]
        async fn test_manual_save_and_restore() {
            let mut app = app_with(MockSubmissionService::new());
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            app.handle_key(ctrl(KeyCode::Char('s'))).await.unwrap();
            assert_eq!(notification(&app), "Draft saved manually");
            assert_eq!(app.drafts.len(), 1);
            assert!(!app.autosave_pending());

            app.state.form.reset();
            app.handle_key(ctrl(KeyCode::Char('r'))).await.unwrap();
            assert_eq!(notification(&app), "Draft restored");
            assert_eq!(app.state.form.snapshot().text(FieldId::Address), "x");
        }

        #[tokio::test]
        async fn test_restore_without_drafts() {
            let mut app = app_with(MockSubmissionService::new());
            app.handle_key(ctrl(KeyCode::Char('r'))).await.unwrap();
            assert_eq!(notification(&app), "No saved draft to restore");
        }
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_choice_cycles_with_arrows() {
            let mut app = app_with(MockSubmissionService::new());
            app.state.form.focus(FieldId::Nationality);
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert!(app.state.form.snapshot().is(FieldId::Nationality, "American"));
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            assert!(app.state.form.snapshot().is(FieldId::Nationality, ""));
        }

        #[tokio::test]
        async fn test_interest_toggle_uses_cursor() {
            let mut app = app_with(MockSubmissionService::new());
            app.state.form.focus(FieldId::Interests);
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert_eq!(
                app.state.form.snapshot().set_items(FieldId::Interests),
                &["Public Policy".to_string()]
            );
        }

        #[tokio::test]
        async fn test_ctrl_letters_do_not_type() {
            let mut app = app_with(MockSubmissionService::new());
            app.handle_key(key(KeyCode::Char('1'))).await.unwrap();
            app.handle_key(ctrl(KeyCode::Char('a'))).await.unwrap();
            app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT))
                .await
                .unwrap();
            app.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT))
                .await
                .unwrap();
            assert_eq!(app.state.form.snapshot().text(FieldId::Address), "1C");
        }

        #[tokio::test]
        async fn test_missing_file_notifies() {
            let mut app = app_with(MockSubmissionService::new());
            app.state.form.focus(FieldId::CvFile);
            for c in "/nope.pdf".chars() {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(notification(&app), "File not found: /nope.pdf");
            assert_eq!(app.state.form.snapshot().file(FieldId::CvFile), None);
        }

        #[tokio::test]
        async fn test_esc_dismisses_notification() {
            let mut app = app_with(MockSubmissionService::new());
            app.handle_key(ctrl(KeyCode::Char('r'))).await.unwrap();
            assert!(app.state.notification.is_some());
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.state.notification.is_none());
        }

        #[tokio::test]
        async fn test_export_keeps_form_values_while_summary_resolves_institution() {
            let dir = std::env::temp_dir().join(format!("intake-app-{}", uuid::Uuid::new_v4()));
            let config = IntakeConfig {
                export_dir: Some(dir.clone()),
                ..Default::default()
            };
            let mut mock = MockSubmissionService::new();
            mock.expect_submit().times(1).returning(|_| Ok(receipt()));
            let mut app = App::with_service(config, Arc::new(mock));
            fill_valid(&mut app, "");
            app.state
                .form
                .update_field(
                    FieldId::CurrentInstitution,
                    FieldValue::Choice("other".to_string()),
                )
                .unwrap();
            app.state
                .form
                .update_field(FieldId::OtherInstitution, text("KAIST"))
                .unwrap();
            app.submit();
            let event = app.next_event().await.unwrap();
            app.handle_event(event);
            assert_eq!(
                app.state.submitted.as_ref().unwrap().record.current_institution,
                "KAIST"
            );

            app.handle_key(key(KeyCode::Char('d'))).await.unwrap();
            let path = std::fs::read_dir(&dir).unwrap().next().unwrap().unwrap().path();
            let exported: serde_json::Value =
                serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
            assert_eq!(exported["currentInstitution"], "other");
            assert_eq!(exported["otherInstitution"], "KAIST");
            assert_eq!(exported["cvFileName"], "cv.pdf");
            std::fs::remove_dir_all(&dir).unwrap();
        }

        #[tokio::test]
        async fn test_summary_keys() {
            let dir = std::env::temp_dir().join(format!("intake-app-{}", uuid::Uuid::new_v4()));
            let config = IntakeConfig {
                export_dir: Some(dir.clone()),
                ..Default::default()
            };
            let mut mock = MockSubmissionService::new();
            mock.expect_submit().times(1).returning(|_| Ok(receipt()));
            let mut app = App::with_service(config, Arc::new(mock));
            fill_valid(&mut app, "");
            app.submit();
            let event = app.next_event().await.unwrap();
            app.handle_event(event);

            app.handle_key(key(KeyCode::Char('d'))).await.unwrap();
            assert_eq!(notification(&app), "Application summary downloaded");
            assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);

            app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
            assert_eq!(app.state.current_view, View::Form);
            assert_eq!(app.state.form.snapshot(), &FormSnapshot::new());

            app.state.current_view = View::Summary;
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
            std::fs::remove_dir_all(&dir).unwrap();
        }
    }
}
