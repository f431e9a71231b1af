//! Lead form lifecycle: idle, simulated processing, success and handoff to the
//! scheduling page.
//!
//! The machine never touches the browser. Every accepted event returns the
//! [`Command`] the caller has to carry out (arm a timer or redirect), which
//! keeps the whole sequence testable without a clock.

use std::fmt;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::config::SiteConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Phone,
    Company,
    CompanySize,
    PainDescription,
}

impl LeadField {
    pub const REQUIRED: [LeadField; 4] = [
        LeadField::Name,
        LeadField::Email,
        LeadField::Phone,
        LeadField::PainDescription,
    ];
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
            LeadField::Company => "company",
            LeadField::CompanySize => "company size",
            LeadField::PainDescription => "primary constraint",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub company_size: String,
    pub pain_description: String,
}

impl LeadFormData {
    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Phone => self.phone = value,
            LeadField::Company => self.company = value,
            LeadField::CompanySize => self.company_size = value,
            LeadField::PainDescription => self.pain_description = value,
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Company => &self.company,
            LeadField::CompanySize => &self.company_size,
            LeadField::PainDescription => &self.pain_description,
        }
    }

    pub fn first_missing(&self) -> Option<LeadField> {
        LeadField::REQUIRED
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }
}

/// Frozen copy of the form taken when the user submits.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(flatten)]
    pub lead: LeadFormData,
    pub submitted_at: DateTime<Utc>,
    pub attempt: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Failed,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Success => "success",
            SubmissionState::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmissionError {
    #[error("submission already in state '{0}'")]
    InFlight(SubmissionState),
    #[error("required field '{0}' is empty")]
    MissingField(LeadField),
    #[error("lead delivery failed: {0}")]
    Delivery(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    /// Submitting -> Success
    Processing,
    /// Success -> redirect
    Handoff,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Schedule { timer: Timer, after_ms: u32 },
    Redirect(String),
}

/// Where a captured lead goes once processing finishes.
#[cfg_attr(test, mockall::automock)]
pub trait LeadSink {
    fn deliver(&self, submission: &LeadSubmission) -> Result<(), SubmissionError>;
}

/// Stand-in for a backend: logs the lead and reports success.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedSink;

impl LeadSink for SimulatedSink {
    fn deliver(&self, submission: &LeadSubmission) -> Result<(), SubmissionError> {
        let json = serde_json::to_string(submission)
            .map_err(|e| SubmissionError::Delivery(e.to_string()))?;
        info!("Submission received: {}", json);
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct SubmissionMachine {
    state: SubmissionState,
    draft: LeadFormData,
    snapshot: Option<LeadSubmission>,
    attempts: u32,
    last_error: Option<SubmissionError>,
    handed_off: bool,
    destination: String,
    processing_delay_ms: u32,
    handoff_delay_ms: u32,
}

impl SubmissionMachine {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            state: SubmissionState::Idle,
            draft: LeadFormData::default(),
            snapshot: None,
            attempts: 0,
            last_error: None,
            handed_off: false,
            destination: config.scheduling_url.clone(),
            processing_delay_ms: config.processing_delay_ms,
            handoff_delay_ms: config.handoff_delay_ms,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn snapshot(&self) -> Option<&LeadSubmission> {
        self.snapshot.as_ref()
    }

    pub fn last_error(&self) -> Option<&SubmissionError> {
        self.last_error.as_ref()
    }

    /// Keystrokes always land in the draft, never in a captured snapshot.
    pub fn update(&mut self, field: LeadField, value: String) {
        self.draft.set(field, value);
    }

    pub fn submit(&mut self) -> Result<Command, SubmissionError> {
        self.submit_at(Utc::now())
    }

    pub fn submit_at(&mut self, now: DateTime<Utc>) -> Result<Command, SubmissionError> {
        match self.state {
            SubmissionState::Idle | SubmissionState::Failed => {}
            state => {
                debug!("Ignoring submit while {}", state);
                return Err(SubmissionError::InFlight(state));
            }
        }
        if let Some(field) = self.draft.first_missing() {
            return Err(SubmissionError::MissingField(field));
        }

        self.attempts += 1;
        self.snapshot = Some(LeadSubmission {
            lead: self.draft.clone(),
            submitted_at: now,
            attempt: self.attempts,
        });
        self.last_error = None;
        self.state = SubmissionState::Submitting;
        info!("Lead submission started (attempt {})", self.attempts);

        Ok(Command::Schedule {
            timer: Timer::Processing,
            after_ms: self.processing_delay_ms,
        })
    }

    /// Advance on a fired timer. Timers that do not belong to the current
    /// state are dropped.
    pub fn timer_elapsed(&mut self, timer: Timer, sink: &dyn LeadSink) -> Option<Command> {
        match (self.state, timer) {
            (SubmissionState::Submitting, Timer::Processing) => {
                let Some(submission) = self.snapshot.as_ref() else {
                    warn!("Processing finished without a snapshot");
                    return None;
                };
                match sink.deliver(submission) {
                    Ok(()) => {
                        self.state = SubmissionState::Success;
                        info!("Lead submission succeeded, handing off in {}ms", self.handoff_delay_ms);
                        Some(Command::Schedule {
                            timer: Timer::Handoff,
                            after_ms: self.handoff_delay_ms,
                        })
                    }
                    Err(e) => {
                        warn!("Lead submission failed: {}", e);
                        self.state = SubmissionState::Failed;
                        self.last_error = Some(e);
                        None
                    }
                }
            }
            (SubmissionState::Success, Timer::Handoff) if !self.handed_off => {
                self.handed_off = true;
                info!("Redirecting to {}", self.destination);
                Some(Command::Redirect(self.destination.clone()))
            }
            (state, timer) => {
                debug!("Ignoring {:?} timer while {}", timer, state);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled_machine() -> SubmissionMachine {
        let mut machine = SubmissionMachine::new(&SiteConfig::default());
        machine.update(LeadField::Name, "Jane Doe".to_string());
        machine.update(LeadField::Email, "jane@factory.com".to_string());
        machine.update(LeadField::Phone, "+15551234567".to_string());
        machine.update(LeadField::PainDescription, "Manual PO approvals".to_string());
        machine
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    #[derive(Debug, PartialEq)]
    enum Observed {
        State(u64, SubmissionState),
        Redirect(u64, String),
    }

    /// Plays scheduled commands against a virtual clock starting at 0ms.
    fn run_timeline(
        machine: &mut SubmissionMachine,
        first: Command,
        sink: &dyn LeadSink,
    ) -> Vec<Observed> {
        let mut now = 0u64;
        let mut observed = vec![Observed::State(now, machine.state())];
        let mut next = Some(first);
        while let Some(command) = next.take() {
            match command {
                Command::Schedule { timer, after_ms } => {
                    now += u64::from(after_ms);
                    next = machine.timer_elapsed(timer, sink);
                    observed.push(Observed::State(now, machine.state()));
                }
                Command::Redirect(url) => observed.push(Observed::Redirect(now, url)),
            }
        }
        observed
    }

    #[test]
    fn starts_idle_with_empty_draft() {
        let machine = SubmissionMachine::new(&SiteConfig::default());
        assert_eq!(machine.state(), SubmissionState::Idle);
        assert!(machine.snapshot().is_none());
    }

    #[test]
    fn submit_moves_to_submitting_and_schedules_processing() {
        let mut machine = filled_machine();
        let command = machine.submit_at(fixed_time()).unwrap();
        assert_eq!(machine.state(), SubmissionState::Submitting);
        assert_eq!(
            command,
            Command::Schedule {
                timer: Timer::Processing,
                after_ms: 1_500
            }
        );
        let snapshot = machine.snapshot().unwrap();
        assert_eq!(snapshot.lead.name, "Jane Doe");
        assert_eq!(snapshot.attempt, 1);
        assert_eq!(snapshot.submitted_at, fixed_time());
    }

    #[test]
    fn end_to_end_sequence_is_deterministic() {
        let mut machine = filled_machine();
        let first = machine.submit_at(fixed_time()).unwrap();
        let observed = run_timeline(&mut machine, first, &SimulatedSink);
        assert_eq!(
            observed,
            vec![
                Observed::State(0, SubmissionState::Submitting),
                Observed::State(1_500, SubmissionState::Success),
                Observed::State(2_500, SubmissionState::Success),
                Observed::Redirect(
                    2_500,
                    "https://calendly.com/stratai-growth/operations-assessment".to_string()
                ),
            ]
        );
    }

    #[test]
    fn second_submit_while_submitting_is_rejected() {
        let mut machine = filled_machine();
        machine.submit_at(fixed_time()).unwrap();
        let before = machine.snapshot().cloned();

        let err = machine.submit_at(fixed_time()).unwrap_err();
        assert_eq!(err, SubmissionError::InFlight(SubmissionState::Submitting));
        assert_eq!(machine.state(), SubmissionState::Submitting);
        assert_eq!(machine.snapshot().cloned(), before);
    }

    #[test]
    fn submit_after_success_is_rejected() {
        let mut machine = filled_machine();
        machine.submit_at(fixed_time()).unwrap();
        machine.timer_elapsed(Timer::Processing, &SimulatedSink);
        assert_eq!(
            machine.submit_at(fixed_time()),
            Err(SubmissionError::InFlight(SubmissionState::Success))
        );
    }

    #[test]
    fn edits_after_submit_do_not_touch_snapshot() {
        let mut machine = filled_machine();
        machine.submit_at(fixed_time()).unwrap();
        machine.update(LeadField::Name, "Someone Else".to_string());
        machine.update(LeadField::PainDescription, String::new());

        let mut sink = MockLeadSink::new();
        sink.expect_deliver()
            .withf(|submission| {
                submission.lead.name == "Jane Doe"
                    && submission.lead.pain_description == "Manual PO approvals"
            })
            .times(1)
            .returning(|_| Ok(()));
        machine.timer_elapsed(Timer::Processing, &sink);
        assert_eq!(machine.state(), SubmissionState::Success);
    }

    #[test]
    fn blank_required_field_blocks_submit() {
        let mut machine = filled_machine();
        machine.update(LeadField::Phone, "   ".to_string());
        assert_eq!(
            machine.submit_at(fixed_time()),
            Err(SubmissionError::MissingField(LeadField::Phone))
        );
        assert_eq!(machine.state(), SubmissionState::Idle);
        assert!(machine.snapshot().is_none());
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let mut machine = filled_machine();
        assert!(machine.submit_at(fixed_time()).is_ok());
        let snapshot = machine.snapshot().unwrap();
        assert!(snapshot.lead.company.is_empty());
        assert!(snapshot.lead.company_size.is_empty());
        assert!(!LeadField::REQUIRED.contains(&LeadField::Company));
        assert!(LeadField::REQUIRED.contains(&LeadField::PainDescription));
    }

    #[test]
    fn sink_failure_moves_to_failed_and_retry_resubmits() {
        let mut machine = filled_machine();
        machine.submit_at(fixed_time()).unwrap();

        let mut failing = MockLeadSink::new();
        failing
            .expect_deliver()
            .times(1)
            .returning(|_| Err(SubmissionError::Delivery("backend unavailable".to_string())));
        assert_eq!(machine.timer_elapsed(Timer::Processing, &failing), None);
        assert_eq!(machine.state(), SubmissionState::Failed);
        assert_eq!(
            machine.last_error(),
            Some(&SubmissionError::Delivery("backend unavailable".to_string()))
        );

        machine.update(LeadField::Phone, "+15559876543".to_string());
        let retry = machine.submit_at(fixed_time()).unwrap();
        assert_eq!(machine.state(), SubmissionState::Submitting);
        assert!(machine.last_error().is_none());
        let snapshot = machine.snapshot().unwrap();
        assert_eq!(snapshot.attempt, 2);
        assert_eq!(snapshot.lead.phone, "+15559876543");

        let observed = run_timeline(&mut machine, retry, &SimulatedSink);
        assert!(matches!(observed.last(), Some(Observed::Redirect(2_500, _))));
    }

    #[test]
    fn stray_timers_are_ignored() {
        let mut machine = filled_machine();
        assert_eq!(machine.timer_elapsed(Timer::Processing, &SimulatedSink), None);
        assert_eq!(machine.state(), SubmissionState::Idle);

        machine.submit_at(fixed_time()).unwrap();
        assert_eq!(machine.timer_elapsed(Timer::Handoff, &SimulatedSink), None);
        assert_eq!(machine.state(), SubmissionState::Submitting);
    }

    #[test]
    fn redirect_is_issued_once() {
        let mut machine = filled_machine();
        machine.submit_at(fixed_time()).unwrap();
        machine.timer_elapsed(Timer::Processing, &SimulatedSink);
        assert!(matches!(
            machine.timer_elapsed(Timer::Handoff, &SimulatedSink),
            Some(Command::Redirect(_))
        ));
        assert_eq!(machine.timer_elapsed(Timer::Handoff, &SimulatedSink), None);
    }

    #[test]
    fn snapshot_serializes_with_camel_case_keys() {
        let mut machine = filled_machine();
        machine.submit_at(fixed_time()).unwrap();
        let json = serde_json::to_value(machine.snapshot().unwrap()).unwrap();
        assert_eq!(json["painDescription"], "Manual PO approvals");
        assert_eq!(json["companySize"], "");
        assert_eq!(json["attempt"], 1);
        assert!(json["submittedAt"].as_str().unwrap().starts_with("2024-05-01T09:30:00"));
    }
}
