use crate::form::{FieldName, FieldNameError, FormState, SubmissionStatus};
use crate::submission::{ContactEndpoint, SubmissionAttempt, SubmissionController};
use std::io::{self, Write};
use std::str::FromStr;

pub static FORM_TITLE: &str = "Contact Us Form";
pub static SUCCESS_BANNER: &str = "Form Submitted";
pub static SUBMIT_LABEL: &str = "Submit Form";
pub static SUBMITTING_LABEL: &str = "Sending...";

/// Everything a rendering surface needs, derived from [`FormState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: Vec<(FieldName, String)>,
    pub inputs_disabled: bool,
    pub submit_label: &'static str,
    pub success_banner: Option<&'static str>,
    pub error_banner: Option<String>,
}

impl From<&FormState> for FormView {
    fn from(state: &FormState) -> Self {
        let submitting = state.status() == SubmissionStatus::Submitting;
        let error_message = state.error_message();
        Self {
            fields: FieldName::ALL
                .iter()
                .map(|field| (*field, state.fields().get(*field).to_owned()))
                .collect(),
            inputs_disabled: submitting,
            submit_label: if submitting {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            success_banner: (state.status() == SubmissionStatus::Success)
                .then_some(SUCCESS_BANNER),
            error_banner: (!error_message.is_empty()).then(|| error_message.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Edit { field: FieldName, value: String },
    Submit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormEventError {
    #[error("expected '<field>=<value>' or 'submit', got '{0}'")]
    Unrecognized(String),
    #[error(transparent)]
    UnknownField(#[from] FieldNameError),
}

/// Parses one line of terminal input: `submit`, or `<field>=<value>` where the value is
/// taken verbatim, including surrounding whitespace.
impl FromStr for FormEvent {
    type Err = FormEventError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if line.trim() == "submit" {
            return Ok(FormEvent::Submit);
        }
        match line.split_once('=') {
            Some((field, value)) => Ok(FormEvent::Edit {
                field: FieldName::from_str(field.trim())?,
                value: value.to_owned(),
            }),
            None => Err(FormEventError::Unrecognized(line.to_owned())),
        }
    }
}

/// One line typed at the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    Quit,
    Event(FormEvent),
}

impl FromStr for TerminalCommand {
    type Err = FormEventError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if line.trim() == "quit" {
            return Ok(TerminalCommand::Quit);
        }
        FormEvent::from_str(line).map(TerminalCommand::Event)
    }
}

impl<E: ContactEndpoint> SubmissionController<E> {
    /// Routes a user event into the form. Edits are dropped while inputs are disabled.
    /// Returns the submission attempt for `Submit` events.
    pub fn handle(&mut self, event: FormEvent) -> Option<SubmissionAttempt> {
        match event {
            FormEvent::Edit { field, value } => {
                if FormView::from(self.state()).inputs_disabled {
                    tracing::debug!(%field, "Input disabled while submitting, dropping edit.");
                } else {
                    self.update_field(field, value);
                }
                None
            }
            FormEvent::Submit => Some(self.begin_submission()),
        }
    }

    pub fn view(&self) -> FormView {
        FormView::from(self.state())
    }
}

pub trait Presenter {
    fn render(&mut self, view: &FormView) -> io::Result<()>;
}

pub struct TerminalPresenter<W> {
    writer: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, view: &FormView) -> io::Result<()> {
        writeln!(self.writer, "== {} ==", FORM_TITLE)?;
        if let Some(banner) = view.success_banner {
            writeln!(self.writer, "[success] {}", banner)?;
        }
        if let Some(banner) = &view.error_banner {
            writeln!(self.writer, "[error] {}", banner)?;
        }
        let lock = if view.inputs_disabled { " (locked)" } else { "" };
        for (field, value) in &view.fields {
            if value.is_empty() {
                writeln!(self.writer, "{:>8}: <{}>{}", field, field.placeholder(), lock)?;
            } else {
                writeln!(self.writer, "{:>8}: {}{}", field, value, lock)?;
            }
        }
        writeln!(self.writer, "[ {} ]", view.submit_label)?;
        self.writer.flush()
    }
}
