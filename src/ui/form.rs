/// Project detail form: four fields, three required
///
/// Validation is presence-only and runs on submit: a required field that is
/// empty after trimming gets its own message and the form stays put. Editing
/// a field clears that field's error immediately, before any re-validation.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::state::project::ProjectDetails;
use crate::Message;

/// One of the form's input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProjectName,
    ClientName,
    DateRange,
    Highlights,
}

/// Per-field validation messages (highlights is optional, never errors)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldErrors {
    project_name: Option<String>,
    client_name: Option<String>,
    date_range: Option<String>,
}

/// Live form values and their validation state
#[derive(Debug, Clone, Default)]
pub struct FormState {
    details: ProjectDetails,
    errors: FieldErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one field's value and clear its pending error, if any
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::ProjectName => {
                self.details.project_name = value;
                self.errors.project_name = None;
            }
            Field::ClientName => {
                self.details.client_name = value;
                self.errors.client_name = None;
            }
            Field::DateRange => {
                self.details.date_range = value;
                self.errors.date_range = None;
            }
            Field::Highlights => {
                self.details.highlights = value;
            }
        }
    }

    /// Check the three required fields; returns `true` when the form may
    /// be submitted. Each empty (post-trim) field gets its own message.
    pub fn validate(&mut self) -> bool {
        self.errors = FieldErrors::default();

        if self.details.project_name.trim().is_empty() {
            self.errors.project_name = Some("Project name is required".to_string());
        }
        if self.details.client_name.trim().is_empty() {
            self.errors.client_name = Some("Client name is required".to_string());
        }
        if self.details.date_range.trim().is_empty() {
            self.errors.date_range = Some("Date range is required".to_string());
        }

        self.errors == FieldErrors::default()
    }

    /// The full field set, emitted to the wizard on successful submit
    pub fn submitted_details(&self) -> ProjectDetails {
        self.details.clone()
    }

    fn error(&self, field: Field) -> Option<&str> {
        match field {
            Field::ProjectName => self.errors.project_name.as_deref(),
            Field::ClientName => self.errors.client_name.as_deref(),
            Field::DateRange => self.errors.date_range.as_deref(),
            Field::Highlights => None,
        }
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::ProjectName => &self.details.project_name,
            Field::ClientName => &self.details.client_name,
            Field::DateRange => &self.details.date_range,
            Field::Highlights => &self.details.highlights,
        }
    }
}

/// Render the detail form screen
pub fn view(state: &FormState) -> Element<'_, Message> {
    let header = row![
        button(text("← Back").size(14))
            .style(button::text)
            .on_press(Message::HideDetailForm),
        text("Project Details").size(28),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let intro = column![
        text("Tell us about your project").size(18),
        text(
            "Provide basic information about the project and this week's work. \
             This helps generate more relevant and accurate content."
        )
        .size(14)
        .style(text::secondary),
    ]
    .spacing(6);

    let fields = column![
        labeled_input(
            state,
            Field::ProjectName,
            "Project Name *",
            "e.g., Oakwood Mall Renovation",
        ),
        labeled_input(
            state,
            Field::ClientName,
            "Client Name *",
            "e.g., Prime Properties Inc.",
        ),
        labeled_input(
            state,
            Field::DateRange,
            "Week/Date Range *",
            "e.g., Week of August 18, 2025",
        ),
        labeled_input(
            state,
            Field::Highlights,
            "Key Highlights (Optional)",
            "e.g., Completed electrical wiring, installed drywall",
        ),
    ]
    .spacing(16);

    let submit = button(text("Continue to Image Upload").size(16))
        .style(button::primary)
        .padding(12)
        .on_press(Message::SubmitDetails);

    let card = container(column![intro, fields, submit].spacing(24))
        .style(container::rounded_box)
        .padding(24)
        .width(Length::Fill);

    column![header, card].spacing(20).into()
}

/// Label, input, and (when present) the field's validation message
fn labeled_input<'a>(
    state: &'a FormState,
    field: Field,
    label: &'a str,
    placeholder: &'a str,
) -> Element<'a, Message> {
    let mut parts = column![
        text(label).size(14),
        text_input(placeholder, state.value(field))
            .on_input(move |value| Message::FieldEdited(field, value))
            .padding(10),
    ]
    .spacing(6);

    if let Some(message) = state.error(field) {
        parts = parts.push(text(message).size(13).style(text::danger));
    }

    parts.into()
}
