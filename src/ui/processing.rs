/// Processing screen: phase list, progress bar, or the failure state
///
/// The failure state replaces the whole screen and offers a single retry
/// affordance that restarts the stage from scratch.

use iced::widget::{button, column, container, progress_bar, row, text};
use iced::{Alignment, Element, Length};

use crate::processing::script::{ProgressScript, PHASES};
use crate::state::project::ProjectRecord;
use crate::Message;

/// Render the processing screen
pub fn view<'a>(
    record: &'a ProjectRecord,
    script: &'a ProgressScript,
    error: Option<&'a str>,
) -> Element<'a, Message> {
    if let Some(message) = error {
        return failure(message);
    }

    let header = column![
        text("Generating Your Presentation").size(28),
        text("Your images are being analyzed and assembled into a slide deck")
            .size(15)
            .style(text::secondary),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    column![
        header,
        phase_list(script),
        progress_card(script),
        details_card(record),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

/// The four phases with done/current/pending markers
fn phase_list(script: &ProgressScript) -> Element<'_, Message> {
    let current = script.phase_index();
    let mut rows = column![].spacing(12);

    for (index, spec) in PHASES.iter().enumerate() {
        let marker = if index < current {
            text("✔").size(16).style(text::success)
        } else if index == current {
            text("▶").size(16).style(text::primary)
        } else {
            text("•").size(16).style(text::secondary)
        };

        let label = if index <= current {
            text(spec.phase.label()).size(15)
        } else {
            text(spec.phase.label()).size(15).style(text::secondary)
        };

        rows = rows.push(
            row![
                marker,
                column![
                    label,
                    text(spec.phase.description())
                        .size(13)
                        .style(text::secondary),
                ]
                .spacing(2),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        );
    }

    container(rows)
        .style(container::rounded_box)
        .padding(20)
        .width(Length::Fill)
        .into()
}

/// Overall progress bar with the rounded percentage
fn progress_card(script: &ProgressScript) -> Element<'_, Message> {
    let percent = script.progress().round() as u32;

    container(
        column![
            row![
                text("Overall Progress").size(14),
                container(text(format!("{percent}%")).size(14).style(text::primary))
                    .width(Length::Fill)
                    .align_x(Alignment::End),
            ],
            progress_bar(0.0..=100.0, script.progress()).height(Length::Fixed(12.0)),
        ]
        .spacing(8),
    )
    .style(container::rounded_box)
    .padding(20)
    .width(Length::Fill)
    .into()
}

/// What is being processed, for reassurance while the user waits
fn details_card(record: &ProjectRecord) -> Element<'_, Message> {
    let details = &record.details;

    container(
        column![
            text("Processing Details").size(16),
            text(format!("Project: {}", details.project_name)).size(14),
            text(format!("Client: {}", details.client_name)).size(14),
            text(format!("Date Range: {}", details.date_range)).size(14),
            text(format!("Images: {} photos", record.image_count())).size(14),
        ]
        .spacing(4),
    )
    .style(container::rounded_box)
    .padding(16)
    .width(Length::Fill)
    .into()
}

/// Terminal failure state with the restart affordance
fn failure(message: &str) -> Element<'_, Message> {
    column![
        text("Something went wrong").size(28),
        text(message).size(15).style(text::danger),
        button(text("Try Again").size(16))
            .style(button::primary)
            .padding(12)
            .on_press(Message::RestartProcessing),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}
