/// Completion screen: download the deck, share the link, or start over

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::state::project::ProjectRecord;
use crate::Message;

/// Render the completion screen
pub fn view<'a>(record: &'a ProjectRecord, status: Option<&'a str>) -> Element<'a, Message> {
    let header = column![
        text("Presentation Ready!").size(32),
        text("Your weekly project update has been generated. Download it below and share it with your client.")
            .size(15)
            .style(text::secondary),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let filename = record
        .result
        .as_ref()
        .map(|result| result.presentation_filename.as_str())
        .unwrap_or("presentation.pptx");

    let download_card = container(
        column![
            text(filename).size(20),
            text(format!(
                "Professional presentation built from {} photos",
                record.image_count()
            ))
            .size(14)
            .style(text::secondary),
            button(text("⬇ Download Presentation").size(16))
                .style(button::success)
                .padding(12)
                .on_press(Message::DownloadPresentation),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .style(container::rounded_box)
    .padding(24)
    .width(Length::Fill)
    .align_x(Alignment::Center);

    let actions = row![
        button(text("Share Project").size(14))
            .style(button::secondary)
            .padding(10)
            .on_press(Message::ShareLink),
        button(text("Create New Report").size(14))
            .style(button::primary)
            .padding(10)
            .on_press(Message::NewProject),
    ]
    .spacing(12);

    let mut content = column![header, download_card, summary_card(record), actions]
        .spacing(20)
        .align_x(Alignment::Center);

    if let Some(message) = status {
        content = content.push(text(message).size(14).style(text::primary));
    }

    content.into()
}

/// Final recap of the generated report
fn summary_card(record: &ProjectRecord) -> Element<'_, Message> {
    let details = &record.details;

    container(
        column![
            text("Project Summary").size(16),
            text(format!("Project: {}", details.project_name)).size(14),
            text(format!("Client: {}", details.client_name)).size(14),
            text(format!("Date Range: {}", details.date_range)).size(14),
            text(format!("Images Processed: {} photos", record.image_count())).size(14),
        ]
        .spacing(4),
    )
    .style(container::rounded_box)
    .padding(16)
    .width(Length::Fill)
    .into()
}
