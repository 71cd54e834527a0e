/// Image collection screen: drop zone, preview list, continue
///
/// Continue stays disabled while the collection is empty or an encode
/// batch is running; a blocking notice appears if the user tries to move
/// on with nothing uploaded.

use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Element, Length};

use crate::state::project::ProjectRecord;
use crate::upload::collector::{format_size, ImageCollection};
use crate::Message;

/// Render the upload screen
pub fn view<'a>(
    record: &'a ProjectRecord,
    collection: &'a ImageCollection,
    encoding: bool,
    notice: Option<&'a str>,
    drop_active: bool,
) -> Element<'a, Message> {
    let header = text("Upload Project Images").size(28);

    let mut content = column![header, summary_card(record), drop_zone(drop_active, encoding)]
        .spacing(20);

    if !collection.is_empty() {
        content = content.push(entry_list(collection, encoding));
    }

    if let Some(message) = notice {
        content = content.push(text(message).size(14).style(text::danger));
    }

    let continue_label = if encoding {
        "Processing..."
    } else {
        "Generate Presentation"
    };
    let can_continue = !collection.is_empty() && !encoding;
    let continue_button = button(text(continue_label).size(16))
        .style(button::primary)
        .padding(12)
        .on_press_maybe(can_continue.then_some(Message::ContinueToProcessing));

    let mut footer = column![continue_button]
        .spacing(8)
        .align_x(Alignment::Center);
    if collection.is_empty() {
        footer = footer.push(
            text("Upload at least one image to continue")
                .size(13)
                .style(text::secondary),
        );
    }

    content.push(footer).spacing(20).into()
}

/// Card recapping the details captured on the previous step
fn summary_card(record: &ProjectRecord) -> Element<'_, Message> {
    let details = &record.details;

    let mut lines = column![
        text("Project Summary").size(16),
        text(format!("Project: {}", details.project_name)).size(14),
        text(format!("Client: {}", details.client_name)).size(14),
        text(format!("Date Range: {}", details.date_range)).size(14),
    ]
    .spacing(4);

    if !details.highlights.is_empty() {
        lines = lines.push(text(format!("Highlights: {}", details.highlights)).size(14));
    }

    container(lines)
        .style(container::rounded_box)
        .padding(16)
        .width(Length::Fill)
        .into()
}

/// Drag-and-drop target with a browse fallback
fn drop_zone<'a>(drop_active: bool, encoding: bool) -> Element<'a, Message> {
    let prompt = if drop_active {
        "Drop the images here..."
    } else {
        "Drag and drop your images here, or browse"
    };

    let browse = button(text("Browse Files").size(14))
        .style(button::secondary)
        .padding(10)
        .on_press_maybe((!encoding).then_some(Message::PickImages));

    container(
        column![
            text(prompt).size(16),
            text("JPEG, PNG, GIF, WEBP up to 10 MB each")
                .size(13)
                .style(text::secondary),
            browse,
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .style(container::rounded_box)
    .padding(32)
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .into()
}

/// Scrollable list of accepted images with previews and remove buttons
fn entry_list(collection: &ImageCollection, encoding: bool) -> Element<'_, Message> {
    let mut rows = column![text(format!("Uploaded Images ({})", collection.len())).size(16)]
        .spacing(8);

    for entry in collection.entries() {
        let remove = button(text("✕").size(14))
            .style(button::danger)
            .padding(6)
            .on_press_maybe((!encoding).then_some(Message::RemoveImage(entry.id)));

        rows = rows.push(
            container(
                row![
                    image(entry.preview.clone())
                        .width(Length::Fixed(72.0))
                        .height(Length::Fixed(48.0)),
                    column![
                        text(&entry.filename).size(14),
                        text(format_size(entry.size_bytes))
                            .size(12)
                            .style(text::secondary),
                    ]
                    .spacing(2)
                    .width(Length::Fill),
                    remove,
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            )
            .style(container::rounded_box)
            .padding(8)
            .width(Length::Fill),
        );
    }

    container(rows).width(Length::Fill).into()
}
