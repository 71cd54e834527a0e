/// Welcome screen: what the wizard does and a single way forward

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Feature blurbs shown under the title
const FEATURES: [(&str, &str); 4] = [
    (
        "Smart Image Analysis",
        "Each progress photo is analyzed and described automatically",
    ),
    (
        "Professional Slides",
        "A client-ready deck is assembled from your week's work",
    ),
    (
        "Fast Turnaround",
        "From photos to presentation in a couple of minutes",
    ),
    (
        "Instant Download",
        "Grab the finished file as soon as it's generated",
    ),
];

/// Render the welcome screen
pub fn view<'a>() -> Element<'a, Message> {
    let title = column![
        text("Weekly Project Updates, Done for You").size(32),
        text("Upload this week's progress photos and get a polished slide deck for your client.")
            .size(16)
            .style(text::secondary),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let mut features = column![].spacing(12);
    for (heading, blurb) in FEATURES {
        features = features.push(
            container(
                column![
                    text(heading).size(16),
                    text(blurb).size(14).style(text::secondary),
                ]
                .spacing(4),
            )
            .style(container::rounded_box)
            .padding(16)
            .width(Length::Fill),
        );
    }

    let start = button(text("Get Started →").size(16))
        .style(button::primary)
        .padding(12)
        .on_press(Message::ShowDetailForm);

    column![title, features, start]
        .spacing(28)
        .align_x(Alignment::Center)
        .into()
}
