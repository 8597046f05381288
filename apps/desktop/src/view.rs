use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, scrollable,
    stack, text, text_input,
};
use iced::{Alignment, Element, Length};

use longvision_core::{api, task::AnalysisTask};

use crate::app::{App, Message};

pub fn view(app: &App) -> Element<'_, Message> {
    let page = column![
        header(),
        task_selector(app),
        row![input_area(app), output_area(app)].spacing(20),
        footer(),
    ]
    .spacing(20)
    .padding(20);

    let base: Element<'_, Message> = scrollable(page).into();

    if let Some(task) = app.info_modal {
        modal(base, info_card(task), Message::InfoClosed)
    } else if app.feedback.open {
        modal(base, feedback_card(app), Message::FeedbackClosed)
    } else {
        base
    }
}

fn header() -> Element<'static, Message> {
    column![
        text("LongVision").size(28),
        text("Unlock the Power of AI Video Analysis").size(16),
    ]
    .spacing(4)
    .into()
}

fn task_selector(app: &App) -> Element<'_, Message> {
    let mut tasks = row![].spacing(12);
    for task in AnalysisTask::all() {
        let style = if task == app.selected_task {
            button::primary
        } else {
            button::secondary
        };
        tasks = tasks.push(
            row![
                button(text(task.name()))
                    .style(style)
                    .on_press(Message::TaskSelected(task)),
                button(text("ⓘ"))
                    .style(button::text)
                    .on_press(Message::InfoOpened(task)),
            ]
            .spacing(2)
            .align_y(Alignment::Center),
        );
    }
    tasks.into()
}

fn input_area(app: &App) -> Element<'_, Message> {
    let drop_hint = if app.drag_active {
        "Drop the video to upload it"
    } else {
        "Drag and drop a video here"
    };

    let mut drop_zone = column![
        text("Upload a video").size(18),
        text(drop_hint),
        text("We accept: MP4, MOV (videos up to 5 minutes)").size(12),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    if let Some(upload) = &app.upload {
        drop_zone = drop_zone.push(text(format!("Selected: {}", upload.file_name())));
    }
    if let Some(error) = &app.upload_error {
        drop_zone = drop_zone.push(text(error).style(text::danger));
    }

    let zone_style = if app.drag_active {
        container::rounded_box
    } else {
        container::bordered_box
    };

    let picker = text_input("Or enter the path to a video file...", &app.path_input)
        .on_input(Message::PathInputChanged)
        .on_submit(Message::PathInputSubmitted);

    let prompt = text_input(app.selected_task.prompt_placeholder(), &app.prompt)
        .on_input_maybe(
            app.selected_task
                .accepts_prompt()
                .then_some(Message::PromptChanged),
        );

    column![
        container(drop_zone.width(Length::Fill))
            .style(zone_style)
            .padding(24)
            .width(Length::Fill),
        picker,
        prompt,
        button(text("Process"))
            .on_press(Message::SubmitPressed)
            .width(Length::Fill),
    ]
    .spacing(10)
    .width(Length::FillPortion(1))
    .into()
}

fn output_area(app: &App) -> Element<'_, Message> {
    // Loading overrides any stale result, exactly like the empty state.
    let video: Element<'_, Message> = match (&app.output_video, app.loading) {
        (Some(video), false) => column![
            text(&video.url).size(12),
            row![
                button(text("Open video")).on_press(Message::OpenUrl(video.url.clone())),
                button(text("Download"))
                    .style(button::secondary)
                    .on_press(Message::OpenUrl(video.download_url.clone())),
            ]
            .spacing(10),
        ]
        .spacing(8)
        .into(),
        _ => text("Processed output will appear here").into(),
    };

    let text_output = if app.loading {
        api::PROCESSING_MESSAGE
    } else if app.text_output.is_empty() {
        "Results will appear here"
    } else {
        app.text_output.as_str()
    };

    column![
        text("Video Output").size(18),
        container(video)
            .style(container::rounded_box)
            .padding(16)
            .width(Length::Fill),
        text("Text Output").size(18),
        container(scrollable(text(text_output)))
            .style(container::rounded_box)
            .padding(16)
            .width(Length::Fill),
    ]
    .spacing(10)
    .width(Length::FillPortion(1))
    .into()
}

fn footer() -> Element<'static, Message> {
    row![
        text("LongVision").size(12),
        horizontal_space(),
        button(text("Send Feedback"))
            .style(button::secondary)
            .on_press(Message::FeedbackOpened),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn info_card(task: AnalysisTask) -> Element<'static, Message> {
    container(
        column![
            row![
                text(task.name()).size(18),
                horizontal_space(),
                button(text("✕"))
                    .style(button::text)
                    .on_press(Message::InfoClosed),
            ]
            .align_y(Alignment::Center),
            text(task.info()),
        ]
        .spacing(10),
    )
    .style(container::rounded_box)
    .padding(20)
    .max_width(420)
    .into()
}

fn feedback_card(app: &App) -> Element<'_, Message> {
    let mut card = column![
        text("Send Feedback").size(18),
        text("We appreciate your feedback to improve LongVision.").size(12),
        text_input("Enter your feedback here...", &app.feedback.feedback)
            .on_input(Message::FeedbackBodyChanged),
        text("Email (optional)").size(12),
        text_input("Enter your email", &app.feedback.email)
            .on_input(Message::FeedbackEmailChanged),
        text("Name (optional)").size(12),
        text_input("Enter your name", &app.feedback.name).on_input(Message::FeedbackNameChanged),
    ]
    .spacing(10);

    if let Some(error) = &app.feedback.error {
        card = card.push(text(error).style(text::danger));
    }

    card = card.push(
        row![
            horizontal_space(),
            button(text("Cancel"))
                .style(button::secondary)
                .on_press(Message::FeedbackClosed),
            button(text("Send Feedback")).on_press_maybe(
                (!app.feedback.sending).then_some(Message::FeedbackSubmitted)
            ),
        ]
        .spacing(10),
    );

    container(card)
        .style(container::rounded_box)
        .padding(20)
        .max_width(420)
        .into()
}

/// Layer a card over the page, dimming interaction with the base; clicking
/// outside the card closes it.
fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(mouse_area(center(opaque(content))).on_press(on_blur)),
    ]
    .into()
}
