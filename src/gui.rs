use iced::widget::{Button, Column, Container, Radio, Row, Space, Text, TextInput};
use iced::{Alignment, Border, Color, Element, Length, Task};

use crate::check;
use crate::config::UiConfig;
use crate::models::*;
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};
use std::path::PathBuf;
use tokio::task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Computing,
    Showing,
}

#[derive(Debug, Clone)]
pub enum Message {
    ChooseFile,
    FileChosen(Option<PathBuf>),
    AlgorithmSelected(Algorithm),
    ReferenceChanged(String),
    Compare,
    CheckFinished(u64, CheckOutcome),
    DialogClosed,
}

pub struct SumCheckApp {
    config: UiConfig,

    // UI state
    chosen_file: Option<PathBuf>,
    algorithm: Algorithm,
    reference: String,
    phase: Phase,
    outcome: Option<CheckOutcome>,
    // id of the most recently started check
    check_id: u64,
}

impl SumCheckApp {
    pub fn new() -> (Self, Task<Message>) {
        (Self::with_config(UiConfig::default()), Task::none())
    }

    pub fn with_config(config: UiConfig) -> Self {
        SumCheckApp {
            algorithm: config.default_algorithm,
            config,
            chosen_file: None,
            reference: String::new(),
            phase: Phase::Idle,
            outcome: None,
            check_id: 0,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ChooseFile => {
                if self.phase == Phase::Computing {
                    return Task::none();
                }
                return Task::perform(
                    AsyncFileDialog::new()
                        .set_title("Select a file to checksum")
                        .pick_file(),
                    |handle| Message::FileChosen(handle.map(|h| h.path().to_path_buf())),
                );
            }
            Message::FileChosen(Some(_)) if self.phase == Phase::Computing => {
                tracing::debug!("file choice ignored while a check is running");
            }
            Message::FileChosen(Some(path)) => {
                tracing::debug!(path = %path.display(), "file chosen");
                self.chosen_file = Some(path);
                self.outcome = None;
                self.phase = Phase::Idle;
            }
            Message::FileChosen(None) => { /* cancelled */ }
            Message::AlgorithmSelected(a) => {
                self.algorithm = a;
            }
            Message::ReferenceChanged(s) => {
                self.reference = s;
            }
            Message::Compare => {
                if self.phase == Phase::Computing {
                    return Task::none();
                }
                let request = self.request();
                if let Some(missing) = check::precondition(&request) {
                    return self.show(CheckOutcome::Missing(missing));
                }
                self.phase = Phase::Computing;
                self.outcome = None;
                self.check_id += 1;
                let id = self.check_id;
                let path = request.path.clone().unwrap_or_default();
                return Task::perform(
                    async move {
                        match task::spawn_blocking(move || check::run(request)).await {
                            Ok(outcome) => outcome,
                            Err(e) => {
                                tracing::error!(error = %e, "hash worker failed");
                                CheckOutcome::FileError {
                                    path,
                                    reason: format!("hash worker failed: {e}"),
                                }
                            }
                        }
                    },
                    move |outcome| Message::CheckFinished(id, outcome),
                );
            }
            Message::CheckFinished(id, outcome) => {
                if self.phase != Phase::Computing || id != self.check_id {
                    tracing::debug!(id, current = self.check_id, "stale check result dropped");
                    return Task::none();
                }
                return self.show(outcome);
            }
            Message::DialogClosed => {}
        }
        Task::none()
    }

    fn request(&self) -> CheckRequest {
        CheckRequest {
            path: self.chosen_file.clone(),
            algorithm: self.algorithm,
            reference: self.reference.clone(),
        }
    }

    /// Store the outcome for rendering and raise a message box if it calls for one.
    fn show(&mut self, outcome: CheckOutcome) -> Task<Message> {
        let dialog = outcome
            .dialog()
            .map(|(title, level)| (title, level, outcome.message()));
        if let CheckOutcome::FileError { path, .. } = &outcome {
            tracing::warn!(path = %path.display(), "comparison abandoned");
        }
        self.phase = match outcome {
            CheckOutcome::Missing(_) => Phase::Idle,
            _ => Phase::Showing,
        };
        self.outcome = Some(outcome);

        match dialog {
            Some((title, level, text)) => Task::perform(
                AsyncMessageDialog::new()
                    .set_level(match level {
                        DialogLevel::Info => MessageLevel::Info,
                        DialogLevel::Error => MessageLevel::Error,
                    })
                    .set_title(title)
                    .set_description(text)
                    .set_buttons(MessageButtons::Ok)
                    .show(),
                |_| Message::DialogClosed,
            ),
            None => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let computing = self.phase == Phase::Computing;
        let text_color = self.text_color();
        let secondary_text = self.secondary_text_color();

        let algo_row = Algorithm::ALL.iter().fold(
            Row::new()
                .spacing(12)
                .align_y(Alignment::Center)
                .push(Text::new("Checksum algorithm:").size(14).style(move |_theme| {
                    iced::widget::text::Style {
                        color: Some(text_color),
                    }
                })),
            |row, algo| {
                row.push(
                    Radio::new(
                        algo.name(),
                        *algo,
                        Some(self.algorithm),
                        Message::AlgorithmSelected,
                    )
                    .size(14)
                    .text_size(14),
                )
            },
        );

        let algo_desc = Text::new(self.algorithm.description())
            .size(12)
            .style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(secondary_text),
                }
            });

        let file_label = match &self.chosen_file {
            Some(path) => Text::new(path.display().to_string()).style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(text_color),
                }
            }),
            None => Text::new("No file selected").style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(secondary_text),
                }
            }),
        };

        let file_row = Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(
                Button::new(Text::new("Browse file…").size(14))
                    .on_press_maybe((!computing).then_some(Message::ChooseFile))
                    .padding(8),
            )
            .push(
                file_label
                    .size(13)
                    .width(Length::Fixed(self.config.wrap_width)),
            );

        let reference_input = TextInput::new("Paste reference checksum", &self.reference)
            .on_input(Message::ReferenceChanged)
            .on_submit(Message::Compare)
            .padding(8)
            .size(14)
            .width(Length::Fill);

        let reference_row = Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(Text::new("Reference checksum:").size(14).style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(text_color),
                }
            }))
            .push(reference_input);

        let compare_btn = Button::new(
            Text::new(if computing { "Computing…" } else { "Compare" }).size(16),
        )
        .on_press_maybe((!computing).then_some(Message::Compare))
        .padding(8)
        .width(Length::Fixed(150.0));

        let content = Column::new()
            .padding(16)
            .spacing(12)
            .width(Length::Fill)
            .push(algo_row)
            .push(algo_desc)
            .push(file_row)
            .push(reference_row)
            .push(Space::with_height(4))
            .push(
                Container::new(compare_btn)
                    .width(Length::Fill)
                    .center_x(Length::Fill),
            )
            .push(self.view_result());

        let bg_color = self.bg_color();
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| iced::widget::container::Style {
                background: Some(iced::Background::Color(bg_color)),
                border: Border::default(),
                ..Default::default()
            })
            .into()
    }

    fn view_result(&self) -> Element<'_, Message> {
        let Some(outcome) = &self.outcome else {
            return Space::with_height(0).into();
        };

        let color = match outcome {
            CheckOutcome::Match { .. } => self.success_color(),
            CheckOutcome::Mismatch { .. } | CheckOutcome::FileError { .. } => self.failure_color(),
            CheckOutcome::Missing(_) => self.accent_color(),
        };

        let mut result = Column::new().spacing(6).push(
            Text::new(outcome.message())
                .size(14)
                .width(Length::Fixed(self.config.wrap_width))
                .style(move |_theme| iced::widget::text::Style { color: Some(color) }),
        );

        if let CheckOutcome::Match { algorithm, digest } = outcome {
            let secondary_text = self.secondary_text_color();
            result = result.push(
                Text::new(format!("{}: {}", algorithm, digest))
                    .size(12)
                    .width(Length::Fixed(self.config.wrap_width))
                    .style(move |_theme| iced::widget::text::Style {
                        color: Some(secondary_text),
                    }),
            );
        }

        result.into()
    }

    // Color helpers
    fn bg_color(&self) -> Color {
        Color::from_rgb(1.0, 1.0, 1.0)
    }

    fn text_color(&self) -> Color {
        Color::from_rgb(0.1, 0.1, 0.1)
    }

    fn secondary_text_color(&self) -> Color {
        Color::from_rgb(0.4, 0.4, 0.4)
    }

    fn success_color(&self) -> Color {
        Color::from_rgb(0.2, 0.7, 0.2)
    }

    fn failure_color(&self) -> Color {
        Color::from_rgb(0.9, 0.2, 0.2)
    }

    fn accent_color(&self) -> Color {
        Color::from_rgb(0.2, 0.5, 0.8)
    }
}
