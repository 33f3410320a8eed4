//! Application view rendering

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let input = text_input("Paste a video URL...", &self.url)
            .on_input(Message::UrlChanged)
            .on_submit(Message::StartDownload)
            .padding(12)
            .size(16);

        let download = button(text("Download"))
            .padding([10.0, 24.0])
            .on_press(Message::StartDownload);

        let cancel = button(text("Cancel"))
            .padding([10.0, 24.0])
            .on_press_maybe((self.active > 0).then_some(Message::CancelAll));

        let status = text(self.status_line()).size(14);

        let content = column![
            text("Tunegrab").size(28),
            input,
            row![download, cancel].spacing(12),
            status,
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .width(440);

        container(content).center_x(Fill).center_y(Fill).into()
    }
}
