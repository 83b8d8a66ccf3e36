/// Three-column candidate grid
use iced::widget::{button, column, container, image, text, Row};
use iced::{Alignment, Element, Length};

use super::gallery::Gallery;
use crate::kv::LogicalName;
use crate::state::data::CandidateImage;
use crate::Message;

/// One cell per candidate: thumbnail, caption, zoom and pick buttons
///
/// Buttons are disabled while `enabled` is false (an operation is running).
pub fn candidate_grid<'a>(
    candidates: &'a [CandidateImage],
    gallery: &'a Gallery,
    picked: Option<LogicalName>,
    enabled: bool,
) -> Element<'a, Message> {
    candidates
        .iter()
        .fold(Row::new().spacing(16), |row, candidate| {
            row.push(cell(candidate.name, gallery, picked == Some(candidate.name), enabled))
        })
        .width(Length::Fill)
        .into()
}

fn cell<'a>(name: LogicalName, gallery: &'a Gallery, is_picked: bool, enabled: bool) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match gallery.get(name) {
        Some(preview) => image(preview.thumbnail.clone()).width(Length::Fill).into(),
        None => text("미리보기 없음").size(14).into(),
    };

    let zoom = button(text("이미지 크게 보기"))
        .width(Length::Fill)
        .style(button::secondary)
        .on_press_maybe(enabled.then_some(Message::Zoom(name)));

    let pick = button(text("해당 이미지 선택"))
        .width(Length::Fill)
        .on_press_maybe(enabled.then_some(Message::Pick(name)));

    let content = column![thumbnail, text(name.as_str()).size(14), zoom, pick]
        .spacing(8)
        .align_x(Alignment::Center)
        .push_maybe(is_picked.then(|| text("✅ 선택됨").style(text::success)));

    container(content).width(Length::FillPortion(1)).into()
}
