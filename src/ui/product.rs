/// Product summary shown above the key visual grid
use iced::widget::{column, text, Column};
use iced::Element;

use crate::Message;

pub const PRODUCT_NAME: &str = "LG 올레드 TV 스탠드형 (OLED48B4NNA)";

pub const SUMMARY_LINES: [&str; 3] = [
    "48형 4K OLED, α8 AI 프로세서 & webOS 24로 화질/사운드 자동 최적화",
    "4개의 HDMI 2.1, 120Hz, Dolby Vision & Atmos, G-SYNC/VRR 등 게이밍 지원",
    "초슬림 베젤 디자인과 LG ThinQ AI로 편리한 스마트 기능",
];

pub fn summary_panel<'a>() -> Element<'a, Message> {
    let bullets = SUMMARY_LINES
        .iter()
        .fold(Column::new().spacing(4), |lines, line| lines.push(text(format!("• {line}")).size(15)));

    column![
        text("제품 정보 및 Key Visual").size(26),
        text(PRODUCT_NAME).size(16),
        bullets,
    ]
    .spacing(8)
    .into()
}
