//! Plain-text rendering of a `PageView` for terminals.

use std::fmt::Write;

use super::{
    Body, DayRow, ErrorCard, Icon, LocationCard, MessageCard, PageView, Placeholder, SkeletonCard,
};

/// Inner width of a card, in columns.
const CARD_WIDTH: usize = 44;

fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Sun => "☀",
        Icon::Cloud => "☁",
        Icon::MapPin => "⚲",
        Icon::Thermometer => "🌡",
    }
}

fn rule(out: &mut String, left: char, right: char) {
    let _ = writeln!(out, "{left}{}{right}", "─".repeat(CARD_WIDTH + 2));
}

fn padded(out: &mut String, text: &str) {
    let pad = CARD_WIDTH.saturating_sub(text.chars().count());
    let _ = writeln!(out, "│ {text}{} │", " ".repeat(pad));
}

/// Write `text` inside the card border, wrapping on spaces.
///
/// Words wider than the card are split across lines.
fn line(out: &mut String, text: &str) {
    let mut current = String::new();
    for word in text.split(' ') {
        let chars: Vec<char> = word.chars().collect();
        for piece in chars.chunks(CARD_WIDTH) {
            let needed = current.chars().count() + piece.len() + 1;
            if !current.is_empty() && needed > CARD_WIDTH {
                padded(out, &current);
                current.clear();
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.extend(piece);
        }
    }
    padded(out, &current);
}

fn placeholder(out: &mut String, block: &Placeholder) {
    let width = CARD_WIDTH * usize::from(block.width_percent) / 100;
    for _ in 0..block.rows {
        padded(out, &"░".repeat(width));
    }
}

fn skeleton(out: &mut String, card: &SkeletonCard) {
    rule(out, '┌', '┐');
    for block in &card.header {
        placeholder(out, block);
    }
    padded(out, "");
    for block in &card.content {
        placeholder(out, block);
    }
    rule(out, '└', '┘');
}

fn day_row(row: &DayRow) -> String {
    format!(
        "{:<10} {} {:>5}   {} {}",
        format!("{}:", row.date),
        glyph(row.temp_icon),
        row.temperature,
        glyph(row.condition_icon),
        row.condition
    )
}

fn location_card(out: &mut String, card: &LocationCard) {
    rule(out, '┌', '┐');
    line(out, &format!("{} {}", glyph(card.icon), card.title));
    line(out, &card.description);
    rule(out, '├', '┤');
    for row in &card.days {
        line(out, &day_row(row));
    }
    if let Some(footer) = card.footer {
        rule(out, '├', '┤');
        line(out, footer);
    }
    rule(out, '└', '┘');
}

fn message_card(out: &mut String, card: &MessageCard) {
    rule(out, '┌', '┐');
    line(out, card.title);
    line(out, "");
    line(out, card.body);
    rule(out, '└', '┘');
}

fn error_card(out: &mut String, card: &ErrorCard) {
    rule(out, '┌', '┐');
    line(out, card.title);
    line(out, card.message);
    line(out, &format!("[ {} ]  (type /refresh)", card.action));
    rule(out, '└', '┘');
}

/// Render the page as text, one card below another.
pub fn render_text(page: &PageView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} {}", glyph(Icon::Sun), page.title);
    let _ = writeln!(out, "{}", page.subtitle);
    let _ = writeln!(out);

    let filter = if page.filter.value.is_empty() {
        page.filter.placeholder.to_string()
    } else {
        page.filter.value.clone()
    };
    let button = if page.refresh.enabled {
        format!("[ {} ]", page.refresh.label)
    } else {
        format!("( {} )", page.refresh.label)
    };
    let _ = writeln!(out, "Filter: {filter}    {button}");
    let _ = writeln!(out);

    match &page.body {
        Body::Skeleton(cards) => cards.iter().for_each(|c| skeleton(&mut out, c)),
        Body::Cards(cards) => cards.iter().for_each(|c| location_card(&mut out, c)),
        Body::Empty(card) => message_card(&mut out, card),
        Body::Failed(card) => error_card(&mut out, card),
    }

    out
}
