use crate::calc::operator::is_operator_symbol;
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Keep the end of `text` that fits in `width` columns.
///
/// The newest input is at the end, so long expressions lose their head and
/// get an ellipsis in front.
pub fn visible_tail(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - ELLIPSIS.width();
    let mut used = 0;
    let mut start = text.len();
    for (offset, grapheme) in text.grapheme_indices(true).rev() {
        let w = grapheme.width();
        if used + w > budget {
            break;
        }
        used += w;
        start = offset;
    }

    format!("{}{}", ELLIPSIS, &text[start..])
}

/// Expression line, right aligned, operators highlighted.
pub fn render_main_text(text: &str, width: u16) -> Paragraph<'static> {
    let visible = visible_tail(text, width as usize);

    let spans: Vec<Span> = visible
        .chars()
        .map(|c| {
            let color = if is_operator_symbol(c) && c != '-' {
                colors::operator()
            } else {
                colors::text()
            };
            Span::styled(
                c.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Right)
        .style(Style::default().bg(colors::background()))
}

pub fn render_subtotal(subtotal: &str, width: u16) -> Paragraph<'static> {
    let text = if subtotal.is_empty() {
        String::new()
    } else {
        visible_tail(&format!("= {}", subtotal), width as usize)
    };

    Paragraph::new(text).alignment(Alignment::Right).style(
        Style::default()
            .fg(colors::dimmed())
            .bg(colors::background()),
    )
}

pub fn render_footer(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(colors::dimmed()),
    ))
    .alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_tail_short_text_unchanged() {
        assert_eq!(visible_tail("12+3", 10), "12+3");
    }

    #[test]
    fn test_visible_tail_keeps_newest_input() {
        assert_eq!(visible_tail("123456789", 5), "…6789");
    }

    #[test]
    fn test_visible_tail_counts_symbol_width() {
        assert_eq!(visible_tail("12×34÷5", 4), "…4÷5");
    }

    #[test]
    fn test_visible_tail_zero_width() {
        assert_eq!(visible_tail("123", 0), "");
    }

    #[test]
    fn test_render_main_text_creates_paragraph() {
        let paragraph = render_main_text("5×-3", 20);
        let _ = paragraph;
    }

    #[test]
    fn test_render_subtotal_empty() {
        let paragraph = render_subtotal("", 20);
        let _ = paragraph;
    }

    #[test]
    fn test_render_footer_creates_line() {
        let line = render_footer("q quit");
        assert_eq!(line.spans.len(), 1);
    }
}
