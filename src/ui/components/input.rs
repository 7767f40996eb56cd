use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Not set";

/// Free-text field. While editing, a block cursor sits after the text.
pub struct InputWidget<'a> {
    label: &'a str,
    value: &'a str,
    focused: bool,
    editing: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            editing: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Theme::border_focused()
        } else {
            Theme::border()
        };

        let block = Block::default()
            .title(self.label)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.editing {
            Line::from(vec![
                Span::styled(self.value, Theme::highlight()),
                Span::styled(" ", Theme::selected()),
            ])
        } else if self.value.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, Theme::dim()))
        } else if self.focused {
            Line::from(Span::styled(self.value, Theme::selected()))
        } else {
            Line::from(Span::styled(self.value, Theme::normal()))
        };

        Paragraph::new(line).render(inner, buf);
    }
}

/// One-of-many field cycled with Left/Right.
pub struct SelectWidget<'a> {
    label: &'a str,
    options: &'a [&'a str],
    selected: Option<usize>,
    focused: bool,
}

impl<'a> SelectWidget<'a> {
    pub fn new(label: &'a str, options: &'a [&'a str], selected: Option<usize>) -> Self {
        Self {
            label,
            options,
            selected,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SelectWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Theme::border_focused()
        } else {
            Theme::border()
        };

        let block = Block::default()
            .title(self.label)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let value = self.selected.and_then(|i| self.options.get(i).copied());
        let text = value.unwrap_or(PLACEHOLDER);
        let display = if self.focused {
            format!("< {} >", text)
        } else {
            text.to_string()
        };

        let style = match (value, self.focused) {
            (None, _) => Theme::dim(),
            (Some(_), true) => Theme::highlight(),
            (Some(_), false) => Theme::normal(),
        };

        Paragraph::new(Span::styled(display, style)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn select_shows_placeholder_until_chosen() {
        let area = Rect::new(0, 0, 30, 3);
        let options = ["Gym", "Bodyweight"];

        let mut buf = Buffer::empty(area);
        SelectWidget::new("Type", &options, None).render(area, &mut buf);
        assert!(row_text(&buf, 1).contains(PLACEHOLDER));

        let mut buf = Buffer::empty(area);
        SelectWidget::new("Type", &options, Some(1))
            .focused(true)
            .render(area, &mut buf);
        assert!(row_text(&buf, 1).contains("< Bodyweight >"));
    }

    #[test]
    fn input_renders_value() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        InputWidget::new("Weight", "72.5").render(area, &mut buf);
        assert!(row_text(&buf, 1).contains("72.5"));
    }
}
