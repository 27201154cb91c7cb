//! Half-block pixel board shared by the Snake and Tetris scenes.
//!
//! Each board cell maps to one coloured pixel; pairs of vertical pixels are
//! packed into one terminal row using `▀` with fg = top, bg = bottom.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀
pub const FULL_BLOCK: char = '\u{2588}'; // █

const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

/// Board pixels, `pixels[y][x]`; `None` draws as `empty`.
pub struct PixelBoard<'a> {
    pub pixels: &'a [Vec<Option<Color>>],
    pub empty: Color,
    /// Text embedded in the top border, right-aligned.
    pub header: &'a str,
    /// Terminal columns per cell.
    pub cell_width: usize,
}

impl PixelBoard<'_> {
    fn grid_w(&self) -> usize {
        self.pixels.first().map_or(0, Vec::len)
    }

    fn grid_h(&self) -> usize {
        self.pixels.len()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if area.height < 3 || area.width < 5 {
            return;
        }

        let grid_w = self.grid_w();
        let grid_h = self.grid_h();
        let cell_w = self.cell_width.max(1);

        let content_rows = grid_h.div_ceil(2);
        let render_w = ((grid_w * cell_w + 2) as u16).min(area.width);
        let inner_w = render_w as usize - 2;

        let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
        let y_off = area.y;
        let border = Style::default().fg(BORDER_COLOR);

        // Top border with header text
        {
            let header_len = self.header.chars().count();
            let pad_before = inner_w.saturating_sub(header_len + 1);
            let pad_after = inner_w.saturating_sub(pad_before + header_len);

            let mut spans: Vec<Span> = vec![Span::styled(BORDER_TL.to_string(), border)];
            if pad_before > 0 {
                spans.push(Span::styled(repeat(BORDER_H, pad_before), border));
            }
            spans.push(Span::styled(
                self.header.to_string(),
                Style::default().fg(Color::White),
            ));
            if pad_after > 0 {
                spans.push(Span::styled(repeat(BORDER_H, pad_after), border));
            }
            spans.push(Span::styled(BORDER_TR.to_string(), border));

            frame.render_widget(
                Paragraph::new(Line::from(spans)),
                Rect::new(x_off, y_off, render_w, 1),
            );
        }

        let empty_row: Vec<Option<Color>> = vec![None; grid_w];
        for term_row in 0..content_rows {
            let top_gy = term_row * 2;
            let bot_gy = top_gy + 1;
            let top_row = self.pixels.get(top_gy).unwrap_or(&empty_row);
            let bot_row = self.pixels.get(bot_gy).unwrap_or(&empty_row);

            let mut spans: Vec<Span> = vec![Span::styled(BORDER_V.to_string(), border)];

            // batch consecutive cells with the same colours
            let mut cur_fg = Color::Reset;
            let mut cur_bg = Color::Reset;
            let mut cur_text = String::new();

            for (&top_c, &bot_c) in top_row.iter().zip(bot_row.iter()) {
                let fg = top_c.unwrap_or(self.empty);
                let bg = bot_c.unwrap_or(self.empty);

                if fg != cur_fg || bg != cur_bg {
                    if !cur_text.is_empty() {
                        spans.push(Span::styled(
                            std::mem::take(&mut cur_text),
                            Style::default().fg(cur_fg).bg(cur_bg),
                        ));
                    }
                    cur_fg = fg;
                    cur_bg = bg;
                }
                for _ in 0..cell_w {
                    cur_text.push(HALF_TOP);
                }
            }
            if !cur_text.is_empty() {
                spans.push(Span::styled(
                    cur_text,
                    Style::default().fg(cur_fg).bg(cur_bg),
                ));
            }

            spans.push(Span::styled(BORDER_V.to_string(), border));

            let row_y = y_off + 1 + term_row as u16;
            if row_y < area.y + area.height {
                frame.render_widget(
                    Paragraph::new(Line::from(spans)),
                    Rect::new(x_off, row_y, render_w, 1),
                );
            }
        }

        let bot_y = y_off + 1 + content_rows as u16;
        if bot_y < area.y + area.height {
            let mut s = String::new();
            s.push(BORDER_BL);
            s.push_str(&repeat(BORDER_H, inner_w));
            s.push(BORDER_BR);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(s, border))),
                Rect::new(x_off, bot_y, render_w, 1),
            );
        }
    }
}

fn repeat(c: char, n: usize) -> String {
    std::iter::repeat(c).take(n).collect()
}

/// Centre a one-line prompt on `area`.
pub fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str, color: Color) {
    if area.height < 5 || area.width < 20 {
        return;
    }
    let width = (prompt.chars().count() as u16).min(area.width);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height / 2;
    frame.render_widget(
        Paragraph::new(Span::styled(
            prompt.to_string(),
            Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD),
        )),
        Rect::new(x, y, width, 1),
    );
}
