use std::fs;
use std::path::Path;
use anyhow::{bail, Context, Result};
use crate::canvas::{Canvas, MUTED_TEXT_COLOR, TEXT_COLOR};
use crate::constants::*;

const SLIDE_SEPARATOR: &str = "---";

const BUILTIN_DECK: &str = "\
# Neural Networks
A short tour of how machines learn

---
# Neurons
Each node sums weighted inputs
and passes them through an activation

---
# Layers
Input, hidden and output layers
Deeper stacks learn richer features

---
# Training
Compare predictions with targets
Nudge every weight against the gradient

---
# Thank You
Questions?
";

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub title: String,
    pub body: Vec<String>,
    pub active: bool,
}

impl Slide {
    pub fn new(title: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body,
            active: false,
        }
    }

    /// Draws the slide centred in a `width` x `height` viewport.
    pub fn draw<C: Canvas>(&self, canvas: &mut C, width: f32, height: f32) {
        let block_height = TITLE_FONT_SIZE + BODY_LINE_SPACING * self.body.len() as i32;
        let mut y = (height as i32 - block_height) / 2;

        let title_width = canvas.text_width(&self.title, TITLE_FONT_SIZE);
        canvas.text(&self.title, (width as i32 - title_width) / 2, y, TITLE_FONT_SIZE, TEXT_COLOR);
        y += TITLE_FONT_SIZE + BODY_LINE_SPACING / 2;

        for line in self.body.iter() {
            let line_width = canvas.text_width(line, BODY_FONT_SIZE);
            canvas.text(line, (width as i32 - line_width) / 2, y, BODY_FONT_SIZE, MUTED_TEXT_COLOR);
            y += BODY_LINE_SPACING;
        }
    }
}

/// Parses a deck: slides are separated by `---` lines, the first `# ` line
/// of a slide is its title and the other non-empty lines are its body.
pub fn parse_deck(source: &str) -> Vec<Slide> {
    let mut slides = Vec::new();
    let mut chunk: Vec<&str> = Vec::new();

    for line in source.lines() {
        if line.trim() == SLIDE_SEPARATOR {
            slides.extend(parse_slide(&chunk));
            chunk.clear();
        } else {
            chunk.push(line);
        }
    }
    slides.extend(parse_slide(&chunk));
    slides
}

fn parse_slide(lines: &[&str]) -> Option<Slide> {
    let mut title = None;
    let mut body = Vec::new();

    for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        match line.strip_prefix("# ") {
            Some(heading) if title.is_none() => title = Some(heading.trim().to_string()),
            _ => body.push(line.to_string()),
        }
    }

    if title.is_none() && body.is_empty() {
        return None;
    }
    Some(Slide::new(title.unwrap_or_default(), body))
}

pub fn load_deck(path: &Path) -> Result<Vec<Slide>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read deck '{}'", path.display()))?;
    let slides = parse_deck(&source);
    if slides.is_empty() {
        bail!("Deck '{}' contains no slides", path.display());
    }
    Ok(slides)
}

pub fn builtin_deck() -> Vec<Slide> {
    parse_deck(BUILTIN_DECK)
}
