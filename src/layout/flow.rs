/// A word placed by [`wrap`], with its top-left corner in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement<'a> {
    /// The word.
    pub word: &'a str,
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
}

/// Result of greedy line breaking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Flow<'a> {
    /// Word positions in input order.
    pub words: Vec<Placement<'a>>,
    /// Line count, at least 1.
    pub lines: u32,
}

/// Frame the words are laid into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowBox {
    /// Pen x at the start of every line.
    pub left: i32,
    /// Top of the first line.
    pub top: i32,
    /// A word may not end past this x unless it starts the line.
    pub right: i32,
    /// Vertical distance between lines.
    pub line_height: i32,
    /// Gap added after every word.
    pub space: i32,
}

/// Greedy word wrap over `(word, width)` pairs.
///
/// A word that would end past `right` moves to a new line, except as the first word of a line,
/// where it stays and overflows. After each word the pen advances by its width plus `space`.
pub fn wrap<'a>(words: impl IntoIterator<Item = (&'a str, u32)>, frame: FlowBox) -> Flow<'a> {
    let mut flow = Flow {
        words: Vec::new(),
        lines: 1,
    };
    let (mut x, mut y) = (frame.left, frame.top);
    let mut line_empty = true;

    for (word, width) in words {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        if !line_empty && x.saturating_add(width) > frame.right {
            x = frame.left;
            y = y.saturating_add(frame.line_height);
            flow.lines += 1;
        }
        flow.words.push(Placement { word, x, y });
        x = x.saturating_add(width).saturating_add(frame.space);
        line_empty = false;
    }
    flow
}

#[cfg(test)]
#[path = "../../tests/unit/layout/flow.rs"]
mod tests;
