//! Elastic tabstops: tab-terminated cells in consecutive lines form a column
//! and are padded to a common width. The text after a line's last tab is
//! written as is.

/// Column layout parameters. `min_width` includes `padding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub min_width: usize,
    pub padding: usize,
}

impl Layout {
    pub fn align(&self, text: &str) -> String {
        let lines: Vec<Vec<&str>> = text.split('\n').map(|l| l.split('\t').collect()).collect();
        let widths = self.column_widths(&lines);

        let mut out = String::with_capacity(text.len());
        for (i, (cells, widths)) in lines.iter().zip(&widths).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let (last, aligned) = match cells.split_last() {
                Some(split) => split,
                None => continue,
            };
            for (cell, &width) in aligned.iter().zip(widths) {
                out.push_str(cell);
                let pad = width.saturating_sub(cell.chars().count());
                out.extend(std::iter::repeat(' ').take(pad));
            }
            out.push_str(last);
        }
        out
    }

    /// Width of every aligned cell, per line. A column runs over the consecutive
    /// lines that have a cell in it; a line with fewer cells ends the column.
    fn column_widths(&self, lines: &[Vec<&str>]) -> Vec<Vec<usize>> {
        let mut widths: Vec<Vec<usize>> = vec![Vec::new(); lines.len()];
        for (i, line) in lines.iter().enumerate() {
            let aligned = line.len().saturating_sub(1);
            for col in widths[i].len()..aligned {
                let run = lines[i..]
                    .iter()
                    .take_while(|l| col + 1 < l.len())
                    .count();
                let width = lines[i..i + run]
                    .iter()
                    .map(|l| l[col].chars().count() + self.padding)
                    .fold(self.min_width, usize::max);
                for w in &mut widths[i..i + run] {
                    w.push(width);
                }
            }
        }
        widths
    }
}
