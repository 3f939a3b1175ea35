use std::io::Write;

use crate::{Grid, Result};

pub trait BoardRenderer {
    fn title(&mut self, text: &str) -> Result<()>;
    fn render(&mut self, board: &Grid) -> Result<()>;
    /// emitted between two successive generations.
    fn separator(&mut self) -> Result<()>;
}

/// dumps boards as lines of comma terminated digits: `0,1,0,`.
pub struct TextRenderer<W>
where
    W: Write,
{
    out: W,
}

impl<W> TextRenderer<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W> BoardRenderer for TextRenderer<W>
where
    W: Write,
{
    fn title(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn render(&mut self, board: &Grid) -> Result<()> {
        let mut result = String::with_capacity(board.rows() * (board.cols() * 2 + 1));
        for row in 0..board.rows() {
            for cell in board.row(row) {
                result.push(char::from(b'0' + cell.digit()));
                result.push(',');
            }
            result.push('\n');
        }
        self.out.write_all(result.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn separator(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos;

    fn rendered(board: &Grid) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(board).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn rows_are_comma_terminated() {
        let board = Grid::with_live(2, 3, [pos!(0, 1), pos!(1, 2)]).unwrap();
        assert_eq!(rendered(&board), "0,1,0,\n0,0,1,\n");
    }

    #[test]
    fn title_and_separator() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.title("hello").unwrap();
        renderer.separator().unwrap();
        renderer.render(&Grid::new(1, 1).unwrap()).unwrap();
        assert_eq!(renderer.into_inner(), b"hello\n\n0,\n");
    }
}
