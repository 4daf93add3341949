use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Sink for complete frames
pub trait TerminalWriter {
    /// Clear the screen, home the cursor and paint `lines`
    fn draw_frame(&mut self, lines: &[String]) -> io::Result<()>;
}

/// Records frames instead of painting them
pub struct MockTerminal {
    pub frames: Vec<Vec<String>>,
}

impl Default for MockTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTerminal {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn last_frame(&self) -> Option<&[String]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl TerminalWriter for MockTerminal {
    fn draw_frame(&mut self, lines: &[String]) -> io::Result<()> {
        self.frames.push(lines.to_vec());
        Ok(())
    }
}

/// Paints frames with crossterm.
///
/// The clear, cursor move and every line of the frame are queued into one
/// buffer and handed to the writer in a single `write_all`, so the previous
/// frame stays visible until the new one is complete.
pub struct CrosstermTerminal<W: Write> {
    out: W,
}

impl CrosstermTerminal<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CrosstermTerminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TerminalWriter for CrosstermTerminal<W> {
    fn draw_frame(&mut self, lines: &[String]) -> io::Result<()> {
        let mut buffer: Vec<u8> = Vec::new();
        queue!(buffer, Clear(ClearType::All), MoveTo(0, 0))?;
        for line in lines {
            // Raw mode disables the CR that normally accompanies LF
            queue!(buffer, Print(line), Print("\r\n"))?;
        }

        self.out.write_all(&buffer)?;
        self.out.flush()
    }
}
