use super::input::KeyAction;
use evalview_types::ResultRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    List,
    Detail,
}

/// What the event loop should do after an action was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// View state for one interactive session.
///
/// The loaded records are fixed for the session. `selected` is the index that
/// was under the cursor when detail mode was entered; it is not re-derived
/// from `current_index` while detail mode is active.
#[derive(Debug)]
pub struct Session {
    results: Vec<ResultRecord>,
    current_index: usize,
    view_mode: ViewMode,
    selected: Option<usize>,
}

impl Session {
    pub fn new(results: Vec<ResultRecord>) -> Self {
        Self {
            results,
            current_index: 0,
            view_mode: ViewMode::List,
            selected: None,
        }
    }

    pub fn results(&self) -> &[ResultRecord] {
        &self.results
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|record| record.name())
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Record shown in detail mode
    pub fn selected(&self) -> Option<&ResultRecord> {
        self.selected.and_then(|index| self.results.get(index))
    }

    /// Apply one key action. `columns_per_row` must come from the same
    /// layout that will be used to draw the resulting frame.
    pub fn handle(&mut self, action: KeyAction, columns_per_row: usize) -> Flow {
        if action == KeyAction::Interrupt {
            return Flow::Exit;
        }

        match self.view_mode {
            ViewMode::List => self.handle_list(action, columns_per_row),
            ViewMode::Detail => self.handle_detail(action),
        }
    }

    fn handle_list(&mut self, action: KeyAction, columns_per_row: usize) -> Flow {
        if action == KeyAction::Quit {
            return Flow::Exit;
        }

        // No valid index exists in an empty session
        let Some(last) = self.results.len().checked_sub(1) else {
            return Flow::Continue;
        };
        let columns = columns_per_row.max(1);

        match action {
            KeyAction::Up => {
                self.current_index = self.current_index.saturating_sub(columns);
            }
            KeyAction::Down => {
                let target = (self.current_index + columns).min(last);
                // Clamping must not pull the cursor sideways within its own row
                if target / columns > self.current_index / columns {
                    self.current_index = target;
                }
            }
            KeyAction::Left => {
                self.current_index = self.current_index.saturating_sub(1);
            }
            KeyAction::Right => {
                self.current_index = (self.current_index + 1).min(last);
            }
            KeyAction::Confirm => {
                self.selected = Some(self.current_index);
                self.view_mode = ViewMode::Detail;
            }
            _ => {}
        }

        Flow::Continue
    }

    fn handle_detail(&mut self, action: KeyAction) -> Flow {
        if matches!(action, KeyAction::Back | KeyAction::Quit) {
            self.view_mode = ViewMode::List;
            self.selected = None;
        }
        Flow::Continue
    }
}
