pub mod create;
pub mod detail;
pub mod list;

pub use create::CreateView;
pub use detail::DetailView;
pub use list::ListView;

use crate::models::{ReportDocument, ReportParams};

/// Which view is in the foreground. List state persists underneath while
/// Create or Detail is open, so filters survive a round trip.
#[derive(Debug, Default)]
pub enum Mode {
    #[default]
    List,
    Create(CreateView),
    Detail(DetailView),
}

/// The report screens as an explicit, non-cyclic navigation state machine.
///
/// Initial state is List. Allowed transitions: List→Create, List→Detail,
/// Create→List (submit success or cancel), Detail→List (back). Transition
/// methods return `false` when the move is not allowed from the current
/// mode, leaving state untouched.
#[derive(Debug, Default)]
pub struct ReportsUi {
    pub list: ListView,
    pub mode: Mode,
}

impl ReportsUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_create(&mut self, form: ReportParams) -> bool {
        match self.mode {
            Mode::List => {
                self.mode = Mode::Create(CreateView::with_form(form));
                true
            }
            _ => false,
        }
    }

    pub fn open_detail(&mut self, report: ReportDocument) -> bool {
        match self.mode {
            Mode::List => {
                self.mode = Mode::Detail(DetailView::new(report));
                true
            }
            _ => false,
        }
    }

    /// Return to the list from Create or Detail. A no-op when already there.
    pub fn back(&mut self) {
        self.mode = Mode::List;
    }

    pub fn is_list(&self) -> bool {
        matches!(self.mode, Mode::List)
    }
}
