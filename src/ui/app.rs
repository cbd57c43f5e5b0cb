use crate::lookup::{BreachClient, BreachSource, LookupController, WorkflowState};
use crate::mvi::Reducer;
use crate::report::{current_year, RenderedReport, ReportRenderer};
use crate::ui::email_field::{EmailFieldIntent, EmailFieldReducer, EmailFieldState};
use crate::ui::render::report_height;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App<S = BreachClient> {
    should_quit: bool,
    email_field: EmailFieldState,
    controller: LookupController<S>,
    renderer: ReportRenderer,
    /// Last workflow snapshot taken from the controller.
    workflow: WorkflowState,
    report: RenderedReport,
    scroll: u16,
    /// Inner width of the report pane, 0 until the first draw.
    report_width: u16,
    spinner_frame: usize,
    year: i32,
}

impl<S: BreachSource> App<S> {
    pub fn new(controller: LookupController<S>, renderer: ReportRenderer) -> Self {
        let workflow = controller.snapshot();
        let report = renderer.render(&workflow);
        Self {
            should_quit: false,
            email_field: EmailFieldState::default(),
            controller,
            renderer,
            workflow,
            report,
            scroll: 0,
            report_width: 0,
            spinner_frame: 0,
            year: current_year(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn email_field(&self) -> &EmailFieldState {
        &self.email_field
    }

    pub fn report(&self) -> &RenderedReport {
        &self.report
    }

    pub fn is_loading(&self) -> bool {
        self.workflow.is_loading
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Apply an edit to the email field. Ignored while a lookup runs.
    pub fn edit(&mut self, intent: EmailFieldIntent) {
        if self.is_loading() {
            return;
        }
        dispatch_mvi!(self, email_field, EmailFieldReducer, intent);
    }

    /// Submit the current field value.
    pub fn submit(&mut self) {
        if self.is_loading() {
            return;
        }
        // The task is detached; its result reaches us through the next snapshot.
        let _ = self.controller.submit(&self.email_field.value);
        self.refresh();
    }

    /// Scroll the report, keeping at least its last row on screen.
    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = next as u16;
    }

    pub fn set_report_width(&mut self, width: u16) {
        if width != self.report_width {
            self.report_width = width;
            self.scroll = self.scroll.min(self.max_scroll());
        }
    }

    fn max_scroll(&self) -> u16 {
        let rows = report_height(&self.report, self.report_width);
        u16::try_from(rows.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    pub fn on_tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        self.refresh();
    }

    /// Pull the latest workflow state and re-render when it changed.
    pub fn refresh(&mut self) {
        let workflow = self.controller.snapshot();
        if workflow == self.workflow {
            return;
        }
        let report = self.renderer.render(&workflow);
        if report != self.report {
            self.scroll = 0;
        }
        self.workflow = workflow;
        self.report = report;
    }
}
