use callboard_core::{CallStore, DashboardSnapshot, DashboardUseCase, Selection};

pub struct App<'a> {
    usecase: DashboardUseCase<'a>,
    pub selection: Selection,
    pub snapshot: DashboardSnapshot,
}

impl<'a> App<'a> {
    pub fn new(store: &'a CallStore, selection: Selection, moving_average_window: usize) -> Self {
        let usecase = DashboardUseCase::new(store, moving_average_window);
        let snapshot = usecase.snapshot(&selection);
        Self {
            usecase,
            selection,
            snapshot,
        }
    }

    pub fn options(&self) -> Vec<Selection> {
        self.usecase.selector().options()
    }

    pub fn next_period(&mut self) {
        let next = self.usecase.selector().next(&self.selection);
        self.select(next);
    }

    pub fn previous_period(&mut self) {
        let previous = self.usecase.selector().previous(&self.selection);
        self.select(previous);
    }

    pub fn select(&mut self, selection: Selection) {
        if selection == self.selection {
            return;
        }
        tracing::debug!(from = %self.selection, to = %selection, "Selection changed");
        self.snapshot = self.usecase.snapshot(&selection);
        self.selection = selection;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callboard_core::{CallRecord, CallStatus, DayPartition};

    fn store() -> CallStore {
        CallStore::from_days(vec![
            DayPartition::new("1st dec", vec![CallRecord::new(1, "12/1/25", CallStatus::Busy)]),
            DayPartition::new(
                "2nd dec",
                vec![
                    CallRecord::new(2, "12/2/25", CallStatus::Busy),
                    CallRecord::new(3, "12/2/25", CallStatus::Failed),
                ],
            ),
        ])
    }

    #[test]
    fn test_navigation_recomputes_snapshot() {
        let store = store();
        let mut app = App::new(&store, Selection::AllDays, 7);
        assert_eq!(app.snapshot.kpis.total_calls, 3);

        app.next_period();
        assert_eq!(app.selection, Selection::Day("1st dec".to_string()));
        assert_eq!(app.snapshot.kpis.total_calls, 1);

        app.next_period();
        assert_eq!(app.snapshot.kpis.total_calls, 2);
        assert!(app.snapshot.trends.total_calls.is_some());

        app.next_period();
        assert_eq!(app.selection, Selection::AllDays);

        app.previous_period();
        assert_eq!(app.selection, Selection::Day("2nd dec".to_string()));
    }

    #[test]
    fn test_options_start_with_all_days() {
        let store = store();
        let app = App::new(&store, Selection::AllDays, 7);
        let options = app.options();
        assert_eq!(options[0], Selection::AllDays);
        assert_eq!(options.len(), 3);
    }
}
