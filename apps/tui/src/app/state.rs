use crate::app::input::helpers::{clamp_step, wrap_decrement, wrap_increment};
use fan_value_engine::analytics::{rank_fan_ids, unique_fan_ids};
use fan_value_engine::data::{DataError, Dataset};
use fan_value_engine::View;

/// Rows moved by PageUp/PageDown in lists and tables.
pub const PAGE_STEP: isize = 5;

/// Interactive state. The dataset is read-only; everything else is the
/// current selection, so every frame is a pure render of `(App, dataset)`.
#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub view: View,
    pub show_help: bool,
    pub status_message: String,
    pub dataset: Dataset,
    pub fan_filter: String,
    pub selected_fan_index: usize,
    pub cluster_table_offset: usize,
    /// Unique fan ids, read once from the loaded table.
    fan_ids: Result<Vec<String>, DataError>,
    /// Positions in `fan_ids` matching `fan_filter`, best first.
    fan_matches: Vec<usize>,
}

impl App {
    pub fn new(dataset: Dataset, view: View) -> Self {
        let fan_ids = unique_fan_ids(&dataset.fans)
            .map(|ids| ids.into_iter().map(str::to_string).collect::<Vec<_>>());
        if let Err(err) = &fan_ids {
            tracing::warn!(error = %err, "fan selector unavailable");
        }
        let fan_matches = fan_ids
            .as_ref()
            .map_or_else(|_| Vec::new(), |ids| (0..ids.len()).collect());

        Self {
            running: true,
            view,
            show_help: false,
            status_message: String::new(),
            dataset,
            fan_filter: String::new(),
            selected_fan_index: 0,
            cluster_table_offset: 0,
            fan_ids,
            fan_matches,
        }
    }

    pub fn select_view(&mut self, view: View) {
        if self.view != view {
            tracing::debug!(from = self.view.as_str(), to = view.as_str(), "switching view");
        }
        self.view = view;
        self.status_message.clear();
    }

    pub fn next_view(&mut self) {
        let index = wrap_increment(self.view.index(), View::ALL.len());
        self.select_view(View::from_index(index).unwrap_or_default());
    }

    pub fn prev_view(&mut self) {
        let index = wrap_decrement(self.view.index(), View::ALL.len());
        self.select_view(View::from_index(index).unwrap_or_default());
    }

    /// Fan ids offered by the selector after applying the filter.
    pub fn fan_choices(&self) -> Result<Vec<&str>, &DataError> {
        let ids = self.fan_ids.as_ref()?;
        Ok(self
            .fan_matches
            .iter()
            .filter_map(|index| ids.get(*index).map(String::as_str))
            .collect())
    }

    pub fn selected_fan_id(&self) -> Option<&str> {
        let ids = self.fan_ids.as_ref().ok()?;
        let index = self.fan_matches.get(self.selected_fan_index)?;
        ids.get(*index).map(String::as_str)
    }

    pub fn push_filter_char(&mut self, ch: char) {
        self.fan_filter.push(ch);
        self.refresh_fan_matches();
    }

    pub fn pop_filter_char(&mut self) {
        if self.fan_filter.pop().is_some() {
            self.refresh_fan_matches();
        }
    }

    pub fn clear_filter(&mut self) {
        self.fan_filter.clear();
        self.refresh_fan_matches();
    }

    fn refresh_fan_matches(&mut self) {
        self.fan_matches = match &self.fan_ids {
            Ok(ids) => rank_fan_ids(ids.as_slice(), &self.fan_filter),
            Err(_) => Vec::new(),
        };
        self.selected_fan_index = 0;
    }

    /// Moves the fan selection by `delta`, clamped to the filtered list.
    pub fn move_fan_selection(&mut self, delta: isize) {
        let len = self.fan_matches.len();
        self.selected_fan_index = clamp_step(self.selected_fan_index, delta, len);
    }

    pub fn select_last_fan(&mut self) {
        self.selected_fan_index = self.fan_matches.len().saturating_sub(1);
    }

    /// Scrolls the raw cluster table by `delta` rows.
    pub fn scroll_cluster_table(&mut self, delta: isize) {
        let len = self.dataset.clusters.len();
        self.cluster_table_offset = clamp_step(self.cluster_table_offset, delta, len);
    }
}
