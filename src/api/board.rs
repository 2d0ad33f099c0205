use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::DrawingSurface;

use super::{ChartData, ChartHandle, ChartKind, ChartOptions};

/// Caller-owned set of charts keyed by placeholder id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartBoard {
    charts: IndexMap<String, ChartHandle>,
}

impl ChartBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a chart under a unique, non-empty id.
    pub fn create(
        &mut self,
        id: impl Into<String>,
        kind: ChartKind,
        data: ChartData,
        options: ChartOptions,
    ) -> ChartResult<&ChartHandle> {
        let id = id.into();
        if id.is_empty() {
            return Err(ChartError::InvalidData(
                "chart id must not be empty".to_owned(),
            ));
        }
        if self.charts.contains_key(&id) {
            return Err(ChartError::InvalidData(format!(
                "chart with id `{id}` is already registered"
            )));
        }
        let handle = ChartHandle::create(kind, data, options)?;
        debug!(id = %id, kind = kind.name(), "registered chart");
        let entry = self.charts.entry(id).or_insert(handle);
        Ok(entry)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ChartHandle> {
        self.charts.get(id)
    }

    pub fn update_data(&mut self, id: &str, data: ChartData) -> ChartResult<()> {
        self.handle_mut(id)?.update_data(data)
    }

    pub fn update_options(&mut self, id: &str, options: ChartOptions) -> ChartResult<()> {
        self.handle_mut(id)?.update_options(options);
        Ok(())
    }

    pub fn draw<S: DrawingSurface + ?Sized>(&self, id: &str, surface: &mut S) -> ChartResult<()> {
        self.charts
            .get(id)
            .ok_or_else(|| unknown_chart(id))?
            .draw(surface)
    }

    /// Removes a chart by id. Returns `true` when removed.
    pub fn destroy(&mut self, id: &str) -> bool {
        self.charts.shift_remove(id).is_some()
    }

    pub fn destroy_all(&mut self) {
        self.charts.clear();
    }

    /// Applies one size to every chart; stops at the first invalid size.
    pub fn resize_all(&mut self, width: f64, height: f64) -> ChartResult<()> {
        for handle in self.charts.values_mut() {
            handle.resize(width, height)?;
        }
        Ok(())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.charts.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    fn handle_mut(&mut self, id: &str) -> ChartResult<&mut ChartHandle> {
        self.charts.get_mut(id).ok_or_else(|| unknown_chart(id))
    }
}

fn unknown_chart(id: &str) -> ChartError {
    ChartError::InvalidData(format!("no chart registered with id `{id}`"))
}
