//! Chart mount state — one live chart instance per mount point.
//!
//! The app owns a [`ChartMount`] per chart container and calls
//! [`ChartMount::render`] whenever its inputs may have changed. The mount
//! decides whether the existing instance can stay, and always removes the old
//! instance before creating a new one.

use super::{base_price, to_series, ChartMode, ChartOptions, ChartSeries, Density, Ohlc};

/// The external charting library, behind a narrow interface.
pub trait ChartRenderer {
    /// Opaque handle to a live chart instance.
    type Handle;

    fn create(&mut self, options: &ChartOptions, series: &ChartSeries) -> Self::Handle;

    fn remove(&mut self, handle: Self::Handle);
}

/// What [`ChartMount::render`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Inputs unchanged; the live instance was kept.
    Unchanged,
    /// A new instance was created (any previous one was removed first).
    Rebuilt,
    /// No data; nothing is rendered (any previous instance was removed).
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
struct Inputs {
    data: Vec<Ohlc>,
    mode: ChartMode,
    density: Density,
}

/// Owns at most one chart instance for a mount point.
pub struct ChartMount<R: ChartRenderer> {
    renderer: R,
    live: Option<(Inputs, R::Handle)>,
}

impl<R: ChartRenderer> ChartMount<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            live: None,
        }
    }

    /// Re-derives the chart when data, mode or density changed.
    pub fn render(&mut self, data: &[Ohlc], mode: ChartMode, density: Density) -> RenderOutcome {
        if data.is_empty() {
            self.teardown();
            return RenderOutcome::Empty;
        }

        if let Some((inputs, _)) = &self.live {
            if inputs.mode == mode && inputs.density == density && inputs.data == data {
                return RenderOutcome::Unchanged;
            }
        }

        self.teardown();

        let options = ChartOptions::for_view(mode, density, base_price(data));
        let series = to_series(data, mode);
        let handle = self.renderer.create(&options, &series);
        tracing::debug!(points = series.len(), ?mode, ?density, "Chart rebuilt");

        self.live = Some((
            Inputs {
                data: data.to_vec(),
                mode,
                density,
            },
            handle,
        ));
        RenderOutcome::Rebuilt
    }

    /// Removes the live instance, if any (unmount).
    pub fn teardown(&mut self) {
        if let Some((_, handle)) = self.live.take() {
            self.renderer.remove(handle);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.live.is_some()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: ChartRenderer> Drop for ChartMount<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records instance lifecycles; `live` must never exceed one.
    #[derive(Default)]
    struct RecordingRenderer {
        next_id: u32,
        live: Vec<u32>,
        max_live: usize,
        created: Vec<(ChartOptions, ChartSeries)>,
    }

    impl ChartRenderer for RecordingRenderer {
        type Handle = u32;

        fn create(&mut self, options: &ChartOptions, series: &ChartSeries) -> u32 {
            self.next_id += 1;
            self.live.push(self.next_id);
            self.max_live = self.max_live.max(self.live.len());
            self.created.push((options.clone(), series.clone()));
            self.next_id
        }

        fn remove(&mut self, handle: u32) {
            self.live.retain(|h| *h != handle);
        }
    }

    fn candles(closes: &[f64]) -> Vec<Ohlc> {
        closes
            .iter()
            .enumerate()
            .map(|(i, c)| Ohlc {
                time_ms: i as i64 * 60_000,
                open: *c,
                high: *c,
                low: *c,
                close: *c,
            })
            .collect()
    }

    #[test]
    fn test_empty_data_renders_nothing() {
        let mut mount = ChartMount::new(RecordingRenderer::default());
        assert_eq!(mount.render(&[], ChartMode::Line, Density::Desktop), RenderOutcome::Empty);
        assert!(mount.renderer().created.is_empty());
        assert!(!mount.is_mounted());
    }

    #[test]
    fn test_same_inputs_keep_instance() {
        let mut mount = ChartMount::new(RecordingRenderer::default());
        let data = candles(&[1.0, 2.0]);
        assert_eq!(mount.render(&data, ChartMode::Line, Density::Desktop), RenderOutcome::Rebuilt);
        assert_eq!(mount.render(&data, ChartMode::Line, Density::Desktop), RenderOutcome::Unchanged);
        assert_eq!(mount.renderer().created.len(), 1);
    }

    #[test]
    fn test_mode_density_and_data_changes_rebuild_one_at_a_time() {
        let mut mount = ChartMount::new(RecordingRenderer::default());
        let data = candles(&[1.0, 2.0]);
        mount.render(&data, ChartMode::Line, Density::Desktop);
        mount.render(&data, ChartMode::Candlestick, Density::Desktop);
        mount.render(&data, ChartMode::Candlestick, Density::Compact);
        mount.render(&candles(&[3.0]), ChartMode::Candlestick, Density::Compact);

        let renderer = mount.renderer();
        assert_eq!(renderer.created.len(), 4);
        assert_eq!(renderer.max_live, 1);
        assert_eq!(renderer.live.len(), 1);
        assert_eq!(renderer.created[3].0.base_price, 3.0);
    }

    #[test]
    fn test_data_going_empty_tears_down() {
        let mut mount = ChartMount::new(RecordingRenderer::default());
        mount.render(&candles(&[1.0]), ChartMode::Line, Density::Desktop);
        mount.render(&[], ChartMode::Line, Density::Desktop);
        assert!(mount.renderer().live.is_empty());
    }
}
