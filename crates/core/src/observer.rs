//! Notification seam between the engine and its rendering collaborator.
//!
//! The controller owns exactly one observer and calls it synchronously for
//! every visible change, so a renderer can redraw only what changed.

/// Receives display-affecting events from the controller.
pub trait LifeObserver {
    /// A cell's displayed liveness changed.
    fn on_cell_changed(&mut self, x: i32, y: i32, is_alive: bool);

    /// The grid was recreated with new dimensions; everything is dead.
    fn on_grid_reset(&mut self, rows: usize, cols: usize);

    /// A cell's selection highlight changed.
    fn on_selection_changed(&mut self, _x: i32, _y: i32, _selected: bool) {}
}

/// Observer for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl LifeObserver for NullObserver {
    fn on_cell_changed(&mut self, _x: i32, _y: i32, _is_alive: bool) {}
    fn on_grid_reset(&mut self, _rows: usize, _cols: usize) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverEvent {
    CellChanged { x: i32, y: i32, is_alive: bool },
    GridReset { rows: usize, cols: usize },
    SelectionChanged { x: i32, y: i32, selected: bool },
}

/// Observer that records every event, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub events: Vec<ObserverEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<ObserverEvent> {
        std::mem::take(&mut self.events)
    }

    /// Recorded cell changes only, as `(x, y, is_alive)`.
    pub fn cell_changes(&self) -> Vec<(i32, i32, bool)> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                ObserverEvent::CellChanged { x, y, is_alive } => Some((x, y, is_alive)),
                _ => None,
            })
            .collect()
    }
}

impl LifeObserver for RecordingObserver {
    fn on_cell_changed(&mut self, x: i32, y: i32, is_alive: bool) {
        self.events
            .push(ObserverEvent::CellChanged { x, y, is_alive });
    }

    fn on_grid_reset(&mut self, rows: usize, cols: usize) {
        self.events.push(ObserverEvent::GridReset { rows, cols });
    }

    fn on_selection_changed(&mut self, x: i32, y: i32, selected: bool) {
        self.events
            .push(ObserverEvent::SelectionChanged { x, y, selected });
    }
}

impl<O: LifeObserver + ?Sized> LifeObserver for &mut O {
    fn on_cell_changed(&mut self, x: i32, y: i32, is_alive: bool) {
        (**self).on_cell_changed(x, y, is_alive);
    }

    fn on_grid_reset(&mut self, rows: usize, cols: usize) {
        (**self).on_grid_reset(rows, cols);
    }

    fn on_selection_changed(&mut self, x: i32, y: i32, selected: bool) {
        (**self).on_selection_changed(x, y, selected);
    }
}
