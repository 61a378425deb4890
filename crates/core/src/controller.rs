//! Simulation controller - owns the live grid and everything that mutates it
//!
//! The controller is a two-state machine (stopped / running) driven by a
//! cooperative [`TickTimer`]. Callers feed it elapsed time through
//! [`SimulationController::advance`]; every operation takes `&mut self`, so a
//! tick can never interleave with an edit or a navigation step.
//!
//! # History and replay
//!
//! Before each generation the pre-step grid is pushed into the
//! [`HistoryStore`]. Stepping back or forward switches the *displayed* grid
//! to a snapshot (pausing the simulation) and reports only the cells that
//! differ. Starting or single-stepping while a snapshot is displayed resumes
//! from that snapshot: it becomes the live grid and newer snapshots are
//! discarded.

use log::{debug, info, trace};

use crate::config::{interval_in_range, LifeConfig};
use crate::grid::Grid;
use crate::history::{HistoryStore, HistoryView};
use crate::observer::{LifeObserver, NullObserver};
use crate::timer::TickTimer;
use crate::transition;
use crate::types::{CellChange, LifeError, RuleSet, RunState};

/// Read-only view of one cell for input-layer highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub is_alive: bool,
    pub selected: bool,
}

#[derive(Debug)]
pub struct SimulationController<O: LifeObserver = NullObserver> {
    grid: Grid,
    /// Snapshot on display while the history cursor is in the past.
    view: Option<Grid>,
    history: HistoryStore,
    rules: RuleSet,
    timer: TickTimer,
    state: RunState,
    interval_ms: u32,
    cell_size: u16,
    /// Generations computed since the last reset.
    generation: u64,
    observer: O,
}

impl SimulationController<NullObserver> {
    /// Headless controller with no rendering collaborator.
    pub fn headless(config: LifeConfig, rows: usize, cols: usize) -> Self {
        Self::new(config, rows, cols, NullObserver)
    }
}

impl<O: LifeObserver> SimulationController<O> {
    /// Create a stopped controller with an all-dead `rows × cols` grid.
    ///
    /// The observer immediately receives `on_grid_reset(rows, cols)`.
    pub fn new(config: LifeConfig, rows: usize, cols: usize, mut observer: O) -> Self {
        let config = config.validated();
        observer.on_grid_reset(rows, cols);
        Self {
            grid: Grid::new(rows, cols),
            view: None,
            history: HistoryStore::new(config.history_length),
            rules: config.rules,
            timer: TickTimer::new(),
            state: RunState::Stopped,
            interval_ms: config.interval_ms,
            cell_size: config.cell_size,
            generation: 0,
            observer,
        }
    }

    /// Create a controller sized to fit a `width × height` surface.
    pub fn for_viewport(config: LifeConfig, width: u32, height: u32, observer: O) -> Self {
        let config = config.validated();
        let (rows, cols) = dims_for(width, height, config.cell_size);
        Self::new(config, rows, cols, observer)
    }

    // ---- state machine ----

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Stopped → Running. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.resume_from_view();
        self.timer.start(self.interval_ms);
        self.state = RunState::Running;
        info!(
            "simulation started at generation {} ({}ms)",
            self.generation, self.interval_ms
        );
        true
    }

    /// Running → Stopped. Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.timer.cancel();
        self.state = RunState::Stopped;
        info!("simulation stopped at generation {}", self.generation);
        true
    }

    pub fn toggle(&mut self) -> RunState {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.state
    }

    /// Feed elapsed wall time; runs every tick that came due, in order.
    ///
    /// Returns the number of generations computed.
    pub fn advance(&mut self, elapsed_ms: u64) -> u32 {
        let due = self.timer.advance(elapsed_ms);
        let mut ran = 0;
        for _ in 0..due {
            if !self.is_running() {
                break;
            }
            self.tick();
            ran += 1;
        }
        ran
    }

    /// Time until the next scheduled tick, or `None` when stopped.
    pub fn next_tick_in_ms(&self) -> Option<u64> {
        self.timer.remaining_ms()
    }

    /// Compute one generation on the live grid.
    ///
    /// This is both the scheduled callback and the manual single step.
    pub fn tick(&mut self) -> Vec<CellChange> {
        self.resume_from_view();

        if self.history.is_recording() {
            self.history.push(self.grid.clone());
        }

        let changes = transition::step(&mut self.grid, &self.rules);
        for change in &changes {
            self.observer
                .on_cell_changed(change.x, change.y, change.is_alive);
        }
        self.generation += 1;
        trace!(
            "generation {}: {} cells changed",
            self.generation,
            changes.len()
        );
        changes
    }

    // ---- editing ----

    /// Flip the live cell at `(x, y)`, returning its new liveness.
    pub fn edit_cell(&mut self, x: i32, y: i32) -> Result<bool, LifeError> {
        if !self.history.is_live() {
            return Err(LifeError::NotLive {
                cursor: self.history.cursor(),
            });
        }
        let alive = self
            .grid
            .flip(x, y)
            .ok_or(LifeError::OutOfBounds { x, y })?;
        self.observer.on_cell_changed(x, y, alive);
        Ok(alive)
    }

    /// Toggle the selection highlight at `(x, y)`, returning the new state.
    ///
    /// Selection belongs to the live grid and is allowed while viewing history.
    pub fn select(&mut self, x: i32, y: i32) -> Result<bool, LifeError> {
        let selected = self
            .grid
            .toggle_selected(x, y)
            .ok_or(LifeError::OutOfBounds { x, y })?;
        self.observer.on_selection_changed(x, y, selected);
        Ok(selected)
    }

    /// Clear every selection, returning how many cells were deselected.
    pub fn deselect_all(&mut self) -> usize {
        let cleared = self.grid.clear_selection();
        for &(x, y) in &cleared {
            self.observer.on_selection_changed(x, y, false);
        }
        cleared.len()
    }

    /// Liveness as displayed, selection as on the live grid.
    pub fn get_cell(&self, x: i32, y: i32) -> Option<CellView> {
        let shown = self.displayed().get(x, y)?;
        let live = self.grid.get(x, y)?;
        Some(CellView {
            is_alive: shown.is_alive(),
            selected: live.selected(),
        })
    }

    // ---- history navigation ----

    /// Show the previous retained generation. Pauses the simulation on success.
    pub fn step_back(&mut self) -> bool {
        match self.history.step_back() {
            Some(view) => {
                self.stop();
                debug!("history cursor -> {}", self.history.cursor());
                self.show(view);
                true
            }
            None => false,
        }
    }

    /// Show the next newer generation (or the live grid). Pauses on success.
    pub fn step_forward(&mut self) -> bool {
        match self.history.step_forward() {
            Some(view) => {
                self.stop();
                debug!("history cursor -> {}", self.history.cursor());
                self.show(view);
                true
            }
            None => false,
        }
    }

    fn show(&mut self, view: HistoryView) {
        let next = match view {
            HistoryView::Live => None,
            HistoryView::Past(grid) => Some(grid),
        };
        let changes = next.as_ref().unwrap_or(&self.grid).diff(self.displayed());
        self.view = next;
        for change in changes {
            self.observer
                .on_cell_changed(change.x, change.y, change.is_alive);
        }
    }

    /// Make the displayed snapshot the live grid, keeping live selections.
    ///
    /// The generation counter moves back with it.
    fn resume_from_view(&mut self) {
        let back = self.history.cursor() as u64;
        let Some(mut restored) = self.history.rewind() else {
            return;
        };
        self.generation = self.generation.saturating_sub(back);
        for (dst, src) in restored
            .cells_mut()
            .iter_mut()
            .zip(self.grid.cells().iter())
        {
            dst.selected = src.selected;
        }
        self.grid = restored;
        self.view = None;
        debug!(
            "resumed from history; {} snapshots retained",
            self.history.len()
        );
    }

    // ---- lifecycle ----

    /// Stop, recreate an all-dead grid, and forget history.
    pub fn reset(&mut self, rows: usize, cols: usize) {
        self.stop();
        self.grid = Grid::new(rows, cols);
        self.view = None;
        self.history.clear();
        self.generation = 0;
        self.observer.on_grid_reset(rows, cols);
        info!("grid reset to {rows}x{cols}");
    }

    /// Reset keeping the current dimensions.
    pub fn clear(&mut self) {
        self.reset(self.grid.rows(), self.grid.cols());
    }

    /// Reset to the largest grid that fits `width × height` at the current cell size.
    pub fn resize_to_viewport(&mut self, width: u32, height: u32) {
        let (rows, cols) = dims_for(width, height, self.cell_size);
        self.reset(rows, cols);
    }

    // ---- configuration ----

    /// Change the tick interval; takes effect from the next tick.
    ///
    /// While running, the pending tick is cancelled and rescheduled at the new
    /// rate without leaving the running state.
    pub fn set_interval_time(&mut self, ms: u32) -> Result<(), LifeError> {
        if !interval_in_range(ms) {
            return Err(LifeError::InvalidConfiguration {
                field: "interval_ms",
                value: ms as u64,
            });
        }
        self.interval_ms = ms;
        if self.is_running() {
            self.timer.start(ms);
        }
        debug!("interval set to {ms}ms");
        Ok(())
    }

    /// Change how many generations are retained (must be at least 1).
    pub fn set_history_length(&mut self, length: usize) -> Result<(), LifeError> {
        self.history.set_capacity(length)?;
        if self.view.is_some() {
            // Eviction may have removed the displayed snapshot.
            let view = match self.history.viewed() {
                Some(grid) => HistoryView::Past(grid.clone()),
                None => HistoryView::Live,
            };
            self.show(view);
        }
        Ok(())
    }

    /// Change the cell size used by the next viewport resize.
    pub fn set_cell_size(&mut self, size: u16) -> Result<(), LifeError> {
        if size == 0 {
            return Err(LifeError::InvalidConfiguration {
                field: "cell_size",
                value: 0,
            });
        }
        self.cell_size = size;
        Ok(())
    }

    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
    }

    pub fn set_underpopulation(&mut self, n: u8) {
        self.rules.underpopulation = n;
    }

    pub fn set_reproduction_min(&mut self, n: u8) {
        self.rules.reproduction_min = n;
    }

    pub fn set_reproduction_max(&mut self, n: u8) {
        self.rules.reproduction_max = n;
    }

    pub fn set_overpopulation(&mut self, n: u8) {
        self.rules.overpopulation = n;
    }

    pub fn set_dead_reproduction(&mut self, n: u8) {
        self.rules.dead_reproduction = n;
    }

    // ---- accessors ----

    /// The live grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The grid currently on display (a snapshot while viewing history)
    pub fn displayed(&self) -> &Grid {
        self.view.as_ref().unwrap_or(&self.grid)
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// History cursor: 0 is the live grid, larger is further back.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn interval_time(&self) -> u32 {
        self.interval_ms
    }

    pub fn history_length(&self) -> usize {
        self.history.capacity()
    }

    pub fn cell_size(&self) -> u16 {
        self.cell_size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

/// Whole `(rows, cols)` of `cell_size` that fit in `width × height`.
pub fn dims_for(width: u32, height: u32, cell_size: u16) -> (usize, usize) {
    let size = cell_size.max(1) as u32;
    ((height / size) as usize, (width / size) as usize)
}
