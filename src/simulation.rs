//! Drives the iterations of a routing simulation.
//!
//! Every iteration renders the global tree, then runs one shortest path
//! search per router, logs its distances and paths and renders its routing
//! tree. Between two iterations the driver sleeps and lets the weights drift.
//! Iterations run strictly one after another.

use std::{thread, time::Duration};

use log::{debug, info, warn};
use rand::Rng;

use crate::{
    config::RunConfig,
    dynamics::WeightDynamics,
    error::{Error, Result},
    graphs::{matrix_graph::MatrixGraph, read_adjacency_matrix_file, Graph},
    history::{create_history, HistorySink, SourceRecord},
    render::{DotFileRenderer, GraphvizRenderer, RendererKind, TreeRenderer},
    search::{dijkstra::search_into, dijkstra_data::DijkstraDataVec},
    tree::RoutingTree,
    utility::get_progressbar,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationState {
    Initializing,
    Iterating(u32),
    Done,
}

pub struct Simulation<R: Rng> {
    graph: MatrixGraph,
    dynamics: WeightDynamics<R>,
    iterations: u32,
    time_interval: Duration,
    state: SimulationState,
}

impl<R: Rng> Simulation<R> {
    pub fn new(
        graph: MatrixGraph,
        dynamics: WeightDynamics<R>,
        iterations: u32,
        time_interval: Duration,
    ) -> Simulation<R> {
        Simulation {
            graph,
            dynamics,
            iterations,
            time_interval,
            state: SimulationState::Initializing,
        }
    }

    pub fn graph(&self) -> &MatrixGraph {
        &self.graph
    }

    pub fn into_graph(self) -> MatrixGraph {
        self.graph
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Runs all iterations, then finishes `history`.
    ///
    /// A simulation runs once. The first error aborts the run; whatever was
    /// rendered or logged until then is left in place.
    pub fn run(
        &mut self,
        renderer: &mut dyn TreeRenderer,
        history: &mut dyn HistorySink,
    ) -> Result<()> {
        if self.state != SimulationState::Initializing {
            return Err(Error::config("simulation has already been run"));
        }

        self.dynamics.initialize_weights(&mut self.graph);

        let pb = get_progressbar("Iterations", self.iterations as u64);
        for iteration in 0..self.iterations {
            self.state = SimulationState::Iterating(iteration);
            info!("iteration {} of {}", iteration + 1, self.iterations);

            self.run_iteration(iteration, renderer, history)?;
            pb.inc(1);

            if iteration + 1 != self.iterations {
                if !self.time_interval.is_zero() {
                    debug!("waiting {:?}", self.time_interval);
                    thread::sleep(self.time_interval);
                }
                self.dynamics.update_weights(&mut self.graph);
            }
        }
        pb.finish_and_clear();

        history.finish()?;
        self.state = SimulationState::Done;
        info!("finished {} iterations", self.iterations);

        Ok(())
    }

    fn run_iteration(
        &self,
        iteration: u32,
        renderer: &mut dyn TreeRenderer,
        history: &mut dyn HistorySink,
    ) -> Result<()> {
        renderer.render(&RoutingTree::global(&self.graph, iteration))?;

        let mut data = DijkstraDataVec::new(&self.graph);
        for source in self.graph.vertices() {
            search_into(&self.graph, source, &mut data);
            let record = SourceRecord::new(iteration, source, &data);
            history.record(&record)?;

            let tree = RoutingTree::for_router(&self.graph, source, iteration, &record.paths);
            debug!("router {}: {} tree edges", source, tree.edges.len());
            renderer.render(&tree)?;
        }

        Ok(())
    }
}

/// Loads the graph named by `config` and runs the whole simulation, returning
/// the graph with its final weights.
pub fn run(config: &RunConfig) -> Result<MatrixGraph> {
    config.validate()?;
    info!("{}", serde_json::to_string(config)?);

    let graph = read_adjacency_matrix_file(&config.input_matrix)?;
    info!(
        "loaded graph with {} vertices and {} edges",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );
    if !graph.is_symmetric() {
        warn!("adjacency matrix is not symmetric, trees may differ per direction");
    }

    let mut history = create_history(&config.history, config.history_format)?;
    let mut renderer: Box<dyn TreeRenderer> = match config.renderer {
        RendererKind::Graphviz => Box::new(GraphvizRenderer::new(
            &config.output_file,
            &config.image_dir,
        )),
        RendererKind::DotOnly => Box::new(DotFileRenderer::new(&config.image_dir)),
    };

    let mut simulation = Simulation::new(
        graph,
        WeightDynamics::from_seed(config.seed),
        config.iterations,
        Duration::from_secs(config.time_interval),
    );
    simulation.run(renderer.as_mut(), history.as_mut())?;

    Ok(simulation.into_graph())
}
