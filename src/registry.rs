use anyhow::Result;
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::generators;
use crate::graph::Graph;

/// Seed used for the random graph families unless configured otherwise.
pub const DEFAULT_SEED: u64 = 42;

pub type GraphBuilder = Box<dyn Fn() -> Result<Graph> + Send + Sync>;

/// Named graph constructors. The first entry is the default selection and
/// stands in for any name that is not registered.
pub struct GraphRegistry {
    builders: IndexMap<&'static str, GraphBuilder>,
}

impl GraphRegistry {
    pub fn new() -> Self {
        Self {
            builders: IndexMap::new(),
        }
    }

    /// The built-in selection: `karate` (default), `small_world`,
    /// `scale_free`, `tree`, `random` and `school`.
    pub fn with_seed(seed: u64) -> Self {
        let mut registry = Self::new();
        registry.register("karate", || Ok(generators::karate_club()));
        registry.register("small_world", move || {
            let mut rng = StdRng::seed_from_u64(seed);
            Ok(generators::watts_strogatz(30, 4, 0.1, &mut rng)?)
        });
        registry.register("scale_free", move || {
            let mut rng = StdRng::seed_from_u64(seed);
            Ok(generators::barabasi_albert(40, 2, &mut rng)?)
        });
        registry.register("tree", || Ok(generators::balanced_tree(2, 4)));
        registry.register("random", move || {
            let mut rng = StdRng::seed_from_u64(seed);
            Ok(generators::erdos_renyi(30, 0.15, &mut rng))
        });
        registry.register("school", || Ok(generators::school()));
        registry
    }

    pub fn register<F>(&mut self, name: &'static str, builder: F)
    where
        F: Fn() -> Result<Graph> + Send + Sync + 'static,
    {
        debug!("Registering graph builder '{}'", name);
        self.builders.insert(name, Box::new(builder));
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.builders.keys().copied().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    pub fn default_name(&self) -> Option<&'static str> {
        self.builders.first().map(|(name, _)| *name)
    }

    /// Registered name to use for `name`, falling back to the default.
    pub fn resolve(&self, name: &str) -> Option<&'static str> {
        match self.builders.get_key_value(name) {
            Some((key, _)) => Some(*key),
            None => {
                let fallback = self.default_name();
                info!(
                    "Unknown graph '{}', falling back to {:?}",
                    name, fallback
                );
                fallback
            }
        }
    }

    pub fn build(&self, name: &str) -> Result<Graph> {
        let resolved = self
            .resolve(name)
            .ok_or_else(|| anyhow::anyhow!("No graph builders registered"))?;
        info!("Building graph: {}", resolved);
        let graph = (self.builders[resolved])()?;
        debug!("Built {}", graph.stats());
        Ok(graph)
    }
}

impl Default for GraphRegistry {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}
