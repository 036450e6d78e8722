//! # Batch Orchestrator
//!
//! Runs the cutter and stone construction over a list of circles.
//!
//! ## Flow
//!
//! ```text
//! BatchInputs ─► validate ─► load reference stone (once)
//!                                   │
//!            per circle, in order:  ▼
//!            build_cutter + instantiate_stone + center
//!                                   │
//!                                   ▼
//!                              BatchOutput
//! ```
//!
//! Outputs are index-aligned with the inputs. With [`FailurePolicy::Abort`]
//! the first failing circle ends the batch; with [`FailurePolicy::Skip`] it
//! is left out and reported in [`BatchOutput::warnings`].

use std::time::Instant;

use config::constants::{CutterConfig, DEFAULT_BOTTOM_HEIGHT, DEFAULT_HEIGHT, REFERENCE_STONE_ASSET};
use gem_assets::{load_reference_stone, AssetProvider, ReferenceStone};
use gem_mesh::Mesh;
use glam::DVec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::CutterError;
use crate::geometry::Circle;
use crate::profile::build_cutter_with;
use crate::stone::instantiate_stone;

// =============================================================================
// INPUTS AND OPTIONS
// =============================================================================

/// Host-supplied inputs of one batch.
///
/// Every field is required; `None` models an input the host left
/// unconnected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchInputs {
    pub circles: Option<Vec<Circle>>,
    pub height: Option<f64>,
    pub bottom_height: Option<f64>,
}

impl BatchInputs {
    /// Inputs with the default heights.
    pub fn new(circles: Vec<Circle>) -> Self {
        Self {
            circles: Some(circles),
            height: Some(DEFAULT_HEIGHT),
            bottom_height: Some(DEFAULT_BOTTOM_HEIGHT),
        }
    }

    /// Replaces both heights.
    pub fn with_heights(mut self, height: f64, bottom_height: f64) -> Self {
        self.height = Some(height);
        self.bottom_height = Some(bottom_height);
        self
    }
}

/// What to do when a single circle fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Drop the failing circle and record a warning.
    Skip,
}

/// Batch settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOptions {
    /// Tessellation settings shared by every cutter.
    pub config: CutterConfig,
    pub failure_policy: FailurePolicy,
    /// Evaluate circles on the rayon thread pool.
    pub parallel: bool,
    /// Name of the reference stone asset.
    pub reference_asset: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            config: CutterConfig::default(),
            failure_policy: FailurePolicy::default(),
            parallel: false,
            reference_asset: REFERENCE_STONE_ASSET.to_string(),
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// A circle dropped under [`FailurePolicy::Skip`].
#[derive(Debug, Clone, PartialEq)]
pub struct ItemWarning {
    /// Index of the circle in the input list.
    pub index: usize,
    pub message: String,
}

/// Parallel output sequences of one batch.
///
/// Entry `k` of `cutters`, `stones` and `centers` belongs to input circle
/// `source_indices[k]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutput {
    pub cutters: Vec<Mesh>,
    pub stones: Vec<Mesh>,
    pub centers: Vec<DVec3>,
    pub source_indices: Vec<usize>,
    pub warnings: Vec<ItemWarning>,
}

impl BatchOutput {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            cutters: Vec::with_capacity(capacity),
            stones: Vec::with_capacity(capacity),
            centers: Vec::with_capacity(capacity),
            source_indices: Vec::with_capacity(capacity),
            warnings: Vec::new(),
        }
    }

    /// Number of produced items.
    pub fn len(&self) -> usize {
        self.cutters.len()
    }

    /// Returns true if no item was produced.
    pub fn is_empty(&self) -> bool {
        self.cutters.is_empty()
    }

    fn push(&mut self, index: usize, item: Item) {
        self.cutters.push(item.cutter);
        self.stones.push(item.stone);
        self.centers.push(item.center);
        self.source_indices.push(index);
    }
}

/// Everything produced for one circle.
struct Item {
    cutter: Mesh,
    stone: Mesh,
    center: DVec3,
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Processes a batch, loading the reference stone from `assets`.
///
/// Inputs are checked before the asset is read, so a missing input never
/// produces partial output.
///
/// # Errors
///
/// - [`CutterError::MissingInput`] naming the first absent input
/// - [`CutterError::AssetLoad`] when the reference stone cannot be loaded
/// - [`CutterError::InvalidConfig`] for unusable tessellation settings
/// - [`CutterError::Circle`] wrapping the first per-circle failure
///   (abort policy only)
///
/// # Example
///
/// ```rust
/// use gem_assets::BundledAssets;
/// use gem_cutter::{process, BatchInputs, BatchOptions, Circle, Plane};
///
/// let inputs = BatchInputs::new(vec![Circle::new(Plane::world_xy(), 1.0)]);
/// let output = process(&inputs, &BundledAssets, &BatchOptions::default()).unwrap();
/// assert_eq!(output.len(), 1);
/// assert_eq!(output.stones.len(), 1);
/// ```
pub fn process<P>(
    inputs: &BatchInputs,
    assets: &P,
    options: &BatchOptions,
) -> Result<BatchOutput, CutterError>
where
    P: AssetProvider + ?Sized,
{
    validate_inputs(inputs)?;
    let reference = load_reference_stone(assets, &options.reference_asset)?;
    process_with_reference(inputs, &reference, options)
}

/// Processes a batch against an already loaded reference stone.
pub fn process_with_reference(
    inputs: &BatchInputs,
    reference: &ReferenceStone,
    options: &BatchOptions,
) -> Result<BatchOutput, CutterError> {
    let (circles, height, bottom_height) = validate_inputs(inputs)?;
    let config = CutterConfig::new(options.config.segments, options.config.cap_tolerance)?;
    let start = Instant::now();

    let build = |index: usize, circle: &Circle| -> Result<Item, CutterError> {
        let item = build_item(circle, height, bottom_height, reference, &config).map_err(|source| {
            CutterError::Circle {
                index,
                source: Box::new(source),
            }
        })?;
        debug!(index, "processed circle");
        Ok(item)
    };

    // Both paths yield one result per circle in input order
    let output = if options.parallel {
        let results: Vec<_> = circles
            .par_iter()
            .enumerate()
            .map(|(index, circle)| build(index, circle))
            .collect();
        gather(results, circles.len(), options.failure_policy)?
    } else {
        let results = circles
            .iter()
            .enumerate()
            .map(|(index, circle)| build(index, circle));
        gather(results, circles.len(), options.failure_policy)?
    };

    info!(
        circles = circles.len(),
        produced = output.len(),
        skipped = output.warnings.len(),
        parallel = options.parallel,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "processed cutter batch"
    );

    Ok(output)
}

/// Folds per-circle results into the output, applying the failure policy.
///
/// Results must arrive in input order; a lazy iterator stops at the first
/// failure under [`FailurePolicy::Abort`].
fn gather<I>(results: I, capacity: usize, policy: FailurePolicy) -> Result<BatchOutput, CutterError>
where
    I: IntoIterator<Item = Result<Item, CutterError>>,
{
    let mut output = BatchOutput::with_capacity(capacity);
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(item) => output.push(index, item),
            Err(err) => match policy {
                FailurePolicy::Abort => return Err(err),
                FailurePolicy::Skip => {
                    warn!(index, error = %err.root(), "skipping circle");
                    output.warnings.push(ItemWarning {
                        index,
                        message: err.root().to_string(),
                    });
                }
            },
        }
    }
    Ok(output)
}

fn validate_inputs(inputs: &BatchInputs) -> Result<(&[Circle], f64, f64), CutterError> {
    let circles = inputs
        .circles
        .as_deref()
        .ok_or(CutterError::MissingInput("circles"))?;
    let height = inputs.height.ok_or(CutterError::MissingInput("height"))?;
    let bottom_height = inputs
        .bottom_height
        .ok_or(CutterError::MissingInput("bottom_height"))?;
    Ok((circles, height, bottom_height))
}

fn build_item(
    circle: &Circle,
    height: f64,
    bottom_height: f64,
    reference: &ReferenceStone,
    config: &CutterConfig,
) -> Result<Item, CutterError> {
    Ok(Item {
        cutter: build_cutter_with(circle, height, bottom_height, config)?,
        stone: instantiate_stone(reference, circle)?,
        center: circle.center(),
    })
}
