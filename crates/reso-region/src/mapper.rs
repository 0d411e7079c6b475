//! Connected-region mapping with per-class neighbourhoods
//!
//! [`map_regions`] cuts a classified grid into maximal connected regions
//! and records which regions touch which. Unlike plain connected-component
//! labelling, both relations are *class-dependent*: each class chooses the
//! neighbourhood used to grow its regions (its *contiguity*) and the
//! neighbourhood used to detect its neighbours (its *adjacency*). Wires,
//! for example, are grown eight-way so that two wires can cross through a
//! diagonal checkerboard without merging, while their adjacency stays
//! orthogonal.
//!
//! Region ids are dense, starting at 0, assigned in scan order (x outer,
//! y inner), so equal grids always map to equal region ids.

use std::collections::HashMap;

use reso_core::{Resel, ReselGrid};

use crate::error::{RegionError, RegionResult};

/// Orthogonal neighbour offsets: right, up, left, down.
pub const ORTHO: [(i32, i32); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];

/// Diagonal neighbour offsets.
pub const DIAG: [(i32, i32); 4] = [(1, -1), (-1, -1), (-1, 1), (1, 1)];

/// All eight neighbour offsets, orthogonal first.
pub const ORTHO_DIAG: [(i32, i32); 8] = [
    (1, 0),
    (0, -1),
    (-1, 0),
    (0, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
    (1, 1),
];

/// Configuration for [`map_regions`].
#[derive(Debug, Clone)]
pub struct MapperOptions {
    /// Maps each input code to its effective class. Codes absent from the
    /// table classify as [`Resel::Empty`] and form no region. Folding two
    /// codes to one class (e.g. a wire's on and off tones) makes them grow
    /// a single region.
    pub class_table: HashMap<Resel, Resel>,
    /// Per-class contiguity neighbourhood. Classes without an entry use
    /// [`ORTHO`].
    pub contiguities: HashMap<Resel, Vec<(i32, i32)>>,
    /// Per-class adjacency neighbourhood. Classes without an entry use
    /// [`ORTHO`].
    pub adjacencies: HashMap<Resel, Vec<(i32, i32)>>,
    /// Store the pixel→region index sparsely. Prefer this when most pixels
    /// classify as empty.
    pub sparse: bool,
    /// Treat the grid as a torus: neighbour coordinates wrap modulo the
    /// grid dimensions.
    pub wrap: bool,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            class_table: HashMap::new(),
            contiguities: HashMap::new(),
            adjacencies: HashMap::new(),
            sparse: true,
            wrap: false,
        }
    }
}

/// A maximal connected set of same-class cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Dense id, assigned in scan order.
    pub id: usize,
    /// The effective class of every cell in the region.
    pub class: Resel,
    /// The region's cells, in fill-traversal order. The order is an
    /// implementation detail; compare as a set.
    pub pixels: Vec<(u32, u32)>,
}

/// Pixel → region id lookup, sparse or dense per [`MapperOptions::sparse`].
#[derive(Debug, Clone)]
enum PixelIndex {
    Sparse(HashMap<(u32, u32), usize>),
    Dense { width: u32, ids: Vec<Option<usize>> },
}

impl PixelIndex {
    fn new(sparse: bool, width: u32, height: u32) -> Self {
        if sparse {
            PixelIndex::Sparse(HashMap::new())
        } else {
            PixelIndex::Dense {
                width,
                ids: vec![None; (width as usize) * (height as usize)],
            }
        }
    }

    fn insert(&mut self, x: u32, y: u32, id: usize) {
        match self {
            PixelIndex::Sparse(map) => {
                map.insert((x, y), id);
            }
            PixelIndex::Dense { width, ids } => {
                ids[(y as usize) * (*width as usize) + (x as usize)] = Some(id);
            }
        }
    }

    fn get(&self, x: u32, y: u32) -> Option<usize> {
        match self {
            PixelIndex::Sparse(map) => map.get(&(x, y)).copied(),
            PixelIndex::Dense { width, ids } => {
                ids[(y as usize) * (*width as usize) + (x as usize)]
            }
        }
    }
}

/// The result of [`map_regions`]: regions, pixel lookup, per-class lists,
/// and the raw adjacency relation.
#[derive(Debug, Clone)]
pub struct RegionMap {
    regions: Vec<Region>,
    index: PixelIndex,
    with_class: HashMap<Resel, Vec<usize>>,
    adjacent: Vec<Vec<usize>>,
}

impl RegionMap {
    /// All regions, ordered by id.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True if the grid produced no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// The region with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnknownRegion`] for an id the mapper never
    /// assigned; ids are dense in `0..len()`.
    pub fn region(&self, id: usize) -> RegionResult<&Region> {
        self.regions.get(id).ok_or(RegionError::UnknownRegion {
            id,
            count: self.regions.len(),
        })
    }

    /// Ids of the regions the given region touches, from its own
    /// viewpoint (its class's adjacency neighbourhood). The relation is
    /// directional; it is symmetric only between classes sharing a
    /// neighbourhood.
    pub fn adjacent_regions(&self, id: usize) -> RegionResult<&[usize]> {
        self.adjacent
            .get(id)
            .map(Vec::as_slice)
            .ok_or(RegionError::UnknownRegion {
                id,
                count: self.regions.len(),
            })
    }

    /// Ids of all regions of a class, in assignment order. Empty for a
    /// class with no regions.
    pub fn regions_with_class(&self, class: Resel) -> &[usize] {
        self.with_class.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The region id at a pixel, or `None` for empty or out-of-grid
    /// pixels.
    pub fn region_at_pixel(&self, x: u32, y: u32) -> Option<usize> {
        self.index.get(x, y)
    }
}

/// Map a classified grid into regions and their adjacencies.
///
/// The grid is first re-classified through `options.class_table`; each
/// unvisited non-empty cell then seeds a flood fill over its class's
/// contiguity neighbourhood, and a final pass collects, for every region,
/// the distinct other regions reachable through its class's adjacency
/// neighbourhood.
///
/// # Errors
///
/// Returns [`RegionError::InvalidNeighborhood`] if a contiguity or
/// adjacency entry is empty or contains the zero offset. The mapper is
/// otherwise total.
pub fn map_regions(grid: &ReselGrid, options: &MapperOptions) -> RegionResult<RegionMap> {
    validate_neighborhoods("contiguities", &options.contiguities)?;
    validate_neighborhoods("adjacencies", &options.adjacencies)?;

    let width = grid.width();
    let height = grid.height();

    // Re-classify every cell; Empty means "no region".
    let classified = classify(grid, &options.class_table);
    let class_at = |x: u32, y: u32| classified[(y as usize) * (width as usize) + (x as usize)];

    let mut regions: Vec<Region> = Vec::new();
    let mut index = PixelIndex::new(options.sparse, width, height);
    let mut with_class: HashMap<Resel, Vec<usize>> = HashMap::new();
    let mut visited = vec![false; (width as usize) * (height as usize)];

    let mut neighbors = Vec::with_capacity(8);

    // Scan in x-outer order so region ids are reproducible.
    for x in 0..width {
        for y in 0..height {
            if visited[(y as usize) * (width as usize) + (x as usize)] {
                continue;
            }
            let class = class_at(x, y);
            if class.is_empty() {
                continue;
            }

            let id = regions.len();
            let contiguity = neighborhood_for(&options.contiguities, class);
            let mut pixels = Vec::new();
            let mut stack = vec![(x, y)];
            visited[(y as usize) * (width as usize) + (x as usize)] = true;

            while let Some((cx, cy)) = stack.pop() {
                pixels.push((cx, cy));
                index.insert(cx, cy, id);
                collect_neighbors(cx, cy, width, height, contiguity, options.wrap, &mut neighbors);
                for &(nx, ny) in &neighbors {
                    let nidx = (ny as usize) * (width as usize) + (nx as usize);
                    if !visited[nidx] && class_at(nx, ny) == class {
                        visited[nidx] = true;
                        stack.push((nx, ny));
                    }
                }
            }

            with_class.entry(class).or_default().push(id);
            regions.push(Region { id, class, pixels });
        }
    }

    // Adjacency pass: directional, from each region's viewpoint.
    let mut adjacent: Vec<Vec<usize>> = vec![Vec::new(); regions.len()];
    for region in &regions {
        let adjacency = neighborhood_for(&options.adjacencies, region.class);
        for &(px, py) in &region.pixels {
            collect_neighbors(px, py, width, height, adjacency, options.wrap, &mut neighbors);
            for &(nx, ny) in &neighbors {
                if class_at(nx, ny).is_empty() {
                    continue;
                }
                if let Some(other) = index.get(nx, ny)
                    && other != region.id
                    && !adjacent[region.id].contains(&other)
                {
                    adjacent[region.id].push(other);
                }
            }
        }
    }

    Ok(RegionMap {
        regions,
        index,
        with_class,
        adjacent,
    })
}

fn classify(grid: &ReselGrid, class_table: &HashMap<Resel, Resel>) -> Vec<Resel> {
    let width = grid.width();
    let height = grid.height();
    let mut classified = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            let code = grid.get(x, y).unwrap_or(Resel::Empty);
            classified.push(class_table.get(&code).copied().unwrap_or(Resel::Empty));
        }
    }
    classified
}

fn neighborhood_for<'a>(
    table: &'a HashMap<Resel, Vec<(i32, i32)>>,
    class: Resel,
) -> &'a [(i32, i32)] {
    table.get(&class).map(Vec::as_slice).unwrap_or(&ORTHO)
}

/// Push the in-grid (or wrapped) neighbours of `(x, y)` into `out`.
fn collect_neighbors(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    offsets: &[(i32, i32)],
    wrap: bool,
    out: &mut Vec<(u32, u32)>,
) {
    out.clear();
    for &(dx, dy) in offsets {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if wrap {
            out.push((
                nx.rem_euclid(width as i64) as u32,
                ny.rem_euclid(height as i64) as u32,
            ));
        } else if nx >= 0 && nx < width as i64 && ny >= 0 && ny < height as i64 {
            out.push((nx as u32, ny as u32));
        }
    }
}

fn validate_neighborhoods(
    name: &str,
    table: &HashMap<Resel, Vec<(i32, i32)>>,
) -> RegionResult<()> {
    for (class, offsets) in table {
        if offsets.is_empty() {
            return Err(RegionError::InvalidNeighborhood(format!(
                "{name} entry for {class:?} is empty"
            )));
        }
        if offsets.contains(&(0, 0)) {
            return Err(RegionError::InvalidNeighborhood(format!(
                "{name} entry for {class:?} contains the zero offset"
            )));
        }
    }
    Ok(())
}
