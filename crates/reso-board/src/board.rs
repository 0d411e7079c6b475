//! Board compilation
//!
//! [`Board::new`] turns an RGB image into the typed graph the simulator
//! runs over. Compilation classifies every pixel into a resel code, maps
//! the codes into regions (wire tones folded, wires grown eight-way), and
//! allocates one descriptor per region: a [`Wire`] for wire classes, a
//! [`Node`] for input/output/XOR/AND classes, nothing for inert hues.
//! Only five kinds of edges matter to the simulation, so only those are
//! materialised, as region-id lists keyed by source region:
//!
//! - wire → adjacent inputs (`adj_inputs`)
//! - input → adjacent XOR / AND / output nodes (`adj_xors`, `adj_ands`,
//!   `adj_outputs`)
//! - XOR, AND → adjacent outputs (`adj_outputs`)
//! - output → adjacent wires (`adj_wires`)
//!
//! Everything else a region may touch (wire against wire, input against
//! input, anything inert) is ignored.

use std::collections::HashMap;

use log::debug;
use reso_core::{Hue, Palette, Resel, ReselGrid, RgbImage, Role};
use reso_region::{MapperOptions, ORTHO_DIAG, RegionMap, map_regions};

use crate::error::{BoardError, BoardResult};

/// A wire region: carries one boolean between ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wire {
    /// Region id of the wire.
    pub region: usize,
    /// The wire's hue (fixed at compile time).
    pub hue: Hue,
    /// Whether the wire is energised.
    pub state: bool,
    /// Accumulator for the state the wire takes at the end of the current
    /// tick. False at every tick boundary.
    pub(crate) next_state: bool,
}

impl Wire {
    /// The tick-internal accumulator; false whenever no tick is running.
    pub fn next_state(&self) -> bool {
        self.next_state
    }
}

/// The role of a logic node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Conduit from wires into logic
    Input,
    /// Conduit from logic back onto wires
    Output,
    /// XOR element
    Xor,
    /// AND element
    And,
}

/// Tick-internal node state.
///
/// `Latched` is only ever taken by AND nodes: one false input pins the
/// node for the rest of the tick. The other kinds use `Unseen`/`SawTrue`
/// as plain false/true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeState {
    /// No input seen yet (reads as false)
    #[default]
    Unseen,
    /// At least one true input seen, none false
    SawTrue,
    /// A false input latched the node off for this tick
    Latched,
}

impl NodeState {
    /// Boolean reading of the state. `Latched` reads as true; a latched
    /// node never reaches a boolean read in a well-formed tick.
    pub fn as_bool(self) -> bool {
        !matches!(self, NodeState::Unseen)
    }
}

/// A logic node region. State is tick-internal and `Unseen` at every tick
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Region id of the node.
    pub region: usize,
    /// The node's role.
    pub kind: NodeKind,
    pub(crate) state: NodeState,
}

impl Node {
    /// The tick-internal state; `Unseen` whenever no tick is running.
    pub fn state(&self) -> NodeState {
        self.state
    }
}

/// Reference from a region id into the board's descriptor arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Element {
    Wire(usize),
    Node(usize),
}

/// A compiled circuit.
///
/// Holds the image, its classified grid, the region graph, and the
/// per-region descriptors and typed adjacencies. Created once from an
/// image; mutated only by [`Board::iterate`](crate::Board::iterate).
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) image: RgbImage,
    pub(crate) resel_map: ReselGrid,
    pub(crate) region_map: RegionMap,
    palette: Palette,
    pub(crate) wires: Vec<Wire>,
    pub(crate) nodes: Vec<Node>,
    /// Region id → descriptor, for every region that has one.
    pub(crate) slots: Vec<Option<Element>>,
    /// Node indices by role, in region order.
    pub(crate) inputs: Vec<usize>,
    pub(crate) outputs: Vec<usize>,
    pub(crate) xors: Vec<usize>,
    pub(crate) ands: Vec<usize>,
    /// Wire region → input regions.
    pub(crate) adj_inputs: HashMap<usize, Vec<usize>>,
    /// Input region → XOR regions.
    pub(crate) adj_xors: HashMap<usize, Vec<usize>>,
    /// Input region → AND regions.
    pub(crate) adj_ands: HashMap<usize, Vec<usize>>,
    /// Input, XOR, or AND region → output regions.
    pub(crate) adj_outputs: HashMap<usize, Vec<usize>>,
    /// Output region → wire regions.
    pub(crate) adj_wires: HashMap<usize, Vec<usize>>,
}

impl Board {
    /// Compile an image under the given palette.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownRegionClass`] if a region's class has
    /// no descriptor form (unreachable for grids produced by the
    /// compiler's own class table) and propagates mapper errors.
    pub fn new(image: RgbImage, palette: Palette) -> BoardResult<Board> {
        let resel_map = ReselGrid::from_image(&image);
        let region_map = map_regions(&resel_map, &mapper_options(palette))?;

        let mut wires = Vec::new();
        let mut nodes: Vec<Node> = Vec::new();
        let mut slots: Vec<Option<Element>> = vec![None; region_map.len()];
        let mut inputs = Vec::new();
        let mut outputs = Vec::new();
        let mut xors = Vec::new();
        let mut ands = Vec::new();

        for region in region_map.regions() {
            match palette.role_of(region.class) {
                Role::WireOn(hue) => {
                    // A wire starts energised if any of its pixels was
                    // drawn in the saturated tone.
                    let on = region
                        .pixels
                        .iter()
                        .any(|&(x, y)| resel_map.get(x, y) == Some(hue.on_code()));
                    slots[region.id] = Some(Element::Wire(wires.len()));
                    wires.push(Wire {
                        region: region.id,
                        hue,
                        state: on,
                        next_state: false,
                    });
                }
                role @ (Role::Input | Role::Output | Role::Xor | Role::And) => {
                    let (kind, list) = match role {
                        Role::Input => (NodeKind::Input, &mut inputs),
                        Role::Output => (NodeKind::Output, &mut outputs),
                        Role::Xor => (NodeKind::Xor, &mut xors),
                        _ => (NodeKind::And, &mut ands),
                    };
                    list.push(nodes.len());
                    slots[region.id] = Some(Element::Node(nodes.len()));
                    nodes.push(Node {
                        region: region.id,
                        kind,
                        state: NodeState::Unseen,
                    });
                }
                Role::Inert => {}
                Role::WireOff(_) => {
                    // The class table folds off tones away before mapping
                    return Err(BoardError::UnknownRegionClass {
                        class: region.class,
                    });
                }
            }
        }

        let mut adj_inputs = HashMap::new();
        let mut adj_xors = HashMap::new();
        let mut adj_ands = HashMap::new();
        let mut adj_outputs = HashMap::new();
        let mut adj_wires = HashMap::new();

        for wire in &wires {
            adj_inputs.insert(
                wire.region,
                adjacent_with_role(&region_map, palette, wire.region, |role| {
                    role == Role::Input
                })?,
            );
        }
        for &ni in &inputs {
            let region = nodes[ni].region;
            adj_xors.insert(
                region,
                adjacent_with_role(&region_map, palette, region, |role| role == Role::Xor)?,
            );
            adj_ands.insert(
                region,
                adjacent_with_role(&region_map, palette, region, |role| role == Role::And)?,
            );
            adj_outputs.insert(
                region,
                adjacent_with_role(&region_map, palette, region, |role| role == Role::Output)?,
            );
        }
        for &ni in xors.iter().chain(&ands) {
            let region = nodes[ni].region;
            adj_outputs.insert(
                region,
                adjacent_with_role(&region_map, palette, region, |role| role == Role::Output)?,
            );
        }
        for &ni in &outputs {
            let region = nodes[ni].region;
            adj_wires.insert(
                region,
                adjacent_with_role(&region_map, palette, region, |role| {
                    matches!(role, Role::WireOn(_))
                })?,
            );
        }

        debug!(
            "compiled {}x{} board: {} regions, {} wires, {} inputs, {} outputs, {} xors, {} ands",
            image.width(),
            image.height(),
            region_map.len(),
            wires.len(),
            inputs.len(),
            outputs.len(),
            xors.len(),
            ands.len()
        );

        Ok(Board {
            image,
            resel_map,
            region_map,
            palette,
            wires,
            nodes,
            slots,
            inputs,
            outputs,
            xors,
            ands,
            adj_inputs,
            adj_xors,
            adj_ands,
            adj_outputs,
            adj_wires,
        })
    }

    /// The board's image. Reflects wire states as of the last render.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// The board's resel grid. Reflects wire states as of the last render
    /// with `update_grid` set.
    pub fn resel_map(&self) -> &ReselGrid {
        &self.resel_map
    }

    /// The region graph the board was compiled from.
    pub fn region_map(&self) -> &RegionMap {
        &self.region_map
    }

    /// The palette the board was compiled under.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// All wire descriptors, in region order.
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// All node descriptors, in region order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The wire whose region covers `(x, y)`, if any.
    pub fn wire_at(&self, x: u32, y: u32) -> Option<&Wire> {
        match self.element_at(x, y)? {
            Element::Wire(i) => Some(&self.wires[i]),
            Element::Node(_) => None,
        }
    }

    /// The node whose region covers `(x, y)`, if any.
    pub fn node_at(&self, x: u32, y: u32) -> Option<&Node> {
        match self.element_at(x, y)? {
            Element::Node(i) => Some(&self.nodes[i]),
            Element::Wire(_) => None,
        }
    }

    fn element_at(&self, x: u32, y: u32) -> Option<Element> {
        let region = self.region_map.region_at_pixel(x, y)?;
        self.slots.get(region).copied().flatten()
    }
}

/// The mapper configuration the compiler uses: identity classes with the
/// palette's wire tones folded to their saturated code, eight-way wire
/// contiguity, orthogonal everything else, sparse index, no wrap.
fn mapper_options(palette: Palette) -> MapperOptions {
    let mut options = MapperOptions::default();
    for code in Resel::ALL {
        options.class_table.insert(code, code);
    }
    for &hue in palette.wire_hues() {
        options.class_table.insert(hue.off_code(), hue.on_code());
        options
            .contiguities
            .insert(hue.on_code(), ORTHO_DIAG.to_vec());
    }
    options
}

/// The adjacent regions of `region` whose class plays a matching role.
fn adjacent_with_role(
    region_map: &RegionMap,
    palette: Palette,
    region: usize,
    keep: impl Fn(Role) -> bool,
) -> BoardResult<Vec<usize>> {
    let mut out = Vec::new();
    for &adjacent in region_map.adjacent_regions(region)? {
        let class = region_map.region(adjacent)?.class;
        if keep(palette.role_of(class)) {
            out.push(adjacent);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reso_core::RgbImage;

    fn image_of(rows: &[&str]) -> RgbImage {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len()) as u32;
        RgbImage::from_fn(width, height, |x, y| {
            let byte = rows[y as usize].as_bytes()[x as usize];
            Resel::from_ascii(byte)
                .and_then(Resel::rgb)
                .unwrap_or((0, 0, 0))
        })
        .unwrap()
    }

    #[test]
    fn test_compile_counts() {
        // Wire feeding an input feeding an output feeding another wire
        let board = Board::new(image_of(&["RmMb"]), Palette::Legacy).unwrap();
        assert_eq!(board.wires().len(), 2);
        assert_eq!(board.nodes().len(), 2);
        assert_eq!(board.inputs.len(), 1);
        assert_eq!(board.outputs.len(), 1);
        assert!(board.xors.is_empty());
        assert!(board.ands.is_empty());
    }

    #[test]
    fn test_initial_wire_state() {
        // Mixed-tone wire is on; all-dark wire is off
        let board = Board::new(image_of(&["Rr.b"]), Palette::Legacy).unwrap();
        assert_eq!(board.wires().len(), 2);
        assert!(board.wire_at(0, 0).unwrap().state);
        assert!(board.wire_at(1, 0).unwrap().state);
        assert!(!board.wire_at(3, 0).unwrap().state);
    }

    #[test]
    fn test_typed_adjacency_shape() {
        let board = Board::new(image_of(&["RmCMb"]), Palette::Legacy).unwrap();
        let wire = board.wire_at(0, 0).unwrap().region;
        let input = board.node_at(1, 0).unwrap().region;
        let xor = board.node_at(2, 0).unwrap().region;
        let output = board.node_at(3, 0).unwrap().region;
        let sink = board.wire_at(4, 0).unwrap().region;

        assert_eq!(board.adj_inputs[&wire], vec![input]);
        assert_eq!(board.adj_xors[&input], vec![xor]);
        assert!(board.adj_ands[&input].is_empty());
        // The input touches the wire and the xor, neither of which is an
        // output
        assert!(board.adj_outputs[&input].is_empty());
        assert_eq!(board.adj_outputs[&xor], vec![output]);
        assert_eq!(board.adj_wires[&output], vec![sink]);
    }

    #[test]
    fn test_inert_pixels_have_no_descriptor() {
        let board = Board::new(image_of(&["G.Y"]), Palette::Legacy).unwrap();
        assert!(board.wires().is_empty());
        assert!(board.nodes().is_empty());
        // The inert regions still exist in the region graph
        assert_eq!(board.region_map().len(), 2);
        assert!(board.wire_at(0, 0).is_none());
        assert!(board.node_at(0, 0).is_none());
    }

    #[test]
    fn test_palettes_disagree_on_roles() {
        let image = image_of(&["OpP"]);
        let extended = Board::new(image.clone(), Palette::Extended).unwrap();
        assert_eq!(extended.wires().len(), 1);
        assert_eq!(extended.nodes().len(), 2);

        // Under the legacy palette the same image is all inert
        let legacy = Board::new(image, Palette::Legacy).unwrap();
        assert!(legacy.wires().is_empty());
        assert!(legacy.nodes().is_empty());
    }
}
