//! Board simulation
//!
//! One tick moves boolean state across the typed graph in four phases:
//!
//! A. every wire drives its adjacent inputs, and through each input the
//!    XOR, AND, and output nodes behind it accumulate the wire's state
//!    (XOR toggles per input edge, AND latches off on a false, outputs
//!    OR);
//! B. XOR and AND nodes push their settled value onto adjacent outputs
//!    (an AND fires only from `SawTrue`, never from `Unseen` or
//!    `Latched`);
//! C. outputs OR into the `next_state` of adjacent wires;
//! D. every wire commits `next_state` and clears it, every node resets.
//!
//! XOR must see all of its input edges before it fires, which is why
//! phase A accumulates destructively and phase B runs only after every
//! wire has been walked. Deferring the wire update to phase C/D makes the
//! whole board observe one simultaneous step: a wire's next state depends
//! only on this tick's outputs, never on wires committed earlier in the
//! same loop. Each phase only applies commutative updates, so iteration
//! order within a phase cannot change the result.

use crate::board::{Board, Element, NodeState};

impl Board {
    /// Run one tick, then re-render the resel grid and/or image if asked.
    ///
    /// Iteration is total: edges that are missing simply propagate
    /// nothing.
    pub fn iterate(&mut self, update_grid: bool, update_image: bool) {
        let wires = &mut self.wires;
        let nodes = &mut self.nodes;
        let slots = &self.slots;
        let adj_inputs = &self.adj_inputs;
        let adj_xors = &self.adj_xors;
        let adj_ands = &self.adj_ands;
        let adj_outputs = &self.adj_outputs;
        let adj_wires = &self.adj_wires;

        // Phase A: wires drive inputs, inputs drive the nodes behind them
        for wi in 0..wires.len() {
            let wire_region = wires[wi].region;
            let wire_state = wires[wi].state;
            for input in &adj_inputs[&wire_region] {
                for xor in &adj_xors[input] {
                    if let Some(Element::Node(i)) = slots[*xor] {
                        let seen = nodes[i].state.as_bool();
                        nodes[i].state = if seen ^ wire_state {
                            NodeState::SawTrue
                        } else {
                            NodeState::Unseen
                        };
                    }
                }
                for and in &adj_ands[input] {
                    if let Some(Element::Node(i)) = slots[*and]
                        && nodes[i].state != NodeState::Latched
                    {
                        nodes[i].state = if wire_state {
                            NodeState::SawTrue
                        } else {
                            NodeState::Latched
                        };
                    }
                }
                for output in &adj_outputs[input] {
                    if let Some(Element::Node(i)) = slots[*output]
                        && wire_state
                    {
                        nodes[i].state = NodeState::SawTrue;
                    }
                }
            }
        }

        // Phase B: logic nodes drive their outputs
        for &xi in &self.xors {
            let region = nodes[xi].region;
            if nodes[xi].state.as_bool() {
                for output in &adj_outputs[&region] {
                    if let Some(Element::Node(i)) = slots[*output] {
                        nodes[i].state = NodeState::SawTrue;
                    }
                }
            }
        }
        for &ai in &self.ands {
            let region = nodes[ai].region;
            if nodes[ai].state == NodeState::SawTrue {
                for output in &adj_outputs[&region] {
                    if let Some(Element::Node(i)) = slots[*output] {
                        nodes[i].state = NodeState::SawTrue;
                    }
                }
            }
        }

        // Phase C: outputs drive wire next states
        for &oi in &self.outputs {
            let region = nodes[oi].region;
            if nodes[oi].state.as_bool() {
                for wire in &adj_wires[&region] {
                    if let Some(Element::Wire(i)) = slots[*wire] {
                        wires[i].next_state = true;
                    }
                }
            }
        }

        // Phase D: commit wires, reset nodes
        for wire in wires.iter_mut() {
            wire.state = wire.next_state;
            wire.next_state = false;
        }
        for node in nodes.iter_mut() {
            node.state = NodeState::Unseen;
        }

        if update_grid || update_image {
            self.render(update_grid, update_image);
        }
    }

    /// One tick with both refresh flags set, the common case.
    pub fn step(&mut self) {
        self.iterate(true, true);
    }
}
