//! Adapters implementing application ports

mod graphhopper_adapter;

pub use graphhopper_adapter::GraphHopperAdapter;
