//! Tubenet Core -- topology discovery and routing for tube networks.
//!
//! A tube network is a connected set of tube cells embedded in a mutable
//! 3-D voxel grid, plus the insertion faces ("endpoints") of the non-tube
//! blocks that touch it. This crate answers two questions for the item
//! transport simulation that sits on top of it:
//!
//! 1. *Which network is this tube part of?* -- answered by a bounded,
//!    iterative flood fill ([`network::RoutingNetwork::build_from`]).
//! 2. *What is the fastest valid route from here for this item?* --
//!    answered by [`network::RoutingNetwork::get_best_route`], backed by a
//!    per-start-position route cache filled lazily by a
//!    [`solver::PathSolver`].
//!
//! # Collaborator seams
//!
//! The voxel grid, the tube entities and the inventories are owned by the
//! host game. They are reached only through the traits in [`capability`]:
//! [`capability::Grid`], [`capability::TubeCell`] and
//! [`capability::ItemHandler`].
//!
//! # Key Types
//!
//! - [`grid::BlockPos`] / [`grid::Direction`] -- integer voxel coordinates
//!   and the six axis faces.
//! - [`endpoint::Endpoint`] -- one insertion face of one block.
//! - [`route::Route`] -- destination, cost and move sequence.
//! - [`network::RoutingNetwork`] -- tubes, endpoints, route cache and the
//!   travel-time model.
//! - [`registry::NetworkRegistry`] -- owns live networks; tubes hold only
//!   a [`id::NetworkId`].
//! - [`config::RoutingConfig`] -- traversal duration and network size caps.

pub mod capability;
pub mod config;
pub mod dilation;
pub mod endpoint;
pub mod fixed;
pub mod grid;
pub mod id;
pub mod item;
pub mod network;
pub mod registry;
pub mod route;
pub mod solver;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
